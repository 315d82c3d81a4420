//! Reusable UI components

mod error_banner;
mod file_info;
mod loading;
mod results_panel;
mod upload_area;

pub use error_banner::*;
pub use file_info::*;
pub use loading::*;
pub use results_panel::*;
pub use upload_area::*;
