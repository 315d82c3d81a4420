//! Pages

mod extract;

pub use extract::*;
