//! Client-side PDF extraction workflow.
//!
//! Takes a user-chosen PDF, routes it to one of the extraction endpoints by
//! filename, uploads it and turns the server's answer into display-ready views.
//! The browser shell and the CLI both drive the same [`WorkflowController`].
//!
//! # Example
//!
//! ```rust,ignore
//! use extractor::{ExtractionClient, ExtractorConfig, IntakeSource, SharedState, WorkflowController};
//!
//! let config = ExtractorConfig::from_env();
//! let state = SharedState::default();
//! let controller = WorkflowController::new(state.clone(), ExtractionClient::new(config.api_base_url));
//!
//! controller.intake("statement.pdf", bytes, IntakeSource::Picker)?;
//! controller.submit().await?;
//!
//! if let Some(view) = state.snapshot().result() {
//!     println!("{}/{} fields", view.summary.filled_fields, view.summary.total_fields);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod intake;
pub mod presenter;
pub mod router;
pub mod types;
pub mod workflow;

pub use client::{ExtractionApi, ExtractionClient, PDF_FIELD_NAME};
pub use config::ExtractorConfig;
pub use error::{ClientError, Result, WorkflowError};
pub use intake::{IntakeSource, SelectedFile};
pub use presenter::{ErrorView, FieldPartition, JsonView, ResultView, SummaryView};
pub use router::{select_endpoint, Endpoint};
pub use types::ExtractionResult;
pub use workflow::{SharedState, UiState, WorkflowController, WorkflowState, WorkflowStore};
