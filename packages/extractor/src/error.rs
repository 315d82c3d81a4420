//! Error types for the extraction workflow.

use thiserror::Error;

/// Result type for extraction client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures of a single upload/fetch cycle.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was obtained (connection refused, DNS, aborted body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status or `success: false`
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON document
    #[error("Malformed response (HTTP {status}): {source}")]
    Malformed {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced to the user by the workflow controller.
///
/// Every variant is terminal for the current cycle only; the user can always
/// reselect or resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Please select a PDF file.")]
    InvalidFileType { name: String },

    #[error("Please select a PDF file first.")]
    NoFileSelected,

    #[error("{0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    TransportFailure(String),
}

impl WorkflowError {
    /// Short machine-friendly tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::InvalidFileType { .. } => "invalid_file_type",
            WorkflowError::NoFileSelected => "no_file_selected",
            WorkflowError::ExtractionFailed(_) => "extraction_failed",
            WorkflowError::TransportFailure(_) => "transport_failure",
        }
    }
}

impl From<ClientError> for WorkflowError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(e) => WorkflowError::TransportFailure(e.to_string()),
            ClientError::Api { message, .. } => WorkflowError::ExtractionFailed(message),
            malformed @ ClientError::Malformed { .. } => {
                WorkflowError::ExtractionFailed(malformed.to_string())
            }
        }
    }
}
