//! File intake: validation and capture of the user's chosen document.

use std::fmt;
use std::sync::Arc;

use crate::error::WorkflowError;

const PDF_EXTENSION: &str = ".pdf";

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    Drop,
    Picker,
    Path,
}

impl IntakeSource {
    pub fn label(&self) -> &'static str {
        match self {
            IntakeSource::Drop => "drop",
            IntakeSource::Picker => "picker",
            IntakeSource::Path => "path",
        }
    }
}

/// A validated PDF chosen by the user.
///
/// Content is shared, so snapshots taken at submit time are cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub source: IntakeSource,
    content: Arc<[u8]>,
}

impl SelectedFile {
    /// Validate `name` and wrap the content. Fails with `InvalidFileType`
    /// unless the extension is `.pdf` in any case.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        source: IntakeSource,
    ) -> Result<Self, WorkflowError> {
        let name = name.into();
        validate_pdf_name(&name)?;
        let content: Vec<u8> = content.into();
        Ok(Self {
            name,
            source,
            content: content.into(),
        })
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Human-readable size for the filename label, e.g. `"12.4 KB"`.
    pub fn size_label(&self) -> String {
        format_size(self.size())
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("size", &self.size())
            .finish()
    }
}

pub fn validate_pdf_name(name: &str) -> Result<(), WorkflowError> {
    if is_pdf_name(name) {
        Ok(())
    } else {
        Err(WorkflowError::InvalidFileType {
            name: name.to_string(),
        })
    }
}

pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PDF_EXTENSION)
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
