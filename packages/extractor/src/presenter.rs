//! Display-ready projections of an extraction result.
//!
//! Everything here is derived and read-only: presenting the same result twice
//! yields identical views.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::WorkflowError;
use crate::types::{ExtractedFields, ExtractionResult};

/// Extracted fields split by whether a usable value came back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldPartition {
    pub filled: BTreeMap<String, String>,
    pub empty: BTreeMap<String, Option<String>>,
}

impl FieldPartition {
    pub fn from_fields(fields: &ExtractedFields) -> Self {
        let mut partition = Self::default();
        for (key, value) in fields {
            match value {
                Some(v) if !v.trim().is_empty() => {
                    partition.filled.insert(key.clone(), v.clone());
                }
                _ => {
                    partition.empty.insert(key.clone(), value.clone());
                }
            }
        }
        partition
    }

    pub fn len(&self) -> usize {
        self.filled.len() + self.empty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rounded percentage of filled fields. Zero total yields 0.
pub fn success_rate(filled: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (filled as f64 / total as f64 * 100.0).round() as u32
}

/// `policy_holder_name` -> `Policy Holder Name`
pub fn field_label(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub file_name: String,
    pub text_length: usize,
    pub filled_fields: usize,
    pub total_fields: usize,
    pub success_rate: u32,
    pub extracted_at: Option<NaiveDateTime>,
}

impl SummaryView {
    /// `"1/2"`
    pub fn fields_label(&self) -> String {
        format!("{}/{}", self.filled_fields, self.total_fields)
    }

    /// `"50%"`
    pub fn rate_label(&self) -> String {
        format!("{}%", self.success_rate)
    }

    pub fn extracted_at_label(&self) -> Option<String> {
        self.extracted_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Pretty-printed JSON for the three field sets, each serialized on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonView {
    pub filled: String,
    pub empty: String,
    pub complete: String,
}

/// One row of the tabular field listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub key: String,
    pub label: String,
    pub value: Option<String>,
    pub filled: bool,
}

impl FieldRow {
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub summary: SummaryView,
    pub full_text: String,
    pub json: JsonView,
    pub partition: FieldPartition,
    pub rows: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&WorkflowError> for ErrorView {
    fn from(err: &WorkflowError) -> Self {
        Self::new(err.to_string())
    }
}

/// Build all views for a successful result.
///
/// Summary counts are the server-reported ones; the partition is recomputed
/// from the mapping. A disagreement is logged, not corrected.
pub fn present(file_name: &str, result: &ExtractionResult) -> ResultView {
    let partition = FieldPartition::from_fields(&result.extracted_json);

    let text_chars = result.text.chars().count();
    if !reported_counts_agree(&partition, text_chars, result) {
        tracing::warn!(
            file = file_name,
            reported_filled = result.filled_fields,
            reported_total = result.total_fields,
            reported_text_length = result.text_length,
            filled = partition.filled.len(),
            total = partition.len(),
            text_length = text_chars,
            "Server-reported counts disagree with the extracted content"
        );
    }

    let summary = SummaryView {
        file_name: file_name.to_string(),
        text_length: result.text_length,
        filled_fields: result.filled_fields,
        total_fields: result.total_fields,
        success_rate: success_rate(result.filled_fields, result.total_fields),
        extracted_at: result.extraction_timestamp,
    };

    let json = JsonView {
        filled: to_pretty_json(&partition.filled),
        empty: to_pretty_json(&partition.empty),
        complete: to_pretty_json(&result.extracted_json),
    };

    let rows = result
        .extracted_json
        .iter()
        .map(|(key, value)| FieldRow {
            key: key.clone(),
            label: field_label(key),
            value: value.clone(),
            filled: partition.filled.contains_key(key),
        })
        .collect();

    ResultView {
        summary,
        full_text: result.text.clone(),
        json,
        partition,
        rows,
    }
}

fn reported_counts_agree(
    partition: &FieldPartition,
    text_chars: usize,
    result: &ExtractionResult,
) -> bool {
    partition.filled.len() == result.filled_fields
        && partition.len() == result.total_fields
        && text_chars == result.text_length
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    // Maps of strings always serialize.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
