use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Extracted field values keyed by field name. `None` means the server
/// reported the field as absent.
pub type ExtractedFields = BTreeMap<String, Option<String>>;

/// Response body from an extraction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub text_length: usize,
    #[serde(default, deserialize_with = "deserialize_fields")]
    pub extracted_json: ExtractedFields,
    #[serde(default)]
    pub filled_fields: usize,
    #[serde(default)]
    pub total_fields: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub extraction_timestamp: Option<NaiveDateTime>,
}

/// Shown when a failed extraction carries no usable error text.
pub const FALLBACK_ERROR: &str = "Failed to extract";

impl ExtractionResult {
    /// The server's error text, or the generic fallback when it is missing or blank.
    pub fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR)
            .to_string()
    }
}

/// Best-effort timestamp: local date-time, RFC 3339 with offset (kept as the
/// sender's local time) or a space-separated date-time. Anything else is `None`.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let parsed = raw
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok());

    if parsed.is_none() {
        tracing::debug!(timestamp = raw, "Ignoring unparseable extraction timestamp");
    }
    parsed
}

/// Accepts string, null, number or boolean field values. Nested values are
/// kept as their JSON text.
fn deserialize_fields<'de, D>(deserializer: D) -> Result<ExtractedFields, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (key, value)
        })
        .collect())
}
