use dotenvy::dotenv;
use std::env;

/// Environment variable naming the extraction server's base URL.
pub const API_URL_VAR: &str = "EXTRACTOR_API_URL";

/// Workflow configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Prefix for every endpoint path. Empty means same-origin relative paths.
    pub api_base_url: String,
}

impl ExtractorConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::new(env::var(API_URL_VAR).unwrap_or_default())
    }
}

/// Trim whitespace and trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
