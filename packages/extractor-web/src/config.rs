//! Extraction server location

use std::sync::OnceLock;

use extractor::config::normalize_base_url;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_base(url: &str) {
    API_BASE.set(normalize_base_url(url)).ok();
}

/// Get the configured API base URL
pub fn api_base() -> &'static str {
    API_BASE.get().map(|s| s.as_str()).unwrap_or("")
}

/// Base URL baked in at build time, else the page's own origin.
///
/// The browser HTTP client needs absolute URLs, so an empty setting resolves
/// to the origin the shell was served from.
pub fn resolve_api_base() -> String {
    let configured = option_env!("EXTRACTOR_API_URL").unwrap_or_default();
    choose_base(configured, page_origin())
}

fn choose_base(configured: &str, origin: Option<String>) -> String {
    let configured = normalize_base_url(configured);
    if !configured.is_empty() {
        return configured;
    }
    origin.map(|o| normalize_base_url(&o)).unwrap_or_default()
}

#[cfg(feature = "web")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(feature = "web"))]
fn page_origin() -> Option<String> {
    None
}
