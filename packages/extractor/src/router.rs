//! Filename-based endpoint selection.
//!
//! Institution-specific extractors are picked by substring match on the
//! lower-cased filename. First matching rule wins; anything unmatched goes to
//! the universal extractor.

use std::fmt;

/// The closed set of extraction endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Universal,
    Kotak,
    Sbi,
}

impl Endpoint {
    /// Path on the extraction server. These strings are a contract with the server.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Universal => "/extract",
            Endpoint::Kotak => "/extract/kotak",
            Endpoint::Sbi => "/extract/sbi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Universal => "Universal",
            Endpoint::Kotak => "Kotak",
            Endpoint::Sbi => "SBI",
        }
    }

    pub fn variants() -> &'static [Endpoint] {
        &[Endpoint::Universal, Endpoint::Kotak, Endpoint::Sbi]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A routing rule: predicate over the lower-cased filename.
pub type RouteRule = (fn(&str) -> bool, Endpoint);

/// Routing table, evaluated top to bottom.
pub const ROUTES: &[RouteRule] = &[
    (|name| name.contains("kotak"), Endpoint::Kotak),
    (|name| name.contains("sbi"), Endpoint::Sbi),
];

pub fn select_endpoint(filename: &str) -> Endpoint {
    let lowered = filename.to_lowercase();
    let endpoint = ROUTES
        .iter()
        .find(|(matches, _)| matches(&lowered))
        .map(|(_, endpoint)| *endpoint)
        .unwrap_or(Endpoint::Universal);

    tracing::debug!(filename, endpoint = %endpoint, "Selected extraction endpoint");
    endpoint
}
