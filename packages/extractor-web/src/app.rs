//! Root application component

use dioxus::prelude::*;

use crate::config::api_base;
use crate::pages::ExtractPage;
use crate::state::WorkflowProvider;

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Link { rel: "stylesheet", href: TAILWIND_CDN }

        // Workflow context wraps the entire app
        WorkflowProvider {
            api_base: api_base().to_string(),
            ExtractPage {}
        }
    }
}
