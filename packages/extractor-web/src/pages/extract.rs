//! Extraction page component

use dioxus::prelude::*;

use crate::components::{ErrorBanner, ExtractionSpinner, FileInfo, ResultsPanel, UploadArea};
use crate::state::use_workflow;

/// Extraction page - upload a PDF and review the extracted fields
#[component]
pub fn ExtractPage() -> Element {
    let controller = use_workflow();
    let state = controller.store().signal();

    let (is_loading, file_name) = {
        let snapshot = state.read();
        (
            snapshot.is_loading(),
            snapshot.selected().map(|f| f.name.clone()).unwrap_or_default(),
        )
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-3xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "PDF Data Extractor"
                    }
                    p {
                        class: "text-gray-600",
                        "Upload a statement or policy PDF to pull out its text and key fields."
                    }
                }
            }

            main {
                class: "max-w-3xl mx-auto px-4 py-8 space-y-4",

                UploadArea {}
                FileInfo {}
                ErrorBanner {}

                if is_loading {
                    ExtractionSpinner { file_name: file_name.clone() }
                } else {
                    ResultsPanel {}
                }
            }
        }
    }
}
