use dioxus::prelude::*;
use extractor::select_endpoint;

use crate::components::LoadingDots;
use crate::state::use_workflow;

/// Chosen file label with the submit trigger
#[component]
pub fn FileInfo() -> Element {
    let controller = use_workflow();
    let state = controller.store().signal();

    let (file_name, size_label, submit_enabled, loading, awaiting_previous) = {
        let snapshot = state.read();
        let Some(file) = snapshot.selected() else {
            return rsx! {};
        };
        (
            file.name.clone(),
            file.size_label(),
            snapshot.is_submit_enabled(),
            snapshot.is_loading(),
            snapshot.is_awaiting_previous(),
        )
    };
    let endpoint = select_endpoint(&file_name);

    let submit_controller = controller.clone();
    let handle_submit = move |_| {
        let controller = submit_controller.clone();
        spawn(async move {
            // Outcome is recorded in the workflow state
            let _ = controller.submit().await;
        });
    };

    rsx! {
        div {
            class: "mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-5",
            div {
                class: "flex items-center justify-between gap-4",
                div {
                    class: "min-w-0",
                    p { class: "text-sm font-medium text-gray-900 truncate", "{file_name}" }
                    p {
                        class: "text-xs text-gray-500",
                        "{size_label} \u{00B7} {endpoint.label()} extractor"
                    }
                    if awaiting_previous {
                        p {
                            class: "mt-1 text-xs text-amber-600",
                            "Previous extraction is still finishing..."
                        }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-2 text-sm text-gray-600 hover:text-gray-900 disabled:opacity-50",
                        disabled: loading,
                        onclick: move |_| controller.clear_selection(),
                        "Clear"
                    }
                    button {
                        class: "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !submit_enabled,
                        onclick: handle_submit,
                        if loading || awaiting_previous {
                            LoadingDots {}
                        } else {
                            "Extract Data"
                        }
                    }
                }
            }
        }
    }
}
