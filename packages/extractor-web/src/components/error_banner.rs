use dioxus::prelude::*;

use crate::state::use_workflow;

/// Dismissable error area
#[component]
pub fn ErrorBanner() -> Element {
    let controller = use_workflow();
    let error = controller.store().signal().read().error().cloned();

    let Some(error) = error else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "flex items-start justify-between gap-4 bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
            role: "alert",
            p { class: "text-sm", "{error.message}" }
            button {
                class: "text-red-500 hover:text-red-700 text-sm font-medium",
                onclick: move |_| controller.dismiss_error(),
                "Dismiss"
            }
        }
    }
}
