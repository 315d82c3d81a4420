//! Loading components

use dioxus::prelude::*;

/// Shown while an extraction is in flight
#[component]
pub fn ExtractionSpinner(file_name: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-10",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Extracting data from {file_name}..." }
        }
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
