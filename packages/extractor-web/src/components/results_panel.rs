//! Results area: summary, field listing, full text and JSON views

use dioxus::prelude::*;
use extractor::presenter::{FieldRow, JsonView, SummaryView};

use crate::state::{use_workflow, ResultTab};

#[component]
pub fn ResultsPanel() -> Element {
    let controller = use_workflow();
    let mut active_tab = use_signal(ResultTab::default);

    let Some(view) = controller.store().signal().read().result().cloned() else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "mt-6 bg-white rounded-lg shadow-sm border border-gray-200",

            // Tabs
            div {
                class: "flex items-center gap-1 border-b border-gray-100 px-4 pt-3",
                for tab in ResultTab::variants() {
                    {
                        let tab = *tab;
                        let is_active = active_tab() == tab;
                        rsx! {
                            button {
                                key: "{tab:?}",
                                class: if is_active {
                                    "px-4 py-2 text-sm font-medium border-b-2 border-indigo-600 text-indigo-700"
                                } else {
                                    "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
                                },
                                onclick: move |_| active_tab.set(tab),
                                "{tab.label()}"
                            }
                        }
                    }
                }
            }

            div {
                class: "p-5",
                {
                    match active_tab() {
                        ResultTab::Summary => rsx! { SummaryCard { summary: view.summary.clone() } },
                        ResultTab::Fields => rsx! { FieldTable { rows: view.rows.clone() } },
                        ResultTab::Text => rsx! {
                            pre {
                                class: "p-4 bg-gray-50 rounded text-xs whitespace-pre-wrap overflow-auto max-h-[32rem]",
                                "{view.full_text}"
                            }
                        },
                        ResultTab::Json => rsx! { JsonPanels { json: view.json.clone() } },
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(summary: SummaryView) -> Element {
    rsx! {
        dl {
            class: "grid grid-cols-2 sm:grid-cols-4 gap-4",
            Stat { label: "File", value: summary.file_name.clone() }
            Stat { label: "Text length", value: format!("{} chars", summary.text_length) }
            Stat { label: "Fields filled", value: summary.fields_label() }
            Stat { label: "Success rate", value: summary.rate_label() }
        }
        if let Some(extracted_at) = summary.extracted_at_label() {
            p { class: "mt-4 text-xs text-gray-500", "Extracted at {extracted_at}" }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "rounded-lg bg-gray-50 p-4",
            dt { class: "text-xs uppercase tracking-wide text-gray-500", "{label}" }
            dd { class: "mt-1 text-lg font-semibold text-gray-900 truncate", "{value}" }
        }
    }
}

#[component]
fn FieldTable(rows: Vec<FieldRow>) -> Element {
    rsx! {
        table {
            class: "w-full text-sm",
            thead {
                tr {
                    class: "text-left text-gray-500 border-b border-gray-100",
                    th { class: "py-2 pr-4 font-medium", "Field" }
                    th { class: "py-2 font-medium", "Value" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr {
                        key: "{row.key}",
                        class: "border-b border-gray-50",
                        td { class: "py-2 pr-4 text-gray-700", "{row.label}" }
                        td {
                            class: if row.filled { "py-2 text-gray-900" } else { "py-2 text-gray-400 italic" },
                            if row.filled {
                                "{row.display_value()}"
                            } else {
                                "not found"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn JsonPanels(json: JsonView) -> Element {
    rsx! {
        div {
            class: "grid gap-4 lg:grid-cols-2",
            JsonBlock { title: "Filled fields", body: json.filled.clone() }
            JsonBlock { title: "Empty fields", body: json.empty.clone() }
        }
        div {
            class: "mt-4",
            JsonBlock { title: "Complete JSON", body: json.complete.clone() }
        }
    }
}

#[component]
fn JsonBlock(title: &'static str, body: String) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold text-gray-700 mb-2", "{title}" }
            pre {
                class: "p-3 bg-gray-900 text-green-200 rounded text-xs overflow-auto max-h-96",
                "{body}"
            }
        }
    }
}
