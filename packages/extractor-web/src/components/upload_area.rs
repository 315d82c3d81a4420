//! Drop target and file picker

use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use extractor::intake::is_pdf_name;
use extractor::IntakeSource;

use crate::state::{use_workflow, AppController};

const FILE_INPUT_ID: &str = "pdf-file-input";

/// Drag-and-drop area; clicking it opens the file picker
#[component]
pub fn UploadArea() -> Element {
    let controller = use_workflow();
    let mut dragging = use_signal(|| false);

    let drop_controller = controller.clone();
    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        let files = evt.files();
        let controller = drop_controller.clone();
        spawn(async move {
            intake_first_file(controller, files, IntakeSource::Drop).await;
        });
    };

    let handle_change = move |evt: FormEvent| {
        let files = evt.files();
        let controller = controller.clone();
        spawn(async move {
            intake_first_file(controller, files, IntakeSource::Picker).await;
        });
    };

    rsx! {
        label {
            r#for: FILE_INPUT_ID,
            class: if dragging() {
                "block border-2 border-dashed border-indigo-500 bg-indigo-50 rounded-xl p-10 text-center cursor-pointer transition-colors"
            } else {
                "block border-2 border-dashed border-gray-300 bg-white rounded-xl p-10 text-center cursor-pointer hover:border-indigo-400 transition-colors"
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: handle_drop,

            div { class: "text-4xl mb-3", "\u{1F4C4}" } // 📄
            p { class: "text-gray-700 font-medium", "Drop your PDF here or click to browse" }
            p { class: "mt-1 text-xs text-gray-500", "Kotak and SBI statements are detected from the file name" }

            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: ".pdf,application/pdf",
                class: "hidden",
                onchange: handle_change,
            }
        }
    }
}

/// Hand the first file of a drop or picker event to the workflow.
///
/// Non-PDF names are rejected before their content is read.
async fn intake_first_file(
    controller: AppController,
    files: Option<Arc<dyn FileEngine>>,
    source: IntakeSource,
) {
    let Some(engine) = files else {
        return;
    };
    let Some(name) = engine.files().into_iter().next() else {
        return;
    };

    if !is_pdf_name(&name) {
        let _ = controller.intake(name, Vec::new(), source);
        return;
    }

    match engine.read_file(&name).await {
        Some(content) => {
            let _ = controller.intake(name, content, source);
        }
        None => controller.report_unreadable(&name),
    }
}
