//! Global state management

use dioxus::prelude::*;
use extractor::{ExtractionClient, WorkflowController, WorkflowState, WorkflowStore};

/// Workflow state held in a signal so every transition re-renders.
#[derive(Clone, Copy)]
pub struct SignalStore(Signal<WorkflowState>);

impl SignalStore {
    pub fn new(signal: Signal<WorkflowState>) -> Self {
        Self(signal)
    }

    /// The underlying signal; reading it subscribes the current component.
    pub fn signal(&self) -> Signal<WorkflowState> {
        self.0
    }
}

impl WorkflowStore for SignalStore {
    fn read_with<R>(&self, f: impl FnOnce(&WorkflowState) -> R) -> R {
        self.0.with(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut WorkflowState) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }
}

pub type AppController = WorkflowController<SignalStore, ExtractionClient>;

/// Provider component that owns the workflow for the whole page
#[component]
pub fn WorkflowProvider(api_base: String, children: Element) -> Element {
    let state = use_signal(WorkflowState::default);

    let controller: AppController = use_hook(move || {
        tracing::info!(api_base = %api_base, "Extraction workflow ready");
        WorkflowController::new(SignalStore::new(state), ExtractionClient::new(api_base))
    });

    use_context_provider(|| controller);

    children
}

/// Hook to access the workflow controller
pub fn use_workflow() -> AppController {
    use_context::<AppController>()
}

/// Result tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Summary,
    Fields,
    Text,
    Json,
}

impl ResultTab {
    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Summary => "Summary",
            ResultTab::Fields => "Fields",
            ResultTab::Text => "Full Text",
            ResultTab::Json => "JSON",
        }
    }

    pub fn variants() -> &'static [ResultTab] {
        &[
            ResultTab::Summary,
            ResultTab::Fields,
            ResultTab::Text,
            ResultTab::Json,
        ]
    }
}
