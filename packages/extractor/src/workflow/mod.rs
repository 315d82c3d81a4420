//! Workflow orchestration: session state, the store seam and the controller.

mod controller;
mod state;

pub use controller::{SubmissionGuard, WorkflowController};
pub use state::{Completion, SubmissionTicket, UiState, WorkflowState, INTERRUPTED_MESSAGE};

use std::cell::RefCell;
use std::rc::Rc;

/// Holder of the session state.
///
/// The browser shell backs this with a reactive signal so every transition
/// re-renders; the CLI and tests use [`SharedState`].
pub trait WorkflowStore: Clone + 'static {
    fn read_with<R>(&self, f: impl FnOnce(&WorkflowState) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut WorkflowState) -> R) -> R;

    fn snapshot(&self) -> WorkflowState {
        self.read_with(WorkflowState::clone)
    }
}

/// Plain single-threaded store.
#[derive(Clone, Default)]
pub struct SharedState(Rc<RefCell<WorkflowState>>);

impl WorkflowStore for SharedState {
    fn read_with<R>(&self, f: impl FnOnce(&WorkflowState) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut WorkflowState) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}
