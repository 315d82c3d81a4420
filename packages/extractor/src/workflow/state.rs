//! Session state and its transitions.
//!
//! ```text
//!            valid intake                 submit (file chosen)
//!   Idle ──────────────────▶ FileChosen ─────────────────────▶ Extracting
//!                               ▲  ▲                             │      │
//!                 valid intake  │  │ valid intake       success  │      │ failure
//!                               │  └──────── Failed ◀───────────┼──────┘
//!                               └─────────── Succeeded ◀────────┘
//! ```

use crate::error::WorkflowError;
use crate::intake::SelectedFile;
use crate::presenter::{ErrorView, ResultView};
use crate::router::{select_endpoint, Endpoint};

pub const INTERRUPTED_MESSAGE: &str = "Extraction was interrupted before a response arrived.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    FileChosen,
    Extracting,
    Succeeded,
    Failed,
}

impl UiState {
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::FileChosen => "file_chosen",
            UiState::Extracting => "extracting",
            UiState::Succeeded => "succeeded",
            UiState::Failed => "failed",
        }
    }
}

/// Snapshot of one submission: which request, against which selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub request_id: u64,
    pub generation: u64,
    pub file: SelectedFile,
    pub endpoint: Endpoint,
}

/// What happened to a finished request's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The selection changed while the request was in flight
    Stale,
    /// Not the request currently in flight
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: u64,
    generation: u64,
    settled: bool,
}

/// The single piece of session state owned by the workflow controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    ui_state: UiState,
    selected: Option<SelectedFile>,
    generation: u64,
    last_request_id: u64,
    in_flight: Option<InFlight>,
    error: Option<ErrorView>,
    result: Option<ResultView>,
}

impl WorkflowState {
    pub fn ui_state(&self) -> UiState {
        self.ui_state
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorView> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn is_loading(&self) -> bool {
        self.ui_state == UiState::Extracting
    }

    /// A new file was chosen while the previous request is still running.
    /// Submit stays disabled until that request finishes.
    pub fn is_awaiting_previous(&self) -> bool {
        self.is_in_flight() && self.ui_state != UiState::Extracting
    }

    /// A valid file replaces any prior selection and clears stale panels.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.generation += 1;
        self.ui_state = UiState::FileChosen;
        self.error = None;
        self.result = None;
    }

    /// Surface an error without touching the selection or the UI state.
    pub fn surface_error(&mut self, err: &WorkflowError) {
        self.error = Some(ErrorView::from(err));
        self.result = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.generation += 1;
        self.ui_state = UiState::Idle;
        self.error = None;
        self.result = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Enter `Extracting`. `Ok(None)` when a request is already in flight.
    pub fn begin_submission(&mut self) -> Result<Option<SubmissionTicket>, WorkflowError> {
        if self.in_flight.is_some() {
            return Ok(None);
        }

        let Some(file) = self.selected.clone() else {
            let err = WorkflowError::NoFileSelected;
            self.surface_error(&err);
            return Err(err);
        };

        self.last_request_id += 1;
        let ticket = SubmissionTicket {
            request_id: self.last_request_id,
            generation: self.generation,
            endpoint: select_endpoint(&file.name),
            file,
        };

        self.in_flight = Some(InFlight {
            request_id: ticket.request_id,
            generation: ticket.generation,
            settled: false,
        });
        self.ui_state = UiState::Extracting;
        self.error = None;
        self.result = None;

        Ok(Some(ticket))
    }

    /// Record a request's outcome. Outcomes for a superseded selection are dropped.
    pub fn finish(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<ResultView, WorkflowError>,
    ) -> Completion {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return Completion::Unknown;
        };
        if in_flight.request_id != ticket.request_id {
            return Completion::Unknown;
        }
        in_flight.settled = true;

        if ticket.generation != self.generation {
            return Completion::Stale;
        }

        match outcome {
            Ok(view) => {
                self.result = Some(view);
                self.error = None;
                self.ui_state = UiState::Succeeded;
            }
            Err(err) => {
                self.surface_error(&err);
                self.ui_state = UiState::Failed;
            }
        }
        Completion::Applied
    }

    /// Leave `Extracting` and re-enable submission. Runs on every exit path;
    /// a request that never settled is reported as interrupted.
    pub fn release(&mut self, request_id: u64) {
        if self.in_flight.as_ref().map(|f| f.request_id) != Some(request_id) {
            return;
        }
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        if !in_flight.settled
            && in_flight.generation == self.generation
            && self.ui_state == UiState::Extracting
        {
            self.error = Some(ErrorView::new(INTERRUPTED_MESSAGE));
            self.result = None;
            self.ui_state = UiState::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakeSource;
    use crate::presenter::present;
    use crate::types::ExtractionResult;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, b"%PDF".to_vec(), IntakeSource::Drop).unwrap()
    }

    fn view() -> ResultView {
        present(
            "a.pdf",
            &ExtractionResult {
                success: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_starts_idle_with_submit_enabled() {
        let state = WorkflowState::default();
        assert_eq!(state.ui_state(), UiState::Idle);
        assert!(state.is_submit_enabled());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_submit_without_file_keeps_state() {
        let mut state = WorkflowState::default();
        let err = state.begin_submission().unwrap_err();

        assert_eq!(err, WorkflowError::NoFileSelected);
        assert_eq!(state.ui_state(), UiState::Idle);
        assert_eq!(state.error().unwrap().message, "Please select a PDF file first.");
        assert!(state.is_submit_enabled());
    }

    #[test]
    fn test_second_begin_while_in_flight_is_noop() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();

        assert_eq!(state.begin_submission().unwrap(), None);
        assert_eq!(state.ui_state(), UiState::Extracting);
        assert!(!state.is_submit_enabled());

        state.finish(&ticket, Ok(view()));
        state.release(ticket.request_id);
        assert!(state.is_submit_enabled());
    }

    #[test]
    fn test_ticket_routes_by_filename() {
        let mut state = WorkflowState::default();
        state.select(pdf("SBI_march.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();
        assert_eq!(ticket.endpoint, Endpoint::Sbi);
        assert_eq!(ticket.file.name, "SBI_march.pdf");
    }

    #[test]
    fn test_failure_then_new_selection_resets() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();
        let completion = state.finish(
            &ticket,
            Err(WorkflowError::ExtractionFailed("corrupt pdf".into())),
        );
        state.release(ticket.request_id);

        assert_eq!(completion, Completion::Applied);
        assert_eq!(state.ui_state(), UiState::Failed);
        assert_eq!(state.error().unwrap().message, "corrupt pdf");

        state.select(pdf("b.pdf"));
        assert_eq!(state.ui_state(), UiState::FileChosen);
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_outcome_for_superseded_selection_is_stale() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();

        state.select(pdf("b.pdf"));
        assert_eq!(state.ui_state(), UiState::FileChosen);
        assert!(!state.is_submit_enabled());

        assert_eq!(state.finish(&ticket, Ok(view())), Completion::Stale);
        state.release(ticket.request_id);

        assert_eq!(state.ui_state(), UiState::FileChosen);
        assert!(state.result().is_none());
        assert_eq!(state.selected().unwrap().name, "b.pdf");
        assert!(state.is_submit_enabled());
    }

    #[test]
    fn test_awaiting_previous_only_after_reselection() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        assert!(!state.is_awaiting_previous());

        let ticket = state.begin_submission().unwrap().unwrap();
        assert!(!state.is_awaiting_previous());

        state.select(pdf("b.pdf"));
        assert!(state.is_awaiting_previous());

        state.finish(&ticket, Ok(view()));
        state.release(ticket.request_id);
        assert!(!state.is_awaiting_previous());
        assert!(state.is_submit_enabled());
    }

    #[test]
    fn test_release_without_outcome_reports_interruption() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();

        state.release(ticket.request_id);

        assert_eq!(state.ui_state(), UiState::Failed);
        assert_eq!(state.error().unwrap().message, INTERRUPTED_MESSAGE);
        assert!(state.is_submit_enabled());
    }

    #[test]
    fn test_release_ignores_other_requests() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();

        state.release(ticket.request_id + 1);
        assert!(state.is_in_flight());
    }

    #[test]
    fn test_invalid_intake_error_clears_results_only() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        let ticket = state.begin_submission().unwrap().unwrap();
        state.finish(&ticket, Ok(view()));
        state.release(ticket.request_id);

        state.surface_error(&WorkflowError::InvalidFileType {
            name: "report.docx".into(),
        });

        assert_eq!(state.ui_state(), UiState::Succeeded);
        assert_eq!(state.selected().unwrap().name, "a.pdf");
        assert!(state.result().is_none());
        assert_eq!(state.error().unwrap().message, "Please select a PDF file.");
    }

    #[test]
    fn test_clear_selection_returns_to_idle() {
        let mut state = WorkflowState::default();
        state.select(pdf("a.pdf"));
        state.clear_selection();
        assert_eq!(state.ui_state(), UiState::Idle);
        assert!(state.selected().is_none());
    }
}
