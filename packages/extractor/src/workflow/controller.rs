use std::rc::Rc;

use tracing::{debug, info, warn};

use super::state::Completion;
use super::WorkflowStore;
use crate::client::ExtractionApi;
use crate::error::WorkflowError;
use crate::intake::{IntakeSource, SelectedFile};
use crate::presenter::present;

/// Wires UI triggers to intake, routing, upload and presentation.
pub struct WorkflowController<S, A> {
    store: S,
    api: Rc<A>,
}

impl<S: Clone, A> Clone for WorkflowController<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: Rc::clone(&self.api),
        }
    }
}

impl<S, A> WorkflowController<S, A>
where
    S: WorkflowStore,
    A: ExtractionApi,
{
    pub fn new(store: S, api: A) -> Self {
        Self {
            store,
            api: Rc::new(api),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and capture a file from a drop, picker or path.
    ///
    /// On rejection the previous selection stays in place.
    pub fn intake(
        &self,
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        source: IntakeSource,
    ) -> Result<(), WorkflowError> {
        match SelectedFile::new(name, content, source) {
            Ok(file) => {
                info!(file = %file.name, size = file.size(), source = source.label(), "File selected");
                self.store.update(|s| s.select(file));
                Ok(())
            }
            Err(err) => {
                warn!(kind = err.kind(), source = source.label(), "Rejected file intake");
                self.store.update(|s| s.surface_error(&err));
                Err(err)
            }
        }
    }

    /// Record that a chosen file's content could not be read.
    pub fn report_unreadable(&self, name: &str) {
        let err = WorkflowError::ExtractionFailed(format!("Could not read {name}"));
        warn!(file = name, kind = err.kind(), "Selected file could not be read");
        self.store.update(|s| s.surface_error(&err));
    }

    pub fn clear_selection(&self) {
        self.store.update(|s| s.clear_selection());
    }

    pub fn dismiss_error(&self) {
        self.store.update(|s| s.dismiss_error());
    }

    /// Run one extraction for the current selection.
    ///
    /// A call while another extraction is in flight does nothing. Returns the
    /// cycle's error after it has been recorded in the state.
    pub async fn submit(&self) -> Result<(), WorkflowError> {
        let Some(ticket) = self.store.update(|s| s.begin_submission())? else {
            info!("Previous extraction still finishing, ignoring submit");
            return Ok(());
        };
        let _guard = SubmissionGuard::new(self.store.clone(), ticket.request_id);

        info!(
            request_id = ticket.request_id,
            file = %ticket.file.name,
            endpoint = %ticket.endpoint,
            "Extraction started"
        );

        let outcome = self
            .api
            .extract(&ticket.file, ticket.endpoint)
            .await
            .map_err(WorkflowError::from)
            .and_then(|result| {
                if result.success {
                    Ok(present(&ticket.file.name, &result))
                } else {
                    Err(WorkflowError::ExtractionFailed(result.failure_message()))
                }
            });

        let failure = outcome.as_ref().err().cloned();
        match self.store.update(|s| s.finish(&ticket, outcome)) {
            Completion::Applied => match &failure {
                None => info!(request_id = ticket.request_id, "Extraction succeeded"),
                Some(err) => warn!(
                    request_id = ticket.request_id,
                    kind = err.kind(),
                    error = %err,
                    "Extraction failed"
                ),
            },
            Completion::Stale => {
                warn!(
                    request_id = ticket.request_id,
                    file = %ticket.file.name,
                    "Selection changed during extraction, discarding result"
                );
                return Ok(());
            }
            Completion::Unknown => {
                debug!(request_id = ticket.request_id, "Outcome for unknown request ignored");
                return Ok(());
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Holds the "submission allowed" slot for one request. Dropping it releases
/// the slot, whether the request finished, failed, panicked or was abandoned.
pub struct SubmissionGuard<S: WorkflowStore> {
    store: S,
    request_id: u64,
}

impl<S: WorkflowStore> SubmissionGuard<S> {
    pub fn new(store: S, request_id: u64) -> Self {
        Self { store, request_id }
    }
}

impl<S: WorkflowStore> Drop for SubmissionGuard<S> {
    fn drop(&mut self) {
        let request_id = self.request_id;
        self.store.update(|s| s.release(request_id));
        debug!(request_id, "Submission slot released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::router::Endpoint;
    use crate::types::ExtractionResult;
    use crate::workflow::{SharedState, UiState, INTERRUPTED_MESSAGE};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted extraction backend. Optionally blocks until a gate fires.
    #[derive(Default)]
    struct FakeApi {
        calls: Rc<RefCell<Vec<(String, Endpoint)>>>,
        responses: RefCell<VecDeque<crate::error::Result<ExtractionResult>>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FakeApi {
        fn responding(response: crate::error::Result<ExtractionResult>) -> Self {
            let api = Self::default();
            api.responses.borrow_mut().push_back(response);
            api
        }

        fn gated(self, gate: oneshot::Receiver<()>) -> Self {
            *self.gate.borrow_mut() = Some(gate);
            self
        }
    }

    #[async_trait(?Send)]
    impl ExtractionApi for FakeApi {
        async fn extract(
            &self,
            file: &SelectedFile,
            endpoint: Endpoint,
        ) -> crate::error::Result<ExtractionResult> {
            self.calls.borrow_mut().push((file.name.clone(), endpoint));
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(ExtractionResult {
                        success: true,
                        ..Default::default()
                    })
                })
        }
    }

    fn statement() -> ExtractionResult {
        serde_json::from_str(
            r#"{"success":true,"text":"ABC","text_length":3,
                "extracted_json":{"name":"John","acct":""},
                "filled_fields":1,"total_fields":2}"#,
        )
        .unwrap()
    }

    fn controller(api: FakeApi) -> (WorkflowController<SharedState, FakeApi>, SharedState) {
        let state = SharedState::default();
        (WorkflowController::new(state.clone(), api), state)
    }

    #[tokio::test]
    async fn test_successful_cycle_renders_views() {
        let api = FakeApi::responding(Ok(statement()));
        let calls = Rc::clone(&api.calls);
        let (controller, state) = controller(api);

        controller
            .intake("statement.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();
        assert_eq!(state.snapshot().ui_state(), UiState::FileChosen);

        controller.submit().await.unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.ui_state(), UiState::Succeeded);
        assert!(snapshot.is_submit_enabled());
        let view = snapshot.result().unwrap();
        assert_eq!(view.summary.fields_label(), "1/2");
        assert_eq!(view.summary.rate_label(), "50%");
        assert_eq!(
            calls.borrow().as_slice(),
            &[("statement.pdf".to_string(), Endpoint::Universal)]
        );
    }

    #[tokio::test]
    async fn test_invalid_file_issues_no_request() {
        let api = FakeApi::default();
        let calls = Rc::clone(&api.calls);
        let (controller, state) = controller(api);

        let err = controller
            .intake("report.docx", b"PK".to_vec(), IntakeSource::Drop)
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidFileType { .. }));

        assert_eq!(
            controller.submit().await.unwrap_err(),
            WorkflowError::NoFileSelected
        );
        assert!(calls.borrow().is_empty());
        assert_eq!(state.snapshot().ui_state(), UiState::Idle);
    }

    #[tokio::test]
    async fn test_rejected_intake_keeps_previous_selection() {
        let (controller, state) = controller(FakeApi::default());
        controller
            .intake("first.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();
        let _ = controller.intake("notes.txt", b"hi".to_vec(), IntakeSource::Picker);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.selected().unwrap().name, "first.pdf");
        assert_eq!(snapshot.ui_state(), UiState::FileChosen);
        assert!(snapshot.error().is_some());
    }

    #[tokio::test]
    async fn test_server_failure_enters_failed_and_reenables_submit() {
        let api = FakeApi::responding(Err(ClientError::Api {
            status: 500,
            message: "corrupt pdf".into(),
        }));
        let (controller, state) = controller(api);
        controller
            .intake("statement.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        let err = controller.submit().await.unwrap_err();

        assert_eq!(err, WorkflowError::ExtractionFailed("corrupt pdf".into()));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.ui_state(), UiState::Failed);
        assert_eq!(snapshot.error().unwrap().message, "corrupt pdf");
        assert!(snapshot.result().is_none());
        assert!(snapshot.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_unsuccessful_result_fails_the_cycle() {
        let api = FakeApi::responding(Ok(ExtractionResult {
            success: false,
            error: Some("corrupt pdf".into()),
            ..Default::default()
        }));
        let (controller, state) = controller(api);
        controller
            .intake("a.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        let err = controller.submit().await.unwrap_err();

        assert_eq!(err, WorkflowError::ExtractionFailed("corrupt pdf".into()));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.ui_state(), UiState::Failed);
        assert_eq!(snapshot.error().unwrap().message, "corrupt pdf");
        assert!(snapshot.result().is_none());
        assert!(snapshot.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_unsuccessful_result_without_message_uses_fallback() {
        let api = FakeApi::responding(Ok(ExtractionResult::default()));
        let (controller, state) = controller(api);
        controller
            .intake("a.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        assert!(controller.submit().await.is_err());
        assert_eq!(state.snapshot().ui_state(), UiState::Failed);
        assert_eq!(state.snapshot().error().unwrap().message, "Failed to extract");
    }

    #[test]
    fn test_unreadable_file_surfaces_error() {
        let (controller, state) = controller(FakeApi::default());
        controller
            .intake("first.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        controller.report_unreadable("second.pdf");

        let snapshot = state.snapshot();
        assert_eq!(snapshot.error().unwrap().message, "Could not read second.pdf");
        assert_eq!(snapshot.selected().unwrap().name, "first.pdf");
        assert_eq!(snapshot.ui_state(), UiState::FileChosen);
    }

    #[tokio::test]
    async fn test_submit_while_extracting_issues_single_request() {
        let (release, gate) = oneshot::channel();
        let api = FakeApi::responding(Ok(statement())).gated(gate);
        let calls = Rc::clone(&api.calls);
        let (controller, state) = controller(api);
        controller
            .intake("statement.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        let mut first = std::pin::pin!(controller.submit());
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert_eq!(state.snapshot().ui_state(), UiState::Extracting);
        assert!(!state.snapshot().is_submit_enabled());

        controller.submit().await.unwrap();
        assert_eq!(calls.borrow().len(), 1);

        release.send(()).unwrap();
        first.await.unwrap();

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(state.snapshot().ui_state(), UiState::Succeeded);
        assert!(state.snapshot().is_submit_enabled());
    }

    #[tokio::test]
    async fn test_result_for_replaced_selection_is_discarded() {
        let (release, gate) = oneshot::channel();
        let api = FakeApi::responding(Ok(statement())).gated(gate);
        let (controller, state) = controller(api);
        controller
            .intake("old.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        let mut pending = std::pin::pin!(controller.submit());
        assert!(futures::poll!(pending.as_mut()).is_pending());

        controller
            .intake("new.pdf", b"%PDF".to_vec(), IntakeSource::Drop)
            .unwrap();
        release.send(()).unwrap();
        pending.await.unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.ui_state(), UiState::FileChosen);
        assert_eq!(snapshot.selected().unwrap().name, "new.pdf");
        assert!(snapshot.result().is_none());
        assert!(snapshot.is_submit_enabled());
    }

    #[test]
    fn test_abandoned_submission_releases_slot() {
        let (_release, gate) = oneshot::channel::<()>();
        let (controller, state) = controller(FakeApi::default().gated(gate));
        controller
            .intake("statement.pdf", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        assert!(controller.submit().now_or_never().is_none());

        let snapshot = state.snapshot();
        assert!(snapshot.is_submit_enabled());
        assert_eq!(snapshot.ui_state(), UiState::Failed);
        assert_eq!(snapshot.error().unwrap().message, INTERRUPTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_kotak_file_routes_to_kotak_endpoint() {
        let api = FakeApi::default();
        let calls = Rc::clone(&api.calls);
        let (controller, state) = controller(api);
        controller
            .intake("Kotak_Statement.PDF", b"%PDF".to_vec(), IntakeSource::Picker)
            .unwrap();

        controller.submit().await.unwrap();
        assert_eq!(calls.borrow()[0].1, Endpoint::Kotak);
        assert_eq!(state.snapshot().ui_state(), UiState::Succeeded);
    }
}
