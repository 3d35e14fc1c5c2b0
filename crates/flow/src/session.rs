//! Ask-flow session.
//!
//! Drives one question from submission to rendered result: enter the
//! loading state, issue exactly one client call, and settle into either
//! an answer or the fixed failure message. A generation counter guards
//! against overlapping submissions so that only the latest one can
//! change what the user sees.

use askline_client::{Answer, AskRequest, QaClient};
use askline_core::AppResult;

use crate::state::{DisplayState, FAILURE_MESSAGE};
use crate::view::AskView;

/// Ticket for an in-flight submission.
///
/// Captures the generation at `begin` time; `settle` compares it against
/// the session's current generation and discards the outcome if a newer
/// submission has started since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
}

/// State machine for the ask flow.
///
/// The session owns the display state and renders it through a view on
/// every applied transition. It stays usable after failures: each new
/// `begin` replaces whatever was shown before.
#[derive(Debug)]
pub struct AskSession {
    state: DisplayState,
    generation: u64,
}

impl AskSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            state: DisplayState::Idle,
            generation: 0,
        }
    }

    /// The current display state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Start a submission: enter `Loading` and render it.
    ///
    /// Bumps the generation, which invalidates any still-unsettled
    /// earlier submission. Clearing the previous result (including its
    /// source list) is implied by rendering `Loading`.
    pub fn begin(&mut self, view: &mut dyn AskView) -> Submission {
        self.generation += 1;
        self.state = DisplayState::Loading;
        view.render(&self.state);

        tracing::debug!("Submission {} started", self.generation);
        Submission {
            generation: self.generation,
        }
    }

    /// Settle a submission with the client's outcome.
    ///
    /// Applies the outcome only if the submission is still the latest;
    /// stale outcomes are dropped without touching state or view.
    /// Returns whether the outcome was applied.
    pub fn settle(
        &mut self,
        submission: Submission,
        outcome: AppResult<Answer>,
        view: &mut dyn AskView,
    ) -> bool {
        if submission.generation != self.generation {
            tracing::debug!(
                "Discarding stale outcome for submission {} (current: {})",
                submission.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(answer) => {
                tracing::info!(
                    "Submission {} answered with {} sources",
                    submission.generation,
                    answer.sources.len()
                );
                DisplayState::Answered(answer)
            }
            Err(e) => {
                // One generic message for every failure class; the cause
                // only goes to the log.
                tracing::error!("Submission {} failed: {}", submission.generation, e);
                DisplayState::Failed(FAILURE_MESSAGE.to_string())
            }
        };

        view.render(&self.state);
        true
    }

    /// Run one full submission: begin, ask the client, settle.
    ///
    /// The awaited client call is the only suspension point. Returns
    /// whether the outcome was applied (false only if another `begin`
    /// happened while the call was in flight).
    pub async fn ask(
        &mut self,
        client: &dyn QaClient,
        question: impl Into<String>,
        view: &mut dyn AskView,
    ) -> bool {
        let request = AskRequest::new(question);
        let submission = self.begin(view);
        let outcome = client.ask(&request).await;
        self.settle(submission, outcome, view)
    }
}

impl Default for AskSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askline_client::MockQaClient;
    use askline_core::AppError;

    /// Test view that keeps every rendered state in order.
    #[derive(Debug, Default)]
    struct RecordingView {
        rendered: Vec<DisplayState>,
    }

    impl AskView for RecordingView {
        fn render(&mut self, state: &DisplayState) {
            self.rendered.push(state.clone());
        }
    }

    #[tokio::test]
    async fn test_ask_issues_exactly_one_request() {
        let client = MockQaClient::new();
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "What is Rust?", &mut view).await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].question, "What is Rust?");
    }

    #[tokio::test]
    async fn test_success_renders_answer_and_sources_in_order() {
        let client = MockQaClient::new();
        client.enqueue_answer(Answer::new(
            "A",
            vec!["s1".to_string(), "s2".to_string()],
        ));
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        let applied = session.ask(&client, "Q", &mut view).await;
        assert!(applied);

        match session.state() {
            DisplayState::Answered(answer) => {
                assert_eq!(answer.answer, "A");
                assert_eq!(answer.sources, vec!["s1", "s2"]);
            }
            other => panic!("Expected Answered, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_with_empty_sources_is_not_an_error() {
        let client = MockQaClient::new();
        client.enqueue_answer(Answer::new("A", Vec::new()));
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "Q", &mut view).await;

        match session.state() {
            DisplayState::Answered(answer) => assert!(answer.sources.is_empty()),
            other => panic!("Expected Answered, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_renders_fixed_message() {
        let client = MockQaClient::new();
        client.enqueue_error(AppError::Service(
            "Service error (500 Internal Server Error): not json".to_string(),
        ));
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "Q", &mut view).await;

        assert_eq!(
            session.state(),
            &DisplayState::Failed(FAILURE_MESSAGE.to_string())
        );
        // Loading is never left visible
        assert!(!session.state().is_loading());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_same_message() {
        let client = MockQaClient::new();
        client.enqueue_error(AppError::Service(
            "Failed to reach service: connection refused".to_string(),
        ));
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "Q", &mut view).await;

        assert_eq!(
            session.state(),
            &DisplayState::Failed(FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_renders_loading_then_settled_exactly_once_each() {
        let client = MockQaClient::new();
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "Q", &mut view).await;

        assert_eq!(view.rendered.len(), 2);
        assert!(view.rendered[0].is_loading());
        assert!(view.rendered[1].is_settled());
    }

    #[test]
    fn test_stale_settlement_is_discarded() {
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        let first = session.begin(&mut view);
        let second = session.begin(&mut view);

        // First submission resolves after the second one started
        let applied = session.settle(first, Ok(Answer::new("old", Vec::new())), &mut view);
        assert!(!applied);
        assert!(session.state().is_loading());

        // The later submission wins regardless of arrival order
        let applied = session.settle(second, Ok(Answer::new("new", Vec::new())), &mut view);
        assert!(applied);
        assert_eq!(
            session.state(),
            &DisplayState::Answered(Answer::new("new", Vec::new()))
        );

        // Two begins + one applied settlement; the stale one never rendered
        assert_eq!(view.rendered.len(), 3);
    }

    #[tokio::test]
    async fn test_session_usable_after_failure() {
        let client = MockQaClient::new();
        client.enqueue_error(AppError::Service("boom".to_string()));
        client.enqueue_answer(Answer::new("recovered", Vec::new()));
        let mut session = AskSession::new();
        let mut view = RecordingView::default();

        session.ask(&client, "Q1", &mut view).await;
        assert!(matches!(session.state(), DisplayState::Failed(_)));

        session.ask(&client, "Q2", &mut view).await;
        assert_eq!(
            session.state(),
            &DisplayState::Answered(Answer::new("recovered", Vec::new()))
        );
    }
}
