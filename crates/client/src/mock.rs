//! Mock question-answering client.
//!
//! Records every request and replays a queue of canned outcomes. Used by
//! flow and CLI tests, and handy for offline development against a
//! deterministic backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use askline_core::{AppError, AppResult};

use crate::client::QaClient;
use crate::types::{Answer, AskRequest};

/// Mock client for testing and development.
///
/// Outcomes are consumed in FIFO order, one per `ask` call. When the
/// queue is empty the client falls back to a deterministic answer echoing
/// the question, so it never blocks a caller.
#[derive(Debug, Default)]
pub struct MockQaClient {
    requests: Mutex<Vec<AskRequest>>,
    outcomes: Mutex<VecDeque<AppResult<Answer>>>,
}

impl MockQaClient {
    /// Create a mock client with an empty outcome queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful answer for a future `ask` call.
    pub fn enqueue_answer(&self, answer: Answer) {
        self.outcomes.lock().unwrap().push_back(Ok(answer));
    }

    /// Queue a failure for a future `ask` call.
    pub fn enqueue_error(&self, error: AppError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<AskRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn fallback_answer(request: &AskRequest) -> Answer {
        Answer::new(format!("Mock answer for: {}", request.question), Vec::new())
    }
}

#[async_trait::async_trait]
impl QaClient for MockQaClient {
    async fn ask(&self, request: &AskRequest) -> AppResult<Answer> {
        self.requests.lock().unwrap().push(request.clone());

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(Self::fallback_answer(request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_each_request_once() {
        let client = MockQaClient::new();
        let request = AskRequest::new("What is Rust?");

        client.ask(&request).await.unwrap();

        assert_eq!(client.request_count(), 1);
        assert_eq!(client.requests()[0], request);
    }

    #[tokio::test]
    async fn test_replays_outcomes_in_order() {
        let client = MockQaClient::new();
        client.enqueue_answer(Answer::new("first", vec!["s1".to_string()]));
        client.enqueue_error(AppError::Service("boom".to_string()));

        let first = client.ask(&AskRequest::new("q1")).await.unwrap();
        assert_eq!(first.answer, "first");

        let second = client.ask(&AskRequest::new("q2")).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_fallback_answer_when_queue_empty() {
        let client = MockQaClient::new();
        let answer = client.ask(&AskRequest::new("anything")).await.unwrap();
        assert!(answer.answer.contains("anything"));
        assert!(answer.sources.is_empty());
    }
}
