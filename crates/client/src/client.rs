//! Question-answering client abstraction.
//!
//! The `QaClient` trait is the seam between the ask flow and the
//! transport: flow logic talks to this trait, and tests substitute a
//! recording mock for the HTTP implementation.

use askline_core::AppResult;

use crate::types::{Answer, AskRequest};

/// Trait for question-answering backends.
#[async_trait::async_trait]
pub trait QaClient: Send + Sync {
    /// Submit one question and wait for the answer.
    ///
    /// Returns the decoded answer on success. HTTP non-success status,
    /// transport failures, and decode failures all surface as errors;
    /// callers decide how to present them.
    async fn ask(&self, request: &AskRequest) -> AppResult<Answer>;
}
