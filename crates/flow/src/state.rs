//! Display state for the ask flow.
//!
//! All visible UI follows from one `DisplayState` value: the session
//! owns the state, views render it. There is no other channel through
//! which output changes.

use askline_client::Answer;

/// Fixed user-visible message for any failed submission.
///
/// HTTP errors, transport failures, and decode failures all collapse to
/// this one message; the underlying cause goes to the log instead.
pub const FAILURE_MESSAGE: &str = "An error occurred while fetching the answer.";

/// What the user currently sees.
///
/// Exactly one region is conceptually visible at a time: nothing
/// (`Idle`), the loading indicator (`Loading`), or the result region
/// (`Answered`/`Failed`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// No submission yet
    Idle,

    /// A submission is in flight
    Loading,

    /// The latest submission succeeded
    Answered(Answer),

    /// The latest submission failed; holds the user-visible message
    Failed(String),
}

impl DisplayState {
    /// True while a submission is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    /// True once a submission has settled, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, DisplayState::Answered(_) | DisplayState::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_not_settled() {
        assert!(DisplayState::Loading.is_loading());
        assert!(!DisplayState::Loading.is_settled());
    }

    #[test]
    fn test_answered_and_failed_are_settled() {
        let answered = DisplayState::Answered(Answer::new("A", Vec::new()));
        let failed = DisplayState::Failed(FAILURE_MESSAGE.to_string());
        assert!(answered.is_settled());
        assert!(failed.is_settled());
        assert!(!answered.is_loading());
    }
}
