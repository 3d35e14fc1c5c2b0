//! Wire types for the question-answering service.
//!
//! These structs mirror the service's JSON contract exactly: a request
//! carrying one question, a response carrying an answer plus the source
//! identifiers it was drawn from.

use serde::{Deserialize, Serialize};

/// A question submitted to the service.
///
/// Serializes to `{"question": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user-entered question text
    pub question: String,
}

impl AskRequest {
    /// Create a request from question text.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// A successful answer from the service.
///
/// Both fields are required: a payload missing either one fails to
/// deserialize and is treated as a decode error rather than rendered as
/// empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text, rendered verbatim
    pub answer: String,

    /// Source identifiers, in display order
    pub sources: Vec<String>,
}

impl Answer {
    /// Create an answer with sources.
    pub fn new(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_serializes_question_key() {
        let request = AskRequest::new("What is a borrow checker?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "What is a borrow checker?"})
        );
    }

    #[test]
    fn test_answer_deserializes() {
        let json = r#"{"answer": "A", "sources": ["s1", "s2"]}"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.answer, "A");
        assert_eq!(answer.sources, vec!["s1", "s2"]);
    }

    #[test]
    fn test_answer_empty_sources() {
        let json = r#"{"answer": "A", "sources": []}"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_answer_missing_sources_is_decode_error() {
        let json = r#"{"answer": "A"}"#;
        assert!(serde_json::from_str::<Answer>(json).is_err());
    }

    #[test]
    fn test_answer_missing_answer_is_decode_error() {
        let json = r#"{"sources": ["s1"]}"#;
        assert!(serde_json::from_str::<Answer>(json).is_err());
    }
}
