//! Ask command handler.
//!
//! Submits one question to the configured question-answering service and
//! renders the answer with its sources.

use clap::Args;
use std::path::PathBuf;

use askline_client::HttpQaClient;
use askline_core::{config::AppConfig, AppError, AppResult};
use askline_flow::{AskSession, DisplayState, NullView, FAILURE_MESSAGE};

use crate::view::TerminalView;

/// Ask a question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    ///
    /// A failed submission is not an error at this level: the flow has
    /// already rendered the failure message, and the process stays
    /// healthy for the next invocation. Only setup problems (missing
    /// question, bad endpoint) propagate.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let question = self
            .get_question()?
            .ok_or_else(|| AppError::Config("No question provided".to_string()))?;

        tracing::debug!("Question: {}", question);

        let client = build_client(config)?;
        let mut session = AskSession::new();

        if self.json {
            // No terminal surface in JSON mode; the settled state is the
            // output.
            let mut view = NullView;
            session.ask(&client, question, &mut view).await;

            let output = match session.state() {
                DisplayState::Answered(answer) => serde_json::json!({
                    "answer": answer.answer,
                    "sources": answer.sources,
                }),
                _ => serde_json::json!({
                    "error": FAILURE_MESSAGE,
                }),
            };

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            let mut view = TerminalView::new(config.no_color);
            session.ask(&client, question, &mut view).await;
        }

        Ok(())
    }

    /// Get the question text from the positional argument or a file.
    fn get_question(&self) -> AppResult<Option<String>> {
        if let Some(ref question) = self.question {
            return Ok(Some(question.clone()));
        }

        if let Some(ref path) = self.file {
            let text = std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read question file {:?}: {}", path, e))
            })?;
            return Ok(Some(text.trim().to_string()));
        }

        Ok(None)
    }
}

/// Build the HTTP client from configuration.
fn build_client(config: &AppConfig) -> AppResult<HttpQaClient> {
    match config.timeout_secs {
        Some(secs) => HttpQaClient::with_timeout(&config.endpoint, secs),
        None => HttpQaClient::new(&config.endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_from_positional_argument() {
        let cmd = AskCommand {
            question: Some("What is Rust?".to_string()),
            file: None,
            json: false,
        };
        assert_eq!(
            cmd.get_question().unwrap(),
            Some("What is Rust?".to_string())
        );
    }

    #[test]
    fn test_no_question_is_none() {
        let cmd = AskCommand {
            question: None,
            file: None,
            json: false,
        };
        assert_eq!(cmd.get_question().unwrap(), None);
    }

    #[test]
    fn test_missing_question_file_is_config_error() {
        let cmd = AskCommand {
            question: None,
            file: Some(PathBuf::from("/nonexistent/question.txt")),
            json: false,
        };
        assert!(matches!(cmd.get_question(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_build_client_uses_configured_endpoint() {
        let mut config = AppConfig::default();
        config.endpoint = "http://qa.internal:9000".to_string();
        let client = build_client(&config).unwrap();
        assert_eq!(client.base_url(), "http://qa.internal:9000");
    }
}
