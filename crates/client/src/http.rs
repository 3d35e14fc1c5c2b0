//! HTTP implementation of the question-answering client.
//!
//! Speaks the service's `/ask` endpoint: one POST with a JSON body
//! `{"question": ...}`, one JSON response with `answer` and `sources`.

use std::time::Duration;

use askline_core::{AppError, AppResult};

use crate::client::QaClient;
use crate::types::{Answer, AskRequest};

/// HTTP client for the question-answering service.
pub struct HttpQaClient {
    /// Base URL of the service
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpQaClient {
    /// Create a client for the given base URL with no request timeout.
    ///
    /// Without a timeout a request may suspend indefinitely if the
    /// service never settles; pass a timeout via `with_timeout` to bound
    /// the wait.
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        Self::build(base_url, None)
    }

    /// Create a client with a request timeout in seconds.
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        Self::build(base_url, Some(timeout_secs))
    }

    fn build(base_url: impl Into<String>, timeout_secs: Option<u64>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Service(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// The service base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl QaClient for HttpQaClient {
    async fn ask(&self, request: &AskRequest) -> AppResult<Answer> {
        let url = self.ask_url();
        tracing::info!("Submitting question to {}", url);
        tracing::debug!("Request: {:?}", request);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Failed to reach service: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Service(format!(
                "Service error ({}): {}",
                status, error_text
            )));
        }

        let answer: Answer = response
            .json()
            .await
            .map_err(|e| AppError::Serialization(format!("Failed to parse answer: {}", e)))?;

        tracing::info!("Received answer with {} sources", answer.sources.len());
        tracing::debug!("Answer: {:?}", answer);

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_url_joins_path() {
        let client = HttpQaClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.ask_url(), "http://localhost:8000/ask");
    }

    #[test]
    fn test_ask_url_strips_trailing_slash() {
        let client = HttpQaClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.ask_url(), "http://localhost:8000/ask");
    }
}
