//! Question-answering service client for askline.
//!
//! This crate defines the wire contract with the backend and two client
//! implementations behind a shared trait:
//! - **HttpQaClient**: the real transport over HTTP
//! - **MockQaClient**: a recording mock for tests and offline development
//!
//! # Example
//! ```no_run
//! use askline_client::{AskRequest, HttpQaClient, QaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpQaClient::new("http://localhost:8000")?;
//! let answer = client.ask(&AskRequest::new("What is ownership?")).await?;
//! println!("{}", answer.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http;
pub mod mock;
pub mod types;

// Re-export main types
pub use client::QaClient;
pub use http::HttpQaClient;
pub use mock::MockQaClient;
pub use types::{Answer, AskRequest};
