//! Command handlers for the askline CLI.

pub mod ask;

// Re-export command types for convenience
pub use ask::AskCommand;
