//! Ask-flow crate for askline.
//!
//! Models the submit-question flow as an explicit state machine:
//! - `DisplayState` is the single source of truth for what is visible
//! - `AskSession` drives transitions and guards against overlapping
//!   submissions with a generation counter
//! - `AskView` is the seam to whatever surface renders the state

pub mod session;
pub mod state;
pub mod view;

// Re-export main types
pub use session::{AskSession, Submission};
pub use state::{DisplayState, FAILURE_MESSAGE};
pub use view::{AskView, NullView};
