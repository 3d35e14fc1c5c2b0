//! View seam for the ask flow.
//!
//! The original system mutated page regions directly from its handler;
//! here the whole surface sits behind one trait with one method, driven
//! solely by `DisplayState` transitions.

use crate::state::DisplayState;

/// A surface that can render the current display state.
///
/// The session calls `render` exactly once per state transition: once
/// when a submission begins (`Loading`) and once when it settles
/// (`Answered` or `Failed`). Stale settlements never reach the view.
pub trait AskView {
    /// Render the given state, replacing whatever was shown before.
    fn render(&mut self, state: &DisplayState);
}

/// A view that discards everything. Useful when only the session state
/// matters, e.g. in machine-readable output modes.
#[derive(Debug, Default)]
pub struct NullView;

impl AskView for NullView {
    fn render(&mut self, _state: &DisplayState) {}
}
