//! Runtime traversal errors.

use thiserror::Error;

/// Errors raised while driving a machine through its transition graph.
///
/// A failed traversal leaves the machine's cursor at the last successfully
/// reached state, so the caller can diagnose exactly where processing
/// stopped with [`Machine::peek`](crate::Machine::peek).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    /// The current state has no transition for this input: either the
    /// state has no outgoing transitions at all, or none is registered
    /// for this particular input symbol.
    #[error("input {input} is not recognized at state {state}")]
    UnrecognizedInput { state: String, input: String },
}
