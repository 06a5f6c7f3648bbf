//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur while assembling and validating a transition
/// graph.
///
/// Offending states and inputs are carried as their `Debug` renderings;
/// the engine treats keys as opaque and has no other way to display them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// A transition for this (state, input) pair was already registered.
    #[error("duplicate transition {{state={from}, input={input}}}")]
    DuplicateTransition { from: String, input: String },

    /// The state was already marked terminal.
    #[error("duplicate terminal state {state}")]
    DuplicateTerminal { state: String },

    /// Some declared states can never be entered from the initial state.
    #[error("states unreachable from the initial state: {}", .states.join(", "))]
    UnreachableStates { states: Vec<String> },

    /// Some declared states have no path to any terminal state.
    #[error("states with no path to a terminal state: {}", .states.join(", "))]
    DeadEndStates { states: Vec<String> },
}
