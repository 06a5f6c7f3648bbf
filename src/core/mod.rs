//! Core transition-graph data structures.
//!
//! This module contains the foundational, side-effect-free types the rest
//! of the crate is built on:
//! - The `Key` capability trait for opaque state and input values
//! - The deterministic `TransitionTable`
//! - The `TerminalSet` of valid completion points
//!
//! Everything here is immutable once the builder hands it to a machine.

mod key;
mod table;

pub use key::Key;
pub use table::{TerminalSet, TransitionTable};
