//! Trellis: a deterministic finite-state machine engine.
//!
//! Trellis lets a caller declaratively define a directed graph of named
//! states and labeled transitions, proves at build time that the graph is
//! structurally sound, and then drives a cursor through it one input
//! symbol at a time. It is meant for lifecycle and workflow modeling — an
//! order moving through its states until completion or cancellation —
//! where correctness of the transition graph itself is what matters.
//!
//! # Guarantees
//!
//! [`MachineBuilder::build`] runs two reachability passes over the
//! declared graph before any traversal is possible:
//!
//! - every declared state must be reachable from the initial state
//!   (no orphan states);
//! - every declared state must have some path to a terminal state
//!   (no dead ends).
//!
//! A machine that builds cannot wander into a state it cannot finish
//! from. States and input symbols are opaque [`Key`] values — anything
//! clonable, comparable, hashable and debug-printable works.
//!
//! # Example
//!
//! ```rust
//! use trellis::MachineBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut order = MachineBuilder::new()
//!     .transition("draft", "pay", "paid")?
//!     .transition("paid", "ship", "shipped")?
//!     .transition("draft", "cancel", "cancelled")?
//!     .terminal("shipped")?
//!     .terminal("cancelled")?
//!     .build("draft")?;
//!
//! order.process(["pay", "ship"])?;
//! assert_eq!(order.peek(), &"shipped");
//! assert!(order.is_terminated());
//!
//! order.reset();
//! assert_eq!(order.peek(), &"draft");
//! # Ok(())
//! # }
//! ```
//!
//! A failed `process` stops at the first unrecognized input and leaves the
//! cursor at the last successfully reached state, so [`Machine::peek`]
//! shows exactly where traversal stopped. Cloning a [`Machine`] yields an
//! independent cursor over the same shared, read-only graph.

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export the public surface at the crate root.
pub use builder::{BuildError, MachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
pub use core::{Key, TerminalSet, TransitionTable};
pub use machine::{Machine, TransitionError};
