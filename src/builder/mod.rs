//! Builder API for assembling validated state machines.
//!
//! The builder accumulates transitions and terminal-state declarations,
//! then proves the graph structurally sound — no unreachable states, no
//! dead ends — before handing out a runnable [`Machine`](crate::Machine).
//! Validation failures are build failures; a machine that exists has
//! already passed both reachability checks.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
