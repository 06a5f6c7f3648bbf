//! Runtime executor over a validated transition graph.

mod error;

pub use error::TransitionError;

use std::sync::Arc;

use crate::core::{Key, TerminalSet, TransitionTable};

/// Runtime cursor over a validated, shared, immutable transition graph.
///
/// A machine is produced by a successful
/// [`MachineBuilder::build`](crate::MachineBuilder::build) and starts at
/// the initial state given there. The transition table and terminal set
/// are held behind `Arc` and never change; the only mutable state is the
/// current-state cursor. Cloning a machine yields an independent cursor
/// over the same graph, which is also the way to traverse one graph from
/// multiple threads.
///
/// Every step is a single synchronous lookup against the frozen table.
/// Build-time validation already proved that every state the machine can
/// enter has a path to a terminal state, so no structural re-checking
/// happens at runtime; the only runtime failure is an input the current
/// state has no transition for.
///
/// # Example
///
/// ```rust
/// use trellis::MachineBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut order = MachineBuilder::new()
///     .transition("draft", "pay", "paid")?
///     .transition("paid", "ship", "shipped")?
///     .terminal("shipped")?
///     .build("draft")?;
///
/// order.process(["pay", "ship"])?;
/// assert_eq!(order.peek(), &"shipped");
/// assert!(order.is_terminated());
///
/// order.reset();
/// assert_eq!(order.peek(), &"draft");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: Key, I: Key> {
    table: Arc<TransitionTable<S, I>>,
    terminals: Arc<TerminalSet<S>>,
    initial: S,
    current: S,
}

impl<S: Key, I: Key> Machine<S, I> {
    pub(crate) fn with_graph(
        table: Arc<TransitionTable<S, I>>,
        terminals: Arc<TerminalSet<S>>,
        initial: S,
    ) -> Self {
        Self {
            table,
            terminals,
            current: initial.clone(),
            initial,
        }
    }

    /// The current state. No side effect.
    pub fn peek(&self) -> &S {
        &self.current
    }

    /// Whether the current state is a terminal state.
    pub fn is_terminated(&self) -> bool {
        self.terminals.contains(&self.current)
    }

    /// Move the cursor back to the initial state. Idempotent.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// The state the machine was built at and that `reset` returns to.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The shared transition table backing this machine.
    pub fn table(&self) -> &TransitionTable<S, I> {
        &self.table
    }

    /// The shared terminal-state set backing this machine.
    pub fn terminal_states(&self) -> &TerminalSet<S> {
        &self.terminals
    }

    /// Whether the state appears anywhere in this machine's graph: as the
    /// initial state, in a transition, or in the terminal set.
    pub fn knows_state(&self, state: &S) -> bool {
        *state == self.initial
            || self.terminals.contains(state)
            || self.table.contains_state(state)
    }

    pub(crate) fn set_cursor(&mut self, state: S) {
        self.current = state;
    }

    /// Consume one input symbol and advance the cursor.
    ///
    /// Fails with [`TransitionError::UnrecognizedInput`] if the current
    /// state has no transition for the input; the cursor does not move.
    pub fn step(&mut self, input: I) -> Result<&mut Self, TransitionError> {
        let next = match self.table.target(&self.current, &input) {
            Some(next) => next.clone(),
            None => {
                return Err(TransitionError::UnrecognizedInput {
                    state: format!("{:?}", self.current),
                    input: format!("{input:?}"),
                });
            }
        };

        self.current = next;
        Ok(self)
    }

    /// Consume an ordered sequence of input symbols, strictly in order.
    ///
    /// Processing stops at the first unrecognized input: no further inputs
    /// are consumed, the cursor stays at the last successfully reached
    /// state, and the error is returned. An empty sequence is a successful
    /// no-op. Returns `&mut Self` so calls can be chained with `?`.
    pub fn process<T>(&mut self, inputs: T) -> Result<&mut Self, TransitionError>
    where
        T: IntoIterator<Item = I>,
    {
        for input in inputs {
            self.step(input)?;
        }
        Ok(self)
    }
}
