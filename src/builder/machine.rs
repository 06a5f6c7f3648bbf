//! Builder that accumulates a transition graph and proves it well-formed.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::builder::error::BuildError;
use crate::core::{Key, TerminalSet, TransitionTable};
use crate::machine::Machine;

/// Accumulates transitions and terminal-state declarations, then validates
/// the whole graph before any machine can traverse it.
///
/// `build` runs two reachability passes over the declared graph:
///
/// 1. every declared state must be reachable from the initial state
///    (otherwise [`BuildError::UnreachableStates`]);
/// 2. every declared state must have some path to a terminal state
///    (otherwise [`BuildError::DeadEndStates`]).
///
/// Both are plain breadth-first traversals, run once at build time. They
/// turn structural modeling mistakes — orphan states, dead ends — into
/// build failures instead of silent runtime misbehavior.
///
/// The builder is single-use: `build` takes it by value, so a builder
/// cannot be reused after a successful build.
///
/// # Example
///
/// ```rust
/// use trellis::{BuildError, MachineBuilder};
///
/// # fn main() -> Result<(), BuildError> {
/// let mut order = MachineBuilder::new()
///     .transition("draft", "pay", "paid")?
///     .transition("paid", "ship", "shipped")?
///     .transition("draft", "cancel", "cancelled")?
///     .terminal("shipped")?
///     .terminal("cancelled")?
///     .build("draft")?;
///
/// assert_eq!(order.peek(), &"draft");
/// assert!(!order.is_terminated());
/// # Ok(())
/// # }
/// ```
pub struct MachineBuilder<S: Key, I: Key> {
    table: TransitionTable<S, I>,
    terminals: TerminalSet<S>,
    // Every state mentioned as a source or target of a transition.
    universe: HashSet<S>,
    // target -> sources, maintained for the backward reachability pass.
    inverse: HashMap<S, HashSet<S>>,
}

impl<S: Key, I: Key> MachineBuilder<S, I> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            terminals: TerminalSet::new(),
            universe: HashSet::new(),
            inverse: HashMap::new(),
        }
    }

    /// Register the transition (from, input) → to.
    ///
    /// Fails with [`BuildError::DuplicateTransition`] if a transition for
    /// this exact (from, input) pair was already registered.
    pub fn transition(mut self, from: S, input: I, to: S) -> Result<Self, BuildError> {
        if !self.table.insert(from.clone(), input.clone(), to.clone()) {
            return Err(BuildError::DuplicateTransition {
                from: format!("{from:?}"),
                input: format!("{input:?}"),
            });
        }

        self.universe.insert(from.clone());
        self.universe.insert(to.clone());
        self.inverse.entry(to).or_default().insert(from);

        Ok(self)
    }

    /// Register multiple transitions at once.
    pub fn transitions<T>(mut self, edges: T) -> Result<Self, BuildError>
    where
        T: IntoIterator<Item = (S, I, S)>,
    {
        for (from, input, to) in edges {
            self = self.transition(from, input, to)?;
        }
        Ok(self)
    }

    /// Mark a state as a valid completion point.
    ///
    /// Fails with [`BuildError::DuplicateTerminal`] if the state was
    /// already marked. A terminal state need not appear in any transition.
    pub fn terminal(mut self, state: S) -> Result<Self, BuildError> {
        if !self.terminals.insert(state.clone()) {
            return Err(BuildError::DuplicateTerminal {
                state: format!("{state:?}"),
            });
        }
        Ok(self)
    }

    /// Validate the graph and return a machine positioned at `initial`.
    ///
    /// On success the transition table and terminal set are frozen and
    /// shared; cloning the returned machine yields independent cursors over
    /// the same graph.
    pub fn build(self, initial: S) -> Result<Machine<S, I>, BuildError> {
        let entered = self.forward_reachable(&initial);
        let orphans = Self::left_out(&self.universe, &entered);
        if !orphans.is_empty() {
            return Err(BuildError::UnreachableStates { states: orphans });
        }

        let finishing = self.backward_reachable();
        let dead_ends = Self::left_out(&self.universe, &finishing);
        if !dead_ends.is_empty() {
            return Err(BuildError::DeadEndStates { states: dead_ends });
        }

        Ok(Machine::with_graph(
            Arc::new(self.table),
            Arc::new(self.terminals),
            initial,
        ))
    }

    /// States reachable from `initial` by following transitions forward.
    fn forward_reachable(&self, initial: &S) -> HashSet<S> {
        let mut reached = HashSet::new();
        reached.insert(initial.clone());

        let mut queue = VecDeque::new();
        queue.push_back(initial.clone());

        while let Some(state) = queue.pop_front() {
            for next in self.table.targets(&state) {
                if reached.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }

        reached
    }

    /// States that can reach some terminal state, found by walking the
    /// inverse edges from every terminal state simultaneously.
    fn backward_reachable(&self) -> HashSet<S> {
        let mut reached: HashSet<S> = self.terminals.iter().cloned().collect();
        let mut queue: VecDeque<S> = reached.iter().cloned().collect();

        while let Some(state) = queue.pop_front() {
            if let Some(sources) = self.inverse.get(&state) {
                for source in sources {
                    if reached.insert(source.clone()) {
                        queue.push_back(source.clone());
                    }
                }
            }
        }

        reached
    }

    /// Debug renderings of the declared states missing from `covered`,
    /// sorted for deterministic error messages.
    fn left_out(universe: &HashSet<S>, covered: &HashSet<S>) -> Vec<String> {
        let mut names: Vec<String> = universe
            .difference(covered)
            .map(|state| format!("{state:?}"))
            .collect();
        names.sort();
        names
    }
}

impl<S: Key, I: Key> Default for MachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
