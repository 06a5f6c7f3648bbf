//! Key capability for state and input-symbol values.
//!
//! The engine places no semantic meaning on states or input symbols; they
//! are opaque values used as map and set keys. `Key` names exactly the
//! capabilities that use requires.

use std::fmt::Debug;
use std::hash::Hash;

/// Capability trait for state and input-symbol values.
///
/// A key must be comparable (`Eq`), stably hashable (`Hash`), clonable into
/// the graph structures (`Clone`), and renderable into error messages
/// (`Debug`). Nothing else is required or inspected.
///
/// The trait is blanket-implemented, so any suitable type is a key out of
/// the box: string slices, integers, or plain enums.
///
/// # Example
///
/// ```rust
/// use trellis::Key;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Open,
///     Closed,
/// }
///
/// fn assert_key<K: Key>(_key: K) {}
///
/// assert_key("open");
/// assert_key(42u32);
/// assert_key(Phase::Open);
/// assert_key(Phase::Closed);
/// ```
pub trait Key: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Key for T {}
