//! Macros for declaring machine key types.

/// Generate an enum carrying the derives a machine key needs.
///
/// States and input symbols only need to be clonable, comparable, hashable
/// and debug-printable; this macro stamps out that derive list (plus serde,
/// so the enum also works with checkpoints) for simple fieldless enums.
///
/// # Example
///
/// ```
/// use trellis::{key_enum, MachineBuilder};
///
/// key_enum! {
///     pub enum DocumentState {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// key_enum! {
///     pub enum DocumentAction {
///         Submit,
///         Approve,
///     }
/// }
///
/// # fn main() -> Result<(), trellis::BuildError> {
/// let machine = MachineBuilder::new()
///     .transition(DocumentState::Draft, DocumentAction::Submit, DocumentState::Review)?
///     .transition(DocumentState::Review, DocumentAction::Approve, DocumentState::Published)?
///     .terminal(DocumentState::Published)?
///     .build(DocumentState::Draft)?;
///
/// assert_eq!(machine.peek(), &DocumentState::Draft);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }
    };
}
