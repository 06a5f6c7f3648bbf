//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or restoring a
/// checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("checkpoint encoding failed: {0}")]
    EncodingFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("checkpoint decoding failed: {0}")]
    DecodingFailed(String),

    /// Checkpoint format version is not supported by this build
    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint does not belong to the machine it was restored into
    #[error("checkpoint does not match this machine: {0}")]
    MachineMismatch(String),
}
