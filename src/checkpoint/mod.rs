//! Checkpoint and resume for machine cursors.
//!
//! A machine definition is plain code, but the position a long-running
//! lifecycle process has reached is runtime state that should survive a
//! restart. A [`Checkpoint`] records that position; a freshly rebuilt
//! machine restores it and resumes where the old process stopped.
//!
//! The transition graph itself is never serialized. The caller rebuilds
//! the machine from code and restores the snapshot into it, which is also
//! what lets `restore` verify the checkpoint actually belongs to the
//! machine it is being applied to.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Key;
use crate::machine::Machine;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format.
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's position.
///
/// Carries the format version, a unique id, the creation time, and the
/// machine's initial and current states. The initial state is recorded so
/// `restore` can reject a checkpoint taken from a differently rooted
/// machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was taken
    pub created_at: DateTime<Utc>,

    /// Initial state of the machine the checkpoint was taken from
    pub initial: S,

    /// Position of the cursor when the checkpoint was taken
    pub current: S,
}

impl<S: Key + Serialize + DeserializeOwned> Checkpoint<S> {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::EncodingFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DecodingFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::EncodingFailed(e.to_string()))
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DecodingFailed(e.to_string()))
    }
}

impl<S: Key, I: Key> Machine<S, I> {
    /// Snapshot the cursor position.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            initial: self.initial_state().clone(),
            current: self.peek().clone(),
        }
    }

    /// Restore the cursor from a snapshot taken on an identically built
    /// machine.
    ///
    /// The checkpoint must carry a supported format version, its initial
    /// state must match this machine's, and its recorded position must be
    /// a state this machine's graph knows. On failure the cursor does not
    /// move.
    pub fn restore(&mut self, checkpoint: &Checkpoint<S>) -> Result<&mut Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.initial != *self.initial_state() {
            return Err(CheckpointError::MachineMismatch(format!(
                "checkpoint was taken from a machine starting at {:?}, this one starts at {:?}",
                checkpoint.initial,
                self.initial_state()
            )));
        }

        if !self.knows_state(&checkpoint.current) {
            return Err(CheckpointError::MachineMismatch(format!(
                "state {:?} does not appear in this machine's graph",
                checkpoint.current
            )));
        }

        self.set_cursor(checkpoint.current.clone());
        Ok(self)
    }
}
