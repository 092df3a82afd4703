// SPDX-License-Identifier: MPL-2.0
//! Form progress persistence port.
//!
//! A single snapshot slot: `save` overwrites it, `clear` empties it, `load`
//! reads it without side effects.

use crate::domain::form::FormSnapshot;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// The storage location could not be read or written.
    Io(String),
    /// The stored snapshot could not be decoded or encoded.
    Corrupt(String),
    /// No storage location could be determined.
    Unavailable,
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressError::Io(msg) => write!(f, "progress storage error: {msg}"),
            ProgressError::Corrupt(msg) => write!(f, "progress snapshot is corrupt: {msg}"),
            ProgressError::Unavailable => write!(f, "no progress storage location"),
        }
    }
}

impl std::error::Error for ProgressError {}

pub trait ProgressStore: Send + Sync {
    /// Reads the snapshot, `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<FormSnapshot>, ProgressError>;

    fn save(&self, snapshot: &FormSnapshot) -> Result<(), ProgressError>;

    fn clear(&self) -> Result<(), ProgressError>;
}
