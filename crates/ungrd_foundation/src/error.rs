//! Error types for the ungrd system.
//!
//! Uses `thiserror` for ergonomic error definition. Most contract
//! violations in this crate family are fatal and surface as panics carrying
//! the `Display` of one of these errors; the checked variants of those
//! operations return them instead.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result alias used across the ungrd crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for ungrd operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for a handle whose chunk or slot the pool never had.
    #[must_use]
    pub fn foreign_handle(chunk: u32, slot: u32) -> Self {
        Self::new(ErrorKind::ForeignHandle { chunk, slot })
    }

    /// Creates an error for releasing a slot that is not currently acquired.
    #[must_use]
    pub fn slot_not_in_use(chunk: u32, slot: u32) -> Self {
        Self::new(ErrorKind::SlotNotInUse { chunk, slot })
    }

    /// Creates an error for a position that should have a cell but does not.
    #[must_use]
    pub fn unknown_cell(position: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCell {
            position: position.into(),
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A pool handle refers to a chunk or slot outside the pool.
    #[error("object was not contained in any chunk: chunk {chunk}, slot {slot}")]
    ForeignHandle {
        /// Chunk index carried by the handle.
        chunk: u32,
        /// Slot index carried by the handle.
        slot: u32,
    },

    /// A pool slot was released while not acquired.
    #[error("object slot is not in use: chunk {chunk}, slot {slot}")]
    SlotNotInUse {
        /// Chunk index carried by the handle.
        chunk: u32,
        /// Slot index carried by the handle.
        slot: u32,
    },

    /// An entry referenced a cell position the grid never created.
    #[error("no cell is known at position {position}")]
    UnknownCell {
        /// Debug rendering of the position.
        position: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
