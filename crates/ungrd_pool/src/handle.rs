//! Pool handles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addresses one object slot in an [`ObjectPool`](crate::ObjectPool).
///
/// Handles are plain integers: copying one does not copy or alias the
/// object, and a handle is only meaningful to the pool that issued it.
/// After [`ObjectPool::clear`](crate::ObjectPool::clear) every previously
/// issued handle is invalid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolHandle {
    /// Index of the chunk holding the object.
    pub chunk: u32,
    /// Index of the object within its chunk.
    pub slot: u32,
}

impl PoolHandle {
    /// Creates a handle from chunk and slot indices.
    #[must_use]
    pub const fn new(chunk: u32, slot: u32) -> Self {
        Self { chunk, slot }
    }
}

impl fmt::Debug for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolHandle({}:{})", self.chunk, self.slot)
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chunk, self.slot)
    }
}
