//! Configuration for object pools.

use ungrd_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of bytes a chunk's objects should occupy.
pub const DEFAULT_CHUNK_BYTES: usize = 4096;

/// Configuration for an [`ObjectPool`](crate::ObjectPool).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolConfig {
    /// Target size of one chunk's object array, in bytes.
    ///
    /// A chunk always holds at least one object, however large.
    pub chunk_bytes: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}

impl PoolConfig {
    /// Creates the default configuration (4 KiB chunks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the chunk size in bytes.
    #[must_use]
    pub fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Self {
        self.chunk_bytes = chunk_bytes;
        self
    }

    /// Number of `T` objects one chunk holds under this configuration.
    #[must_use]
    pub fn chunk_capacity<T>(&self) -> usize {
        let object_size = std::mem::size_of::<T>().max(1);
        (self.chunk_bytes / object_size).max(1)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_bytes` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_bytes == 0 {
            return Err(Error::invalid_config("chunk_bytes must be non-zero"));
        }
        Ok(())
    }
}
