//! Chunked object pool.
//!
//! Objects live in fixed-capacity chunks that are never reallocated, so an
//! acquired object stays in place until it is released or the pool is
//! cleared. Chunks with at least one free slot are tracked on an
//! availability list; acquisition always serves the most recently available
//! chunk, which keeps hot chunks hot.

use std::fmt;
use std::ops::{Index, IndexMut};

use ungrd_foundation::{Error, Result};

use crate::chunk::Chunk;
use crate::config::PoolConfig;
use crate::handle::PoolHandle;

/// A pool of default-constructible objects addressed by [`PoolHandle`].
///
/// Released objects keep their last value; [`acquire`](Self::acquire)
/// hands a recycled object back as-is, so callers reset whatever state they
/// rely on. This is what lets pooled buffers keep their capacity across
/// reuse.
pub struct ObjectPool<T> {
    chunks: Vec<Chunk<T>>,
    /// Indices of chunks with at least one free slot.
    available: Vec<u32>,
    chunk_capacity: usize,
    config: PoolConfig,
}

impl<T: Default> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> ObjectPool<T> {
    /// Creates an empty pool with 4 KiB chunks.
    #[must_use]
    pub fn new() -> Self {
        Self::build(PoolConfig::default())
    }

    /// Creates an empty pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        Self {
            chunks: Vec::new(),
            available: Vec::new(),
            chunk_capacity: config.chunk_capacity::<T>(),
            config,
        }
    }

    /// Acquires an object slot, growing the pool by one chunk if needed.
    pub fn acquire(&mut self) -> PoolHandle {
        let chunk_index = match self.available.last() {
            Some(&index) => index,
            None => self.grow(),
        };

        let (slot, exhausted) = self.chunks[chunk_index as usize].acquire();
        if exhausted {
            self.available.pop();
        }

        #[allow(clippy::cast_possible_truncation)]
        let slot = slot as u32;
        PoolHandle::new(chunk_index, slot)
    }

    fn grow(&mut self) -> u32 {
        let index = u32::try_from(self.chunks.len())
            .unwrap_or_else(|_| panic!("object pool cannot address more than u32::MAX chunks"));
        self.chunks.push(Chunk::new(self.chunk_capacity));
        self.available.push(index);
        log::debug!(
            "object pool grew to {} chunks of {} objects",
            self.chunks.len(),
            self.chunk_capacity
        );
        index
    }
}

impl<T> ObjectPool<T> {
    /// Releases an object slot back to its chunk.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool or its slot is not
    /// currently acquired. Continuing would corrupt the pool's bookkeeping.
    pub fn release(&mut self, handle: PoolHandle) {
        if let Err(err) = self.try_release(handle) {
            panic!("{err}");
        }
    }

    /// Releases an object slot, reporting invalid handles as errors.
    ///
    /// The pool is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle's chunk or slot is outside the pool,
    /// or if the slot is not currently acquired.
    pub fn try_release(&mut self, handle: PoolHandle) -> Result<()> {
        let chunk = self
            .chunks
            .get_mut(handle.chunk as usize)
            .filter(|chunk| (handle.slot as usize) < chunk.capacity())
            .ok_or_else(|| Error::foreign_handle(handle.chunk, handle.slot))?;

        if !chunk.is_used(handle.slot as usize) {
            return Err(Error::slot_not_in_use(handle.chunk, handle.slot));
        }

        if chunk.release(handle.slot as usize) {
            self.available.push(handle.chunk);
        }
        Ok(())
    }

    /// Returns true if `handle` addresses a currently acquired object.
    #[must_use]
    pub fn contains(&self, handle: PoolHandle) -> bool {
        self.chunks
            .get(handle.chunk as usize)
            .is_some_and(|chunk| chunk.is_used(handle.slot as usize))
    }

    /// Returns the object for an acquired handle.
    #[must_use]
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        if self.contains(handle) {
            Some(self.chunks[handle.chunk as usize].get(handle.slot as usize))
        } else {
            None
        }
    }

    /// Returns the object for an acquired handle, mutably.
    #[must_use]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        if self.contains(handle) {
            Some(self.chunks[handle.chunk as usize].get_mut(handle.slot as usize))
        } else {
            None
        }
    }

    /// Drops every chunk.
    ///
    /// All outstanding handles become invalid; callers are expected to have
    /// released them first.
    pub fn clear(&mut self) {
        if !self.chunks.is_empty() {
            log::debug!(
                "object pool cleared {} chunks ({} objects still acquired)",
                self.chunks.len(),
                self.count_used_objects()
            );
        }
        self.available.clear();
        self.chunks.clear();
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn count_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the number of chunks with at least one free slot.
    #[must_use]
    pub fn count_available_chunks(&self) -> usize {
        self.available.len()
    }

    /// Returns the number of free slots across all chunks.
    #[must_use]
    pub fn count_available_objects(&self) -> usize {
        self.chunks
            .iter()
            .map(|chunk| chunk.capacity() - chunk.count_used())
            .sum()
    }

    /// Returns the number of acquired slots across all chunks.
    #[must_use]
    pub fn count_used_objects(&self) -> usize {
        self.chunks.iter().map(Chunk::count_used).sum()
    }

    /// Returns the number of objects each chunk holds.
    #[must_use]
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Returns the pool configuration.
    #[must_use]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

impl<T> Index<PoolHandle> for ObjectPool<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the handle does not address an acquired object.
    fn index(&self, handle: PoolHandle) -> &T {
        self.get(handle)
            .unwrap_or_else(|| panic!("{}", Error::slot_not_in_use(handle.chunk, handle.slot)))
    }
}

impl<T> IndexMut<PoolHandle> for ObjectPool<T> {
    fn index_mut(&mut self, handle: PoolHandle) -> &mut T {
        self.get_mut(handle)
            .unwrap_or_else(|| panic!("{}", Error::slot_not_in_use(handle.chunk, handle.slot)))
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("chunks", &self.chunks.len())
            .field("available_chunks", &self.available.len())
            .field("chunk_capacity", &self.chunk_capacity)
            .field("used_objects", &self.count_used_objects())
            .finish()
    }
}
