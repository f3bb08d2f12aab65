//! Fixed-capacity object chunks.

use ungrd_foundation::FixedBitSet;

/// A fixed block of objects plus a bitset of which slots are acquired.
///
/// The object array is allocated once and never resized, so objects stay
/// put for the chunk's lifetime.
pub(crate) struct Chunk<T> {
    objects: Box<[T]>,
    used: FixedBitSet,
    used_count: usize,
}

impl<T: Default> Chunk<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            objects: std::iter::repeat_with(T::default).take(capacity).collect(),
            used: FixedBitSet::new(capacity),
            used_count: 0,
        }
    }
}

impl<T> Chunk<T> {
    pub(crate) fn capacity(&self) -> usize {
        self.objects.len()
    }

    pub(crate) fn count_used(&self) -> usize {
        self.used_count
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.used_count == self.capacity()
    }

    pub(crate) fn is_used(&self, slot: usize) -> bool {
        slot < self.capacity() && self.used.get(slot)
    }

    /// Marks the lowest free slot used.
    ///
    /// Returns the slot and whether the chunk is now exhausted.
    pub(crate) fn acquire(&mut self) -> (usize, bool) {
        debug_assert!(!self.is_exhausted(), "acquire from an exhausted chunk");
        let slot = self.used.trailing_ones();
        self.used.set(slot);
        self.used_count += 1;
        (slot, self.is_exhausted())
    }

    /// Marks `slot` free.
    ///
    /// Returns true if the chunk was exhausted before the release.
    pub(crate) fn release(&mut self, slot: usize) -> bool {
        debug_assert!(self.is_used(slot), "release of a free slot");
        let was_exhausted = self.is_exhausted();
        self.used.reset(slot);
        self.used_count -= 1;
        was_exhausted
    }

    pub(crate) fn get(&self, slot: usize) -> &T {
        &self.objects[slot]
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> &mut T {
        &mut self.objects[slot]
    }
}
