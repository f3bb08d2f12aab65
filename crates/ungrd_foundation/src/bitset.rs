//! Fixed-capacity bitset.
//!
//! The number of bits is chosen at construction and never changes. Bits are
//! packed into 64-bit words; the unused tail of the last word is kept clear
//! so whole-word operations need no masking on read.

const WORD_BITS: usize = u64::BITS as usize;

/// A bitset whose length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBitSet {
    words: Box<[u64]>,
    len: usize,
}

impl FixedBitSet {
    /// Creates a bitset of `len` bits, all clear.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)].into_boxed_slice(),
            len,
        }
    }

    /// Returns the number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the bitset holds zero bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_to(&mut self, index: usize, value: bool) {
        let (word, mask) = self.locate(index);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Sets the bit at `index`.
    pub fn set(&mut self, index: usize) {
        self.set_to(index, true);
    }

    /// Clears the bit at `index`.
    pub fn reset(&mut self, index: usize) {
        self.set_to(index, false);
    }

    /// Sets every bit.
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
        self.clear_tail();
    }

    /// Clears every bit.
    pub fn reset_all(&mut self) {
        self.words.fill(0);
    }

    /// Returns true if every bit is set. Vacuously true when empty.
    #[must_use]
    pub fn all(&self) -> bool {
        self.count_ones() == self.len
    }

    /// Returns true if at least one bit is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the index of the lowest set bit, or `len` if none is set.
    #[must_use]
    pub fn trailing_zeros(&self) -> usize {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map_or(self.len, |word| {
                word * WORD_BITS + self.words[word].trailing_zeros() as usize
            })
    }

    /// Returns the index of the lowest clear bit, or `len` if all are set.
    #[must_use]
    pub fn trailing_ones(&self) -> usize {
        self.words
            .iter()
            .position(|&w| w != u64::MAX)
            .map_or(self.len, |word| {
                let index = word * WORD_BITS + self.words[word].trailing_ones() as usize;
                index.min(self.len)
            })
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.len,
            "bit index {index} out of range for bitset of length {}",
            self.len
        );
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }

    fn clear_tail(&mut self) {
        let tail = self.len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
    }
}
