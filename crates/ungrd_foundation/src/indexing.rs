//! Row-major N-dimensional indexing.
//!
//! Converts between an N-tuple of bounded indices and a linear offset. The
//! last dimension varies fastest, so for extents `[a, b, c]` the strides are
//! `[b * c, c, 1]`.

/// An N-dimensional index tuple.
pub type NdIndex<const N: usize> = [usize; N];

/// Lexicographic N-d ↔ linear index mapping for a fixed set of extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NdIndexing<const N: usize> {
    extents: [usize; N],
    strides: [usize; N],
    size: usize,
}

impl<const N: usize> Default for NdIndexing<N> {
    /// The zero-sized indexing: every extent is zero.
    fn default() -> Self {
        Self {
            extents: [0; N],
            strides: [0; N],
            size: 0,
        }
    }
}

impl<const N: usize> NdIndexing<N> {
    /// Creates an indexing for the given extents.
    ///
    /// The total size saturates at `usize::MAX`; allocating storage of that
    /// size fails before any stride is used.
    #[must_use]
    pub fn new(extents: [usize; N]) -> Self {
        let size = extents.iter().fold(1usize, |acc, &e| acc.saturating_mul(e));
        Self {
            extents,
            strides: strides_for(&extents),
            size,
        }
    }

    /// Encodes an in-bounds index tuple without checking it.
    ///
    /// Out-of-bounds components produce an unrelated (but not unsafe) offset.
    #[must_use]
    pub fn encode(&self, ndidx: NdIndex<N>) -> usize {
        ndidx
            .iter()
            .zip(&self.strides)
            .map(|(index, stride)| index * stride)
            .sum()
    }

    /// Encodes an index tuple, `None` if any component is out of bounds.
    #[must_use]
    pub fn try_encode(&self, ndidx: NdIndex<N>) -> Option<usize> {
        let mut index = 0;
        for dim in 0..N {
            if ndidx[dim] >= self.extents[dim] {
                return None;
            }
            index += ndidx[dim] * self.strides[dim];
        }
        Some(index)
    }

    /// Decodes a linear offset back into an index tuple.
    #[must_use]
    pub fn decode(&self, mut index: usize) -> NdIndex<N> {
        let mut ndidx = [0; N];
        if N == 0 {
            return ndidx;
        }
        for dim in (1..N).rev() {
            ndidx[dim] = index % self.extents[dim];
            index /= self.extents[dim];
        }
        ndidx[0] = index;
        ndidx
    }

    /// Returns all extents.
    #[must_use]
    pub fn extents(&self) -> [usize; N] {
        self.extents
    }

    /// Returns the extent of one dimension.
    #[must_use]
    pub fn extent(&self, dim: usize) -> usize {
        self.extents[dim]
    }

    /// Returns all strides.
    #[must_use]
    pub fn strides(&self) -> [usize; N] {
        self.strides
    }

    /// Returns the number of addressable elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if no element is addressable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Computes row-major strides for the given extents.
#[must_use]
pub fn strides_for<const N: usize>(extents: &[usize; N]) -> [usize; N] {
    let mut strides = [0; N];
    if N == 0 {
        return strides;
    }
    strides[N - 1] = 1;
    for dim in (0..N - 1).rev() {
        strides[dim] = extents[dim + 1].saturating_mul(strides[dim + 1]);
    }
    strides
}
