//! Entry identifiers.
//!
//! Entries are owned by the driver (typically a particle index). Grids only
//! record which positions an entry occupies; they never allocate or free
//! identifiers.

use std::fmt;
use std::hash::Hash;

/// An unsigned integer identifying one indexed entry.
pub trait Entry: Copy + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Returns the identifier as a side-table index.
    fn index(self) -> usize;

    /// Builds an identifier from a side-table index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in the identifier type.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_entry {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entry for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn index(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_index(index: usize) -> Self {
                    <$ty>::try_from(index).unwrap_or_else(|_| {
                        panic!("entry index {index} does not fit in {}", stringify!($ty))
                    })
                }
            }
        )*
    };
}

impl_entry!(u16, u32, u64, usize);
