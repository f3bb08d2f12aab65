//! The contract shared by the grid variants.
//!
//! [`GridQuery`] is the read side every grid offers. [`UniformGrid`] adds
//! the single-cell update protocol of [`CompactGrid`](crate::CompactGrid)
//! and [`DenseGrid`](crate::DenseGrid): each entry occupies exactly one
//! position, and inputs are `(entry, position)` pairs.

use ungrd_foundation::{Coordinate, Entry, Position};

/// Read-only traversal of a grid.
///
/// Enumeration order is unspecified and may differ between calls. Cells
/// that exist but are empty are never reported.
pub trait GridQuery<E: Entry, C: Coordinate, const N: usize> {
    /// Calls `callback` once per non-empty position.
    fn foreach_position<F: FnMut(Position<C, N>)>(&self, callback: F);

    /// Calls `callback` once per entry at `position`; no-op if none.
    fn foreach_entry_at_position<F: FnMut(E)>(&self, position: &Position<C, N>, callback: F);

    /// Returns the number of non-empty cells.
    fn count_filled_cells(&self) -> usize;

    /// Returns the number of (position, entry) memberships.
    fn count_entries(&self) -> usize {
        let mut count = 0;
        self.foreach_position(|position| {
            self.foreach_entry_at_position(&position, |_| count += 1);
        });
        count
    }
}

/// A grid where each entry occupies one position.
pub trait UniformGrid<E: Entry, C: Coordinate, const N: usize>: GridQuery<E, C, N> {
    /// Rebuilds the grid to hold exactly `entries`.
    fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (E, Position<C, N>)>;

    /// Adds the `fresh` pairs and removes the `stale` pairs.
    ///
    /// `stale` must only name pairs currently in the grid.
    fn differential_update<F, S>(&mut self, fresh: F, stale: S)
    where
        F: IntoIterator<Item = (E, Position<C, N>)>,
        S: IntoIterator<Item = (E, Position<C, N>)>;
}
