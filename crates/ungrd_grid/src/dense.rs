//! Array-backed grid with one cell per entry.
//!
//! When occupied positions form a dense, roughly axis-aligned block, a flat
//! array indexed by N-d offset beats a hash map. The array covers an
//! inclusive bounding box `[origin, origin + extents - 1]`; each slot holds
//! an optional handle into a pool of cells owned by the grid, so reshaping
//! moves small handles instead of cell allocations.
//!
//! A full [`update`](UniformGrid::update) fits the box tightly to its input.
//! [`differential_update`](UniformGrid::differential_update) only ever grows
//! the box; shrinking waits for the next full update.

use ungrd_foundation::{
    Coordinate, Dim, Entry, NdIndex, NdIndexing, Position, Result, componentwise_max,
    componentwise_min, most_negative, most_positive,
};
use ungrd_pool::{ObjectPool, PoolHandle};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::grid::{GridQuery, UniformGrid};

/// Array-backed grid where each entry occupies one position.
pub struct DenseGrid<E, C, const N: usize> {
    /// World position of array index zero.
    origin: Position<C, N>,
    indexing: NdIndexing<N>,
    slots: Vec<Option<PoolHandle>>,
    pool: ObjectPool<Cell<E>>,
    /// Pairs waiting for a reshape before they can be placed.
    pending: Vec<(E, Position<C, N>)>,
    config: GridConfig,
}

impl<E: Entry, C: Coordinate, const N: usize> Default for DenseGrid<E, C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry, C: Coordinate, const N: usize> DenseGrid<E, C, N> {
    /// Creates an empty, zero-sized grid.
    #[must_use]
    pub fn new() -> Self {
        Self::build(ObjectPool::new(), GridConfig::default())
    }

    /// Creates an empty grid with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: GridConfig) -> Result<Self> {
        let pool = ObjectPool::with_config(config.pool.clone())?;
        Ok(Self::build(pool, config))
    }

    fn build(pool: ObjectPool<Cell<E>>, config: GridConfig) -> Self {
        let () = Dim::<N>::SUPPORTED;

        Self {
            origin: [C::default(); N],
            indexing: NdIndexing::default(),
            slots: Vec::new(),
            pool,
            pending: Vec::new(),
            config,
        }
    }

    /// Returns the inclusive `(lo, hi)` corners of the array, `None` while
    /// the array is zero-sized.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Position<C, N>, Position<C, N>)> {
        if self.indexing.is_empty() {
            return None;
        }
        let hi = self.slot_position(self.indexing.size() - 1);
        Some((self.origin, hi))
    }

    /// Returns the array extents per dimension.
    #[must_use]
    pub fn extents(&self) -> [usize; N] {
        self.indexing.extents()
    }

    /// Returns the pool backing the cells, for diagnostics.
    #[must_use]
    pub fn pool(&self) -> &ObjectPool<Cell<E>> {
        &self.pool
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the entries at `position`, empty if outside the box.
    #[must_use]
    pub fn entries_at(&self, position: &Position<C, N>) -> &[E] {
        match self.slot_index(position).and_then(|index| self.slots[index]) {
            Some(handle) => self.pool[handle].entries(),
            None => &[],
        }
    }

    /// Empties the grid back to zero size and drops the pooled cells.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.pending.clear();
        self.indexing = NdIndexing::default();
        self.origin = [C::default(); N];
        self.pool.clear();
    }

    fn slot_index(&self, position: &Position<C, N>) -> Option<usize> {
        to_ndidx(position, &self.origin, &self.indexing).map(|ndidx| self.indexing.encode(ndidx))
    }

    fn slot_position(&self, index: usize) -> Position<C, N> {
        to_position(self.indexing.decode(index), &self.origin)
    }

    fn acquire_cell(&mut self) -> PoolHandle {
        let handle = self.pool.acquire();
        let cell = &mut self.pool[handle];
        cell.clear();
        cell.reserve(self.config.cell_reserve);
        handle
    }

    /// Adds `entry` to the slot at `index`, taking a cell from the pool only
    /// if the slot has none.
    fn place(&mut self, index: usize, entry: E) {
        let handle = match self.slots[index] {
            Some(handle) => handle,
            None => {
                let handle = self.acquire_cell();
                self.slots[index] = Some(handle);
                handle
            }
        };
        self.pool[handle].insert(entry);
    }

    /// Re-homes every populated slot into the box `[lo, hi]`.
    ///
    /// Cells whose position falls outside the new box are released.
    fn reshape(&mut self, lo: Position<C, N>, hi: Position<C, N>) {
        let extents: [usize; N] = std::array::from_fn(|dim| {
            let span = hi[dim].to_i128() - lo[dim].to_i128() + 1;
            usize::try_from(span).unwrap_or(usize::MAX)
        });
        if lo == self.origin && extents == self.indexing.extents() {
            return;
        }

        let indexing = NdIndexing::new(extents);
        let mut slots = vec![None; indexing.size()];

        let mut dropped = 0usize;
        for (old_index, slot) in std::mem::take(&mut self.slots).into_iter().enumerate() {
            let Some(handle) = slot else { continue };
            let position = to_position(self.indexing.decode(old_index), &self.origin);
            match to_ndidx(&position, &lo, &indexing) {
                Some(ndidx) => slots[indexing.encode(ndidx)] = Some(handle),
                None => {
                    self.pool.release(handle);
                    dropped += 1;
                }
            }
        }

        log::debug!(
            "dense grid reshaped from {:?} to {:?} at origin {:?} ({} cells dropped)",
            self.indexing.extents(),
            extents,
            lo,
            dropped
        );

        self.origin = lo;
        self.indexing = indexing;
        self.slots = slots;
    }

    /// Places every pending pair into the reshaped array.
    fn place_pending(&mut self) {
        let mut pending = std::mem::take(&mut self.pending);
        for (entry, position) in pending.drain(..) {
            let Some(index) = self.slot_index(&position) else {
                unreachable!("pending position {position:?} outside the reshaped box");
            };
            self.place(index, entry);
        }
        self.pending = pending;
    }

    fn release_slots(&mut self) {
        for handle in std::mem::take(&mut self.slots).into_iter().flatten() {
            self.pool.release(handle);
        }
        self.indexing = NdIndexing::default();
        self.origin = [C::default(); N];
    }
}

impl<E: Entry, C: Coordinate, const N: usize> GridQuery<E, C, N> for DenseGrid<E, C, N> {
    fn foreach_position<F: FnMut(Position<C, N>)>(&self, mut callback: F) {
        let filled = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|handle| (index, handle)))
            .filter(|&(_, handle)| !self.pool[handle].is_empty());
        for (index, _) in filled {
            callback(self.slot_position(index));
        }
    }

    fn foreach_entry_at_position<F: FnMut(E)>(&self, position: &Position<C, N>, mut callback: F) {
        for &entry in self.entries_at(position) {
            callback(entry);
        }
    }

    fn count_filled_cells(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|&&handle| !self.pool[handle].is_empty())
            .count()
    }
}

impl<E: Entry, C: Coordinate, const N: usize> UniformGrid<E, C, N> for DenseGrid<E, C, N> {
    /// Rebuilds the grid over the tightest box around `entries`.
    ///
    /// The box may shrink. Cells that fall outside it go back to the pool;
    /// cells inside it are emptied and refilled in place.
    fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (E, Position<C, N>)>,
    {
        self.pending.clear();

        let mut lo = most_positive::<C, N>();
        let mut hi = most_negative::<C, N>();
        for (entry, position) in entries {
            self.pending.push((entry, position));
            lo = componentwise_min(&lo, &position);
            hi = componentwise_max(&hi, &position);
        }

        if self.pending.is_empty() {
            self.release_slots();
            return;
        }

        self.reshape(lo, hi);
        for handle in self.slots.iter().flatten() {
            self.pool[*handle].clear();
        }
        self.place_pending();
    }

    /// Removes stale pairs in place, then adds fresh pairs, growing the box
    /// if a fresh position lies outside it.
    ///
    /// Stale pairs outside the current box are ignored.
    fn differential_update<F, S>(&mut self, fresh: F, stale: S)
    where
        F: IntoIterator<Item = (E, Position<C, N>)>,
        S: IntoIterator<Item = (E, Position<C, N>)>,
    {
        for (entry, position) in stale {
            if let Some(handle) = self.slot_index(&position).and_then(|index| self.slots[index]) {
                self.pool[handle].remove(entry);
            }
        }

        let (mut lo, mut hi) = self
            .bounding_box()
            .unwrap_or_else(|| (most_positive(), most_negative()));

        self.pending.clear();
        for (entry, position) in fresh {
            if let Some(index) = self.slot_index(&position) {
                self.place(index, entry);
            } else {
                self.pending.push((entry, position));
                lo = componentwise_min(&lo, &position);
                hi = componentwise_max(&hi, &position);
            }
        }

        if !self.pending.is_empty() {
            self.reshape(lo, hi);
            self.place_pending();
        }
    }
}

fn to_ndidx<C: Coordinate, const N: usize>(
    position: &Position<C, N>,
    origin: &Position<C, N>,
    indexing: &NdIndexing<N>,
) -> Option<NdIndex<N>> {
    let mut ndidx = [0; N];
    for dim in 0..N {
        let offset = position[dim].to_i128() - origin[dim].to_i128();
        let index = usize::try_from(offset).ok()?;
        if index >= indexing.extent(dim) {
            return None;
        }
        ndidx[dim] = index;
    }
    Some(ndidx)
}

fn to_position<C: Coordinate, const N: usize>(
    ndidx: NdIndex<N>,
    origin: &Position<C, N>,
) -> Position<C, N> {
    std::array::from_fn(|dim| {
        let wide = origin[dim].to_i128() + ndidx[dim] as i128;
        C::from_i128(wide).unwrap_or_else(|| unreachable!("array slot outside coordinate range"))
    })
}
