//! Hash-backed grid with one cell per entry.
//!
//! Cells live in a vector addressed by a position → cell-index hash map.
//! Cells that empty out stay mapped, so entries oscillating between the same
//! few positions reuse their cells tick after tick.
//!
//! The layout follows CompactNSearch (Jan Bender et al.), reduced to the
//! grid itself without the neighborhood search.

use ungrd_foundation::{Coordinate, Dim, Entry, HashMap, Position, Result};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::grid::{GridQuery, UniformGrid};

/// Index of a cell in a grid's cell storage.
pub type CellIndex = usize;

/// Reserved cell slot; never mapped to a position and never holds entries.
pub const SENTINEL_CELL: CellIndex = 0;

/// Lifecycle state of a [`CompactGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    /// Only the sentinel cell exists.
    Empty,
    /// At least one update has been applied since construction or `clear`.
    Populated,
}

/// Hash-backed grid where each entry occupies one position.
pub struct CompactGrid<E, C, const N: usize> {
    state: GridState,
    map: HashMap<Position<C, N>, CellIndex>,
    cells: Vec<Cell<E>>,
    /// Cells dropped by a full rebuild, kept for their allocations.
    spare: Vec<Cell<E>>,
    config: GridConfig,
}

impl<E: Entry, C: Coordinate, const N: usize> Default for CompactGrid<E, C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry, C: Coordinate, const N: usize> CompactGrid<E, C, N> {
    /// Creates an empty grid holding only the sentinel cell.
    #[must_use]
    pub fn new() -> Self {
        Self::build(GridConfig::default())
    }

    /// Creates an empty grid with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GridConfig) -> Self {
        let () = Dim::<N>::SUPPORTED;

        Self {
            state: GridState::Empty,
            map: HashMap::default(),
            cells: vec![Cell::new()],
            spare: Vec::new(),
            config,
        }
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> GridState {
        self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the entries at `position`, empty if the position has no cell.
    #[must_use]
    pub fn entries_at(&self, position: &Position<C, N>) -> &[E] {
        match self.map.get(position) {
            Some(&index) => self.cells[index].entries(),
            None => &[],
        }
    }

    /// Iterates over every position that has a cell, empty or not.
    pub fn known_positions(&self) -> impl Iterator<Item = Position<C, N>> + '_ {
        self.map.keys().copied()
    }

    /// Returns the number of cells, empty or not, excluding the sentinel.
    #[must_use]
    pub fn count_known_cells(&self) -> usize {
        self.cells.len() - 1
    }

    /// Empties the grid back to the sentinel cell.
    pub fn clear(&mut self) {
        self.reset();
        if self.state == GridState::Populated {
            log::debug!("compact grid cleared");
        }
        self.state = GridState::Empty;
    }

    fn reset(&mut self) {
        for mut cell in self.cells.drain(SENTINEL_CELL + 1..) {
            cell.clear();
            self.spare.push(cell);
        }
        self.map.clear();
    }

    fn insert(&mut self, entry: E, position: Position<C, N>) {
        let next = self.cells.len();
        let index = *self.map.entry(position).or_insert(next);
        if index == next {
            let mut cell = self.spare.pop().unwrap_or_default();
            cell.reserve(self.config.cell_reserve);
            self.cells.push(cell);
        }

        self.cells[index].insert(entry);
    }

    fn remove(&mut self, entry: E, position: &Position<C, N>) {
        if let Some(&index) = self.map.get(position) {
            self.cells[index].remove(entry);
        }
    }
}

impl<E: Entry, C: Coordinate, const N: usize> GridQuery<E, C, N> for CompactGrid<E, C, N> {
    fn foreach_position<F: FnMut(Position<C, N>)>(&self, mut callback: F) {
        for (position, &index) in &self.map {
            if !self.cells[index].is_empty() {
                callback(*position);
            }
        }
    }

    fn foreach_entry_at_position<F: FnMut(E)>(&self, position: &Position<C, N>, mut callback: F) {
        for &entry in self.entries_at(position) {
            callback(entry);
        }
    }

    fn count_filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl<E: Entry, C: Coordinate, const N: usize> UniformGrid<E, C, N> for CompactGrid<E, C, N> {
    /// Clears every cell and the map down to the sentinel, then inserts
    /// `entries`.
    fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (E, Position<C, N>)>,
    {
        self.reset();
        for (entry, position) in entries {
            self.insert(entry, position);
        }

        if self.state == GridState::Empty {
            log::debug!("compact grid populated");
            self.state = GridState::Populated;
        }
        log::trace!(
            "compact grid rebuilt: {} cells, {} filled",
            self.count_known_cells(),
            self.count_filled_cells()
        );
    }

    /// Inserts every fresh pair, then removes every stale pair.
    ///
    /// Removing from a position without a cell is a no-op. On an
    /// [`Empty`](GridState::Empty) grid this is `update(fresh)`.
    fn differential_update<F, S>(&mut self, fresh: F, stale: S)
    where
        F: IntoIterator<Item = (E, Position<C, N>)>,
        S: IntoIterator<Item = (E, Position<C, N>)>,
    {
        if self.state == GridState::Empty {
            self.update(fresh);
            return;
        }

        for (entry, position) in fresh {
            self.insert(entry, position);
        }
        for (entry, position) in stale {
            self.remove(entry, &position);
        }
    }
}
