//! Hash-backed grid where an entry may occupy several positions.
//!
//! Entries with spatial extent overlap more than one cell. Each update names
//! an entry's current positions; the grid diffs them against the cells it
//! recorded for that entry last time and only touches the difference.

use ungrd_foundation::{Coordinate, Dim, Entry, Error, HashMap, Position, Result, SmallSortSet};

use crate::cell::Cell;
use crate::compact::CellIndex;
use crate::config::GridConfig;
use crate::grid::GridQuery;

type PositionSet<C, const N: usize> = SmallSortSet<Position<C, N>, 8>;

struct MultiCell<E, C, const N: usize> {
    position: Position<C, N>,
    cell: Cell<E>,
}

/// Hash-backed grid where each entry occupies any number of positions.
pub struct CompactMultiGrid<E, C, const N: usize> {
    map: HashMap<Position<C, N>, CellIndex>,
    cells: Vec<MultiCell<E, C, N>>,
    /// Cells each entry currently belongs to.
    memberships: HashMap<E, SmallSortSet<CellIndex, 4>>,
    current: PositionSet<C, N>,
    previous: PositionSet<C, N>,
    config: GridConfig,
}

impl<E: Entry, C: Coordinate, const N: usize> Default for CompactMultiGrid<E, C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry, C: Coordinate, const N: usize> CompactMultiGrid<E, C, N> {
    /// Creates an empty grid.
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
            map: HashMap::default(),
            cells: Vec::new(),
            memberships: HashMap::default(),
            current: SmallSortSet::new(),
            previous: SmallSortSet::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Brings each listed entry's positions up to date.
    ///
    /// `entries` yields each entry with the full set of positions it
    /// currently occupies; order and duplicates are irrelevant. Entries not
    /// listed keep their cells.
    ///
    /// # Panics
    ///
    /// Panics if an entry's recorded cell is missing from the position map,
    /// which means the grid's bookkeeping is corrupt.
    pub fn update<I, P>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (E, P)>,
        P: IntoIterator<Item = Position<C, N>>,
    {
        let mut seen = 0usize;
        let mut changed = 0usize;

        for (entry, positions) in entries {
            seen += 1;

            let mut current = std::mem::take(&mut self.current);
            let mut previous = std::mem::take(&mut self.previous);
            current.clear();
            current.extend(positions);
            previous.clear();
            previous.extend(self.positions_of(entry));

            if current != previous {
                changed += 1;
                for &position in current.difference(&previous) {
                    self.connect(entry, position);
                }
                for position in previous.difference(&current) {
                    self.disconnect(entry, position);
                }
            }

            self.current = current;
            self.previous = previous;
        }

        log::trace!(
            "multi grid update: {changed} of {seen} entries moved, {} cells known",
            self.cells.len()
        );
    }

    /// Removes `entry` from every cell it occupies.
    ///
    /// Returns false if the entry occupied no cell.
    pub fn remove_entry(&mut self, entry: E) -> bool {
        let Some(membership) = self.memberships.remove(&entry) else {
            return false;
        };

        for &index in &membership {
            self.cells[index].cell.remove(entry);
        }
        !membership.is_empty()
    }

    /// Iterates over the positions `entry` currently occupies.
    pub fn positions_of(&self, entry: E) -> impl Iterator<Item = Position<C, N>> + '_ {
        self.memberships
            .get(&entry)
            .into_iter()
            .flat_map(|membership| membership.iter())
            .map(|&index| self.cells[index].position)
    }

    /// Returns the entries at `position`, empty if the position has no cell.
    #[must_use]
    pub fn entries_at(&self, position: &Position<C, N>) -> &[E] {
        match self.map.get(position) {
            Some(&index) => self.cells[index].cell.entries(),
            None => &[],
        }
    }

    /// Iterates over every position that has a cell, empty or not.
    pub fn known_positions(&self) -> impl Iterator<Item = Position<C, N>> + '_ {
        self.cells.iter().map(|cell| cell.position)
    }

    /// Returns the number of cells, empty or not.
    #[must_use]
    pub fn count_known_cells(&self) -> usize {
        self.cells.len()
    }

    /// Drops every cell and membership.
    pub fn clear(&mut self) {
        self.map.clear();
        self.cells.clear();
        self.memberships.clear();
    }

    fn connect(&mut self, entry: E, position: Position<C, N>) {
        let next = self.cells.len();
        let index = *self.map.entry(position).or_insert(next);
        if index == next {
            let mut cell = Cell::new();
            cell.reserve(self.config.cell_reserve);
            self.cells.push(MultiCell { position, cell });
        }
        self.cells[index].cell.insert(entry);
        self.memberships.entry(entry).or_default().insert(index);
    }

    fn disconnect(&mut self, entry: E, position: &Position<C, N>) {
        let Some(&index) = self.map.get(position) else {
            panic!("{}", Error::unknown_cell(format!("{position:?}")));
        };
        self.cells[index].cell.remove(entry);
        if let Some(membership) = self.memberships.get_mut(&entry) {
            membership.remove(&index);
            if membership.is_empty() {
                self.memberships.remove(&entry);
            }
        }
    }
}

impl<E: Entry, C: Coordinate, const N: usize> GridQuery<E, C, N> for CompactMultiGrid<E, C, N> {
    fn foreach_position<F: FnMut(Position<C, N>)>(&self, mut callback: F) {
        for cell in &self.cells {
            if !cell.cell.is_empty() {
                callback(cell.position);
            }
        }
    }

    fn foreach_entry_at_position<F: FnMut(E)>(&self, position: &Position<C, N>, mut callback: F) {
        for &entry in self.entries_at(position) {
            callback(entry);
        }
    }

    fn count_filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.cell.is_empty()).count()
    }
}
