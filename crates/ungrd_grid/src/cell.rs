//! Grid cells.

/// The entries occupying one grid position.
///
/// An unordered list without duplicates. Membership tests are linear scans:
/// cells hold tens of entries at most, where a scan beats hashing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<E> {
    entries: Vec<E>,
}

impl<E> Default for Cell<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Copy + PartialEq> Cell<E> {
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if no entry occupies the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries, in no particular order.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Returns true if `entry` occupies the cell.
    #[must_use]
    pub fn contains(&self, entry: E) -> bool {
        self.entries.contains(&entry)
    }

    /// Adds `entry`, returning false if it was already present.
    pub fn insert(&mut self, entry: E) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes `entry`, returning false if it was absent.
    pub fn remove(&mut self, entry: E) -> bool {
        match self.entries.iter().position(|&e| e == entry) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }
}
