//! Hash containers and small sorted sets.
//!
//! Grid keys are short integer arrays, so the hash containers use FxHash
//! rather than SipHash. [`SmallSortSet`] keeps a handful of elements sorted
//! inline, spilling to the heap only when it outgrows `N`.

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

/// Hash map keyed with FxHash.
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Hash set keyed with FxHash.
pub type HashSet<T> = rustc_hash::FxHashSet<T>;

/// A sorted, deduplicated set stored inline for up to `N` elements.
///
/// Insertion and removal are O(len) (binary search plus shift), which beats
/// a tree or hash set for the few elements it is meant to hold.
#[derive(Clone)]
pub struct SmallSortSet<T, const N: usize>(SmallVec<[T; N]>);

impl<T: Ord, const N: usize> SmallSortSet<T, N> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.binary_search(value).is_ok()
    }

    /// Inserts `value`, returning true if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.0.binary_search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, value);
                true
            }
        }
    }

    /// Removes `value`, returning true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.0.binary_search(value) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every element, keeping any spilled allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the elements as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterates over the elements of `self` that are not in `other`, in order.
    pub fn difference<'a, const M: usize>(
        &'a self,
        other: &'a SmallSortSet<T, M>,
    ) -> Difference<'a, T> {
        Difference {
            left: self.as_slice(),
            right: other.as_slice(),
        }
    }
}

impl<T: Ord, const N: usize> Default for SmallSortSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for SmallSortSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SmallSortSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl<T: Eq, const N: usize> Eq for SmallSortSet<T, N> {}

impl<T: Ord, const N: usize> FromIterator<T> for SmallSortSet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> Extend<T> for SmallSortSet<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord, const N: usize> IntoIterator for &'a SmallSortSet<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a sorted set difference, produced by
/// [`SmallSortSet::difference`].
#[derive(Debug)]
pub struct Difference<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<'a, T: Ord> Iterator for Difference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let (head, rest) = self.left.split_first()?;
            while let Some((other, others)) = self.right.split_first() {
                if other < head {
                    self.right = others;
                } else {
                    break;
                }
            }
            self.left = rest;
            match self.right.first() {
                Some(other) if other == head => {}
                _ => return Some(head),
            }
        }
    }
}
