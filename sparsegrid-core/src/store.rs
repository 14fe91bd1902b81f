//! Hash-backed storage for the live cells of a sparse grid
//!
//! The store holds only cells whose value differs from its default. Writing
//! the default erases the cell, so `len()` is always the live-cell count.

use hashbrown::hash_map::{self, HashMap};

use crate::coordinate::CoordinateBuildHasher;
use crate::traits::{CellValue, CoordinateKey};

/// Mapping from coordinate to value holding only non-default cells
#[derive(Debug, Clone)]
pub struct SparseStore<K, T> {
    cells: HashMap<K, T, CoordinateBuildHasher>,
    default: T,
}

impl<K: CoordinateKey, T: CellValue> SparseStore<K, T> {
    /// Create an empty store whose unwritten cells read as `default`
    pub fn new(default: T) -> Self {
        Self {
            cells: HashMap::with_hasher(CoordinateBuildHasher::default()),
            default,
        }
    }

    /// Create an empty store with room for `capacity` live cells
    pub fn with_capacity(default: T, capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity_and_hasher(capacity, CoordinateBuildHasher::default()),
            default,
        }
    }

    /// Read a cell: the stored value, or the default if the cell is not live
    pub fn read(&self, key: &K) -> &T {
        self.cells.get(key).unwrap_or(&self.default)
    }

    /// Write a cell, returning the value it held if it was live
    ///
    /// Writing the default erases the cell instead of storing it.
    pub fn write(&mut self, key: K, value: T) -> Option<T> {
        if value.is_default(&self.default) {
            self.cells.remove(&key)
        } else {
            self.cells.insert(key, value)
        }
    }

    /// Whether `key` currently holds a non-default value
    pub fn contains(&self, key: &K) -> bool {
        self.cells.contains_key(key)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is live
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value read from every cell that is not live
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Reset every cell to the default
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over live cells in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, K, T> {
        self.cells.iter()
    }
}

impl<K, T> IntoIterator for SparseStore<K, T> {
    type Item = (K, T);
    type IntoIter = hash_map::IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a SparseStore<K, T> {
    type Item = (&'a K, &'a T);
    type IntoIter = hash_map::Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
