//! Sparse matrix whose dimension is chosen at construction time
//!
//! The index count cannot be checked by the compiler here, so every cursor
//! step that would break the arity returns a [`GridError`] immediately:
//!
//! ```
//! use sparsegrid::{DynSparseMatrix, GridError};
//!
//! let mut matrix = DynSparseMatrix::new(3, 0i32)?;
//! matrix.at_mut(1).at(2)?.at(3)?.set(9)?;
//! assert_eq!(matrix.at(1).at(2)?.at(3)?.get()?, 9);
//!
//! assert_eq!(
//!     matrix.at(1).at(2)?.get(),
//!     Err(GridError::TooFewIndices { supplied: 2, dimension: 3 })
//! );
//! assert!(matrix.at(1).at(2)?.at(3)?.at(4).is_err());
//! # Ok::<(), GridError>(())
//! ```

use core::ops::{Deref, DerefMut};

use hashbrown::hash_map;
use log::debug;
use sparsegrid_core::{CellValue, DynCoordinate, GridError, Result, SparseStore};

use crate::config::MatrixConfig;
use crate::cursor::write_cell;

/// Sparse matrix of `T` with a run-time dimension
#[derive(Debug, Clone)]
pub struct DynSparseMatrix<T> {
    dimension: usize,
    store: SparseStore<DynCoordinate, T>,
}

impl<T: CellValue> DynSparseMatrix<T> {
    /// Create an empty `dimension`-dimensional matrix
    pub fn new(dimension: usize, default_value: T) -> Result<Self> {
        Self::with_config(dimension, MatrixConfig::new(default_value))
    }

    /// Create an empty matrix from a configuration
    pub fn with_config(dimension: usize, config: MatrixConfig<T>) -> Result<Self> {
        if dimension == 0 {
            return Err(GridError::ZeroDimension);
        }
        debug!(
            "creating {dimension}-dimensional dynamic sparse matrix (capacity {})",
            config.initial_capacity
        );
        Ok(Self {
            dimension,
            store: SparseStore::with_capacity(config.default_value, config.initial_capacity),
        })
    }

    /// Number of coordinate components
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Value held by every cell that is not live
    pub fn default_value(&self) -> &T {
        self.store.default_value()
    }

    /// Start a read-only cursor at the first index
    pub fn at(&self, index: usize) -> DynCursor<&SparseStore<DynCoordinate, T>> {
        DynCursor::start(&self.store, self.dimension, index)
    }

    /// Start a read-write cursor at the first index
    pub fn at_mut(&mut self, index: usize) -> DynCursor<&mut SparseStore<DynCoordinate, T>> {
        DynCursor::start(&mut self.store, self.dimension, index)
    }

    /// Read a cell by its whole coordinate
    pub fn get(&self, components: &[usize]) -> Result<&T> {
        let key = self.key(components)?;
        Ok(self.store.read(&key))
    }

    /// Write a cell by its whole coordinate, returning the previous live value
    pub fn set(&mut self, components: &[usize], value: T) -> Result<Option<T>> {
        let key = self.key(components)?;
        Ok(write_cell(&mut self.store, key, value))
    }

    /// Whether the cell holds a non-default value
    pub fn contains(&self, components: &[usize]) -> Result<bool> {
        let key = self.key(components)?;
        Ok(self.store.contains(&key))
    }

    /// Number of live cells
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Number of live cells (alias of [`DynSparseMatrix::size`])
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no cell is live
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Reset every cell to the default value
    pub fn clear(&mut self) {
        debug!("clearing {} live cells", self.store.len());
        self.store.clear();
    }

    /// Iterate over live cells in unspecified order
    pub fn iter(&self) -> DynIter<'_, T> {
        DynIter {
            inner: self.store.iter(),
        }
    }

    fn key(&self, components: &[usize]) -> Result<DynCoordinate> {
        if components.len() != self.dimension {
            return Err(GridError::DimensionMismatch {
                expected: self.dimension,
                got: components.len(),
            });
        }
        Ok(DynCoordinate::new(components))
    }
}

impl<'a, T: CellValue> IntoIterator for &'a DynSparseMatrix<T> {
    type Item = DynCell<'a, T>;
    type IntoIter = DynIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over run-time-dimension coordinates
#[derive(Debug)]
pub struct DynCursor<S> {
    store: S,
    dimension: usize,
    components: Vec<usize>,
}

impl<S> DynCursor<S> {
    fn start(store: S, dimension: usize, first: usize) -> Self {
        let mut components = Vec::with_capacity(dimension);
        components.push(first);
        Self {
            store,
            dimension,
            components,
        }
    }

    /// Supply the next index, failing if every dimension already has one
    pub fn at(mut self, index: usize) -> Result<Self> {
        if self.components.len() == self.dimension {
            return Err(GridError::TooManyIndices {
                dimension: self.dimension,
            });
        }
        self.components.push(index);
        Ok(self)
    }

    /// Number of indices supplied so far
    pub fn supplied(&self) -> usize {
        self.components.len()
    }

    /// Whether every dimension has an index
    pub fn is_complete(&self) -> bool {
        self.components.len() == self.dimension
    }

    /// The complete coordinate, or `TooFewIndices`
    pub fn coordinate(&self) -> Result<DynCoordinate> {
        if !self.is_complete() {
            return Err(GridError::TooFewIndices {
                supplied: self.components.len(),
                dimension: self.dimension,
            });
        }
        Ok(DynCoordinate::new(&self.components))
    }
}

impl<S, T> DynCursor<S>
where
    S: Deref<Target = SparseStore<DynCoordinate, T>>,
    T: CellValue,
{
    /// Borrow the cell's value
    pub fn value(&self) -> Result<&T> {
        let key = self.coordinate()?;
        Ok(self.store.read(&key))
    }

    /// Read the cell's value
    pub fn get(&self) -> Result<T> {
        self.value().cloned()
    }
}

impl<S, T> DynCursor<S>
where
    S: DerefMut<Target = SparseStore<DynCoordinate, T>>,
    T: CellValue,
{
    /// Write the cell and return the cursor for further writes
    pub fn set(&mut self, value: T) -> Result<&mut Self> {
        self.replace(value)?;
        Ok(self)
    }

    /// Write the cell, returning its previous value if it was live
    pub fn replace(&mut self, value: T) -> Result<Option<T>> {
        let key = self.coordinate()?;
        Ok(write_cell(&mut *self.store, key, value))
    }
}

/// One live cell of a [`DynSparseMatrix`]
#[derive(Debug, PartialEq)]
pub struct DynCell<'a, T> {
    /// Full coordinate of the cell
    pub coordinate: &'a DynCoordinate,
    /// Stored (non-default) value
    pub value: &'a T,
}

/// Borrowing iterator over the live cells of a [`DynSparseMatrix`]
pub struct DynIter<'a, T> {
    inner: hash_map::Iter<'a, DynCoordinate, T>,
}

impl<'a, T> Iterator for DynIter<'a, T> {
    type Item = DynCell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(coordinate, value)| DynCell { coordinate, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DynIter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
