//! Sparse matrix with a compile-time dimension
//!
//! Only cells holding something other than the default value take up
//! storage. Cells are addressed either through chained cursors
//! (`matrix.at(i).at(j)`) or with whole coordinates (`matrix.get([i, j])`).
//!
//! ```
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(-1);
//! matrix.at_mut(100).at(100).set(314);
//!
//! assert_eq!(matrix.at(100).at(100).get(), 314);
//! assert_eq!(matrix.at(0).at(0).get(), -1);
//! assert_eq!(matrix.size(), 1);
//! ```

use core::ops::Index;

use log::debug;
use sparsegrid_core::{CellValue, Coordinate, Dim, Rank, SparseStore};

use crate::config::MatrixConfig;
use crate::cursor::{write_cell, Cursor, ReadCursor, WriteCursor};
use crate::iter::{IntoIter, Iter};

/// Sparse `N`-dimensional matrix of `T`
///
/// Cloning deep-copies every live cell. Not synchronized: share across
/// threads only behind external locking.
///
/// Chained cursors (`at`/`at_mut`) exist for `N` from 1 to 8. Larger
/// dimensions still work through whole coordinates (`get`, `set`, indexing):
///
/// ```compile_fail
/// use sparsegrid::SparseMatrix;
///
/// let matrix: SparseMatrix<i32, 9> = SparseMatrix::new(0);
/// let _ = matrix.at(0);
/// ```
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, const N: usize> {
    store: SparseStore<Coordinate<N>, T>,
}

impl<T: CellValue, const N: usize> SparseMatrix<T, N> {
    /// Create an empty matrix whose unwritten cells read as `default_value`
    pub fn new(default_value: T) -> Self {
        Self::with_config(MatrixConfig::new(default_value))
    }

    /// Create an empty matrix from a configuration
    pub fn with_config(config: MatrixConfig<T>) -> Self {
        debug!(
            "creating {N}-dimensional sparse matrix (capacity {})",
            config.initial_capacity
        );
        Self {
            store: SparseStore::with_capacity(config.default_value, config.initial_capacity),
        }
    }

    /// Number of coordinate components
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Value held by every cell that is not live
    pub fn default_value(&self) -> &T {
        self.store.default_value()
    }

    /// Read a cell by its whole coordinate
    pub fn get(&self, coordinate: impl Into<Coordinate<N>>) -> &T {
        self.store.read(&coordinate.into())
    }

    /// Write a cell by its whole coordinate, returning the previous live value
    ///
    /// Writing the default value erases the cell.
    pub fn set(&mut self, coordinate: impl Into<Coordinate<N>>, value: T) -> Option<T> {
        write_cell(&mut self.store, coordinate.into(), value)
    }

    /// Whether the cell holds a non-default value
    pub fn contains(&self, coordinate: impl Into<Coordinate<N>>) -> bool {
        self.store.contains(&coordinate.into())
    }

    /// Number of live cells
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Number of live cells (alias of [`SparseMatrix::size`])
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
    ///
    /// Each call starts a fresh traversal. The matrix cannot be modified
    /// while the iterator is alive.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.store.iter())
    }
}

impl<T: CellValue, const N: usize> SparseMatrix<T, N>
where
    Dim<N>: Rank,
{
    /// Start a read-only cursor at the first index
    pub fn at(&self, index: usize) -> ReadCursor<'_, T, N, <Dim<N> as Rank>::AfterFirst> {
        Cursor::start(&self.store, index)
    }

    /// Start a read-write cursor at the first index
    pub fn at_mut(&mut self, index: usize) -> WriteCursor<'_, T, N, <Dim<N> as Rank>::AfterFirst> {
        Cursor::start(&mut self.store, index)
    }
}

impl<T: CellValue + Default, const N: usize> Default for SparseMatrix<T, N> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: CellValue, const N: usize> Index<[usize; N]> for SparseMatrix<T, N> {
    type Output = T;

    fn index(&self, coordinate: [usize; N]) -> &T {
        self.get(coordinate)
    }
}

impl<T: CellValue, const N: usize> Index<Coordinate<N>> for SparseMatrix<T, N> {
    type Output = T;

    fn index(&self, coordinate: Coordinate<N>) -> &T {
        self.get(coordinate)
    }
}

impl<T: CellValue, const N: usize, C: Into<Coordinate<N>>> Extend<(C, T)> for SparseMatrix<T, N> {
    fn extend<I: IntoIterator<Item = (C, T)>>(&mut self, cells: I) {
        for (coordinate, value) in cells {
            self.set(coordinate, value);
        }
    }
}

impl<T: CellValue + Default, const N: usize, C: Into<Coordinate<N>>> FromIterator<(C, T)>
    for SparseMatrix<T, N>
{
    fn from_iter<I: IntoIterator<Item = (C, T)>>(cells: I) -> Self {
        let mut matrix = Self::default();
        matrix.extend(cells);
        matrix
    }
}

impl<'a, T: CellValue, const N: usize> IntoIterator for &'a SparseMatrix<T, N> {
    type Item = crate::iter::Cell<'a, T, N>;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> IntoIterator for SparseMatrix<T, N> {
    type Item = (Coordinate<N>, T);
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_empty() {
        let matrix: SparseMatrix<i32, 2> = SparseMatrix::new(-1);
        assert_eq!(matrix.size(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(*matrix.default_value(), -1);
    }

    #[test]
    fn test_default_value_reads() {
        let matrix: SparseMatrix<i32, 2> = SparseMatrix::new(-1);
        assert_eq!(matrix.at(0).at(0).get(), -1);
        assert_eq!(matrix.at(34523).at(52435).get(), -1);

        let a = matrix.at(0).at(0).get();
        assert_eq!(a, -1);
        let b = matrix.at(434).at(5234).get();
        assert_eq!(b, -1);

        assert_eq!(matrix[[7, 7]], -1);
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn test_assignment() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(-1);
        matrix.at_mut(100).at(100).set(314);
        assert_eq!(matrix.at(100).at(100).get(), 314);
        assert_eq!(matrix.size(), 1);

        matrix.at_mut(12345).at(54321).set(314);
        assert_eq!(matrix.at(12345).at(54321).get(), 314);
        assert_eq!(matrix.size(), 2);
    }

    #[test]
    fn test_whole_coordinate_access() {
        let mut matrix: SparseMatrix<f64, 3> = SparseMatrix::default();
        assert_eq!(matrix.set([1, 2, 3], 1.5), None);
        assert_eq!(matrix.set(Coordinate::new([1, 2, 3]), 2.5), Some(1.5));
        assert_eq!(*matrix.get([1, 2, 3]), 2.5);
        assert_eq!(matrix[Coordinate::new([1, 2, 3])], 2.5);
        assert!(matrix.contains([1, 2, 3]));
        assert!(!matrix.contains([3, 2, 1]));

        assert_eq!(matrix.set([1, 2, 3], 0.0), Some(2.5));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        original.at_mut(1).at(1).set(11);

        let mut copy = original.clone();
        copy.at_mut(1).at(1).set(0);
        copy.at_mut(2).at(2).set(22);

        assert_eq!(original.at(1).at(1).get(), 11);
        assert_eq!(original.at(2).at(2).get(), 0);
        assert_eq!(copy.at(1).at(1).get(), 0);
        assert_eq!(copy.at(2).at(2).get(), 22);
        assert_eq!(original.size(), 1);
        assert_eq!(copy.size(), 1);
    }

    #[test]
    fn test_move_transfers_cells() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut(4).at(2).set(42);
        let moved = matrix;
        assert_eq!(moved.at(4).at(2).get(), 42);
        assert_eq!(moved.size(), 1);
    }

    #[test]
    fn test_clear() {
        let mut matrix: SparseMatrix<i32, 2> = (0..5usize).map(|i| ([i, i], i as i32 + 1)).collect();
        assert_eq!(matrix.size(), 5);
        matrix.clear();
        assert!(matrix.is_empty());
        assert_eq!(matrix.at(3).at(3).get(), 0);
    }

    #[test]
    fn test_extend_skips_defaults() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::with_config(
            MatrixConfig::new(0).with_capacity(8),
        );
        matrix.extend([([0usize, 0], 0), ([0, 1], 1), ([1, 0], 0), ([1, 1], 2)]);
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix[[1, 1]], 2);
    }

    #[test]
    fn test_high_dimension_whole_coordinates() {
        let mut matrix: SparseMatrix<u8, 9> = SparseMatrix::new(0);
        assert_eq!(matrix.set([1, 2, 3, 4, 5, 6, 7, 8, 9], 7), None);
        assert_eq!(matrix[[1, 2, 3, 4, 5, 6, 7, 8, 9]], 7);
        assert_eq!(*matrix.get([9, 8, 7, 6, 5, 4, 3, 2, 1]), 0);
        assert_eq!(matrix.size(), 1);
    }

    #[test]
    fn test_non_copy_values() {
        let mut matrix: SparseMatrix<String, 2> = SparseMatrix::default();
        matrix.at_mut(0).at(1).set("hello".to_string());
        assert_eq!(matrix.at(0).at(1).value(), "hello");
        assert_eq!(matrix.at(1).at(0).get(), "");
        matrix.at_mut(0).at(1).set(String::new());
        assert!(matrix.is_empty());
    }
}
