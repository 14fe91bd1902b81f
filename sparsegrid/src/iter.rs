//! Iteration over the live cells of a sparse matrix
//!
//! Traversal order is whatever the underlying hash table yields: it is not
//! coordinate order and may differ between runs, but a single traversal of
//! an unmodified matrix visits every live cell exactly once. Exhaustion is
//! signalled by `None`; there is no end position to dereference. Because an
//! iterator borrows the matrix, writes during traversal do not compile.

use core::iter::FusedIterator;

use hashbrown::hash_map;
use sparsegrid_core::Coordinate;

/// One live cell: its coordinate and a borrow of its value
#[derive(Debug, PartialEq)]
pub struct Cell<'a, T, const N: usize> {
    /// Full coordinate of the cell
    pub coordinate: Coordinate<N>,
    /// Stored (non-default) value
    pub value: &'a T,
}

impl<'a, T, const N: usize> Cell<'a, T, N> {
    /// Split into the raw components and the value
    pub fn into_parts(self) -> ([usize; N], &'a T) {
        (self.coordinate.into_array(), self.value)
    }
}

impl<T, const N: usize> Clone for Cell<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cell<'_, T, N> {}

/// Borrowing iterator over live cells
pub struct Iter<'a, T, const N: usize> {
    inner: hash_map::Iter<'a, Coordinate<N>, T>,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(inner: hash_map::Iter<'a, Coordinate<N>, T>) -> Self {
        Self { inner }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = Cell<'a, T, N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(coordinate, value)| Cell {
            coordinate: *coordinate,
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

/// Owning iterator over live cells
pub struct IntoIter<T, const N: usize> {
    inner: hash_map::IntoIter<Coordinate<N>, T>,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(inner: hash_map::IntoIter<Coordinate<N>, T>) -> Self {
        Self { inner }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = (Coordinate<N>, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

#[cfg(test)]
mod tests {
    use crate::SparseMatrix;
    use std::collections::HashSet;

    #[test]
    fn test_single_cell() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(-1);
        matrix.at_mut(100).at(100).set(314);

        let mut visited = 0;
        for cell in &matrix {
            let ([row, column], value) = cell.into_parts();
            assert_eq!(row, 100);
            assert_eq!(column, 100);
            assert_eq!(*value, 314);
            visited += 1;
        }
        assert_eq!(visited, 1);
    }

    #[test]
    fn test_empty_matrix_yields_nothing() {
        let matrix: SparseMatrix<i32, 3> = SparseMatrix::new(0);
        let mut iter = matrix.iter();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_yields_live_set_exactly_once() {
        let mut matrix: SparseMatrix<u32, 2> = SparseMatrix::new(0);
        for i in 0..100 {
            matrix.at_mut(i).at(i * 7).set(i as u32 % 5);
        }
        let expected: HashSet<[usize; 2]> = (0..100)
            .filter(|i| i % 5 != 0)
            .map(|i| [i, i * 7])
            .collect();

        let iter = matrix.iter();
        assert_eq!(iter.len(), expected.len());
        let seen: Vec<[usize; 2]> = iter.map(|cell| cell.coordinate.into_array()).collect();
        let unique: HashSet<[usize; 2]> = seen.iter().copied().collect();
        assert_eq!(seen.len(), unique.len());
        assert_eq!(unique, expected);

        for cell in matrix.iter() {
            assert_eq!(matrix.get(cell.coordinate), cell.value);
        }
    }

    #[test]
    fn test_restartable() {
        let matrix: SparseMatrix<i32, 2> = [([1usize, 2], 3), ([4, 5], 6)].into_iter().collect();
        let first: Vec<_> = matrix.iter().map(|cell| cell.coordinate).collect();
        let second: Vec<_> = matrix.iter().map(|cell| cell.coordinate).collect();
        assert_eq!(first, second);

        let mut partial = matrix.iter();
        partial.next();
        let resumed = partial.clone();
        assert_eq!(partial.count(), 1);
        assert_eq!(resumed.count(), 1);
        assert_eq!(matrix.iter().count(), 2);
    }

    #[test]
    fn test_reset_cell_is_not_yielded() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut(1).at(1).set(5);
        matrix.at_mut(2).at(2).set(6);
        matrix.at_mut(1).at(1).set(0);

        let cells: Vec<_> = matrix.iter().map(|cell| cell.into_parts()).collect();
        assert_eq!(cells, vec![([2, 2], &6)]);
    }

    #[test]
    fn test_owning_iteration() {
        let mut matrix: SparseMatrix<String, 1> = SparseMatrix::default();
        matrix.at_mut(3).set("three".to_string());
        matrix.at_mut(4).set("four".to_string());

        let mut cells: Vec<(usize, String)> = matrix
            .into_iter()
            .map(|(coordinate, value)| (coordinate.into_array()[0], value))
            .collect();
        cells.sort();
        assert_eq!(cells, vec![(3, "three".to_string()), (4, "four".to_string())]);
    }
}
