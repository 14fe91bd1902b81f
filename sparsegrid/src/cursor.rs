//! Chained, arity-checked access to single cells
//!
//! `matrix.at(i)` starts a cursor holding one index; every further `.at(j)`
//! adds one more. Once all `N` indices are present the cursor can be read
//! with [`Cursor::get`] or, for cursors from `at_mut`, written with
//! [`Cursor::set`]. The index count is tracked in the cursor's type, so chains
//! of the wrong length do not compile:
//!
//! ```compile_fail
//! use sparsegrid::SparseMatrix;
//!
//! let matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
//! // one index short: `get` does not exist yet
//! let _ = matrix.at(1).get();
//! ```
//!
//! ```compile_fail
//! use sparsegrid::SparseMatrix;
//!
//! let matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
//! // one index too many: `at` no longer exists
//! let _ = matrix.at(1).at(2).at(3);
//! ```
//!
//! Read cursors only hold a shared borrow of the store, so they cannot write:
//!
//! ```compile_fail
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
//! matrix.at(1).at(2).set(5);
//! ```

use core::fmt::Display;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use log::trace;
use sparsegrid_core::{CellValue, Coordinate, CoordinateKey, Done, More, Remaining, SparseStore};

/// Cursor over `N`-component coordinates
///
/// `S` is the borrow of the store (`&SparseStore` for reads, `&mut
/// SparseStore` for writes) and `R` counts the indices still missing.
#[derive(Debug)]
pub struct Cursor<S, const N: usize, R> {
    store: S,
    components: [usize; N],
    _remaining: PhantomData<R>,
}

/// Cursor that can only read
pub type ReadCursor<'a, T, const N: usize, R> = Cursor<&'a SparseStore<Coordinate<N>, T>, N, R>;

/// Cursor that can read and write
pub type WriteCursor<'a, T, const N: usize, R> =
    Cursor<&'a mut SparseStore<Coordinate<N>, T>, N, R>;

impl<S, const N: usize, R: Remaining> Cursor<S, N, R> {
    /// Cursor holding only the first index; callers guarantee `N - 1 == R::COUNT`
    pub(crate) fn start(store: S, first: usize) -> Self {
        debug_assert_eq!(N, R::COUNT + 1);
        let mut components = [0; N];
        components[0] = first;
        Self {
            store,
            components,
            _remaining: PhantomData,
        }
    }

    /// Number of indices supplied so far
    pub fn supplied(&self) -> usize {
        N - R::COUNT
    }
}

impl<S, const N: usize, R: Remaining> Cursor<S, N, More<R>> {
    /// Supply the next index
    pub fn at(self, index: usize) -> Cursor<S, N, R> {
        let mut components = self.components;
        components[N - R::COUNT - 1] = index;
        Cursor {
            store: self.store,
            components,
            _remaining: PhantomData,
        }
    }
}

impl<S, const N: usize> Cursor<S, N, Done> {
    /// The complete coordinate this cursor points at
    pub fn coordinate(&self) -> Coordinate<N> {
        Coordinate::new(self.components)
    }
}

impl<S, T, const N: usize> Cursor<S, N, Done>
where
    S: Deref<Target = SparseStore<Coordinate<N>, T>>,
    T: CellValue,
{
    /// Borrow the cell's value (the default if the cell is not live)
    pub fn value(&self) -> &T {
        self.store.read(&self.coordinate())
    }

    /// Read the cell's value
    pub fn get(&self) -> T {
        self.value().clone()
    }

    /// Whether the cell holds a non-default value
    pub fn is_live(&self) -> bool {
        self.store.contains(&self.coordinate())
    }
}

impl<S, T, const N: usize> Cursor<S, N, Done>
where
    S: DerefMut<Target = SparseStore<Coordinate<N>, T>>,
    T: CellValue,
{
    /// Write the cell and return the cursor for further writes
    pub fn set(&mut self, value: T) -> &mut Self {
        self.replace(value);
        self
    }

    /// Write the cell, returning its previous value if it was live
    pub fn replace(&mut self, value: T) -> Option<T> {
        let coordinate = self.coordinate();
        write_cell(&mut *self.store, coordinate, value)
    }
}

/// Write through a store, tracing cells that fall back to the default
pub(crate) fn write_cell<K, T>(store: &mut SparseStore<K, T>, key: K, value: T) -> Option<T>
where
    K: CoordinateKey + Display,
    T: CellValue,
{
    if value.is_default(store.default_value()) {
        let previous = store.write(key.clone(), value);
        if previous.is_some() {
            trace!("cell {key} reset to default");
        }
        previous
    } else {
        store.write(key, value)
    }
}
