//! sparsegrid - sparse N-dimensional matrices with chained indexing
//!
//! A matrix stores only the cells whose value differs from its default;
//! every other cell reads as the default and costs nothing.
//!
//! ## Architecture
//!
//! - **sparsegrid-core**: coordinate keys, hashing, arity markers, errors and
//!   the hash-backed store (no_std)
//! - **sparsegrid**: the matrix types, cursors and iterators built on top
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
//! for i in 0..10 {
//!     matrix.at_mut(i).at(i).set(i as i32);
//! }
//!
//! // writing the default (0 at [0][0]) stores nothing
//! assert_eq!(matrix.size(), 9);
//! assert_eq!(matrix.at(3).at(3).get(), 3);
//!
//! for cell in &matrix {
//!     let ([row, column], value) = cell.into_parts();
//!     assert_eq!(row, column);
//!     assert_eq!(*value as usize, row);
//! }
//! ```
//!
//! ## Features
//!
//! - **Compile-time arity**: `SparseMatrix<T, N>` cursors only resolve after
//!   exactly `N` indices
//! - **Run-time arity**: `DynSparseMatrix<T>` reports arity mistakes as
//!   [`GridError`]s
//! - **Explicit reads and writes**: cursors resolve with `get()` or `set()`,
//!   and read cursors cannot write
//! - **cli**: the `diagonal` demo program

// Re-export core abstractions
pub use sparsegrid_core::{
    // Coordinates
    Coordinate, CoordinateKey, DynCoordinate,
    // Values
    CellValue,
    // Error handling
    GridError, Result,
    // Parsing utilities
    parse_components, parse_coordinate,
    // Storage
    SparseStore,
    // Index counting
    Dim, Done, More, Rank, Remaining,
};

pub mod config;
pub mod cursor;
pub mod dynamic;
pub mod iter;
pub mod matrix;

pub use config::MatrixConfig;
pub use cursor::{Cursor, ReadCursor, WriteCursor};
pub use dynamic::{DynCell, DynCursor, DynIter, DynSparseMatrix};
pub use iter::{Cell, IntoIter, Iter};
pub use matrix::SparseMatrix;

/// Version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of this library, as reported by the demo program
pub fn version() -> &'static str {
    VERSION
}
