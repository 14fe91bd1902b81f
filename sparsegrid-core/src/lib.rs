#![cfg_attr(not(test), no_std)]

//! sparsegrid core - coordinate keys, hashing and cell storage
//!
//! This crate provides the building blocks of a sparse N-dimensional grid:
//! coordinate keys with a prefix-resistant hash, type-level index counting
//! for chained cursors, and (with the `alloc` feature) the hash-backed store
//! that keeps only non-default cells.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arity;
pub mod coordinate;
pub mod error;
#[cfg(feature = "alloc")]
pub mod store;
pub mod traits;
pub mod validation;

pub use arity::{Dim, Done, More, Rank, Remaining};
#[cfg(feature = "alloc")]
pub use coordinate::DynCoordinate;
pub use coordinate::{combine_components, Coordinate, CoordinateBuildHasher};
pub use error::*;
#[cfg(feature = "alloc")]
pub use store::SparseStore;
pub use traits::*;
#[cfg(feature = "alloc")]
pub use validation::parse_components;
pub use validation::parse_coordinate;
