//! Abstract interfaces shared by every sparse grid
//!
//! Keys and cell values are described by traits so that the store can be
//! shared between fixed-dimension and run-time-dimension matrices.

pub mod element;
pub mod key;

pub use element::CellValue;
pub use key::CoordinateKey;
