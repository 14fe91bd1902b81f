//! Input validation utilities
//!
//! Pure parsing functions with no I/O dependencies.

pub mod parsing;

#[cfg(feature = "alloc")]
pub use parsing::parse_components;
pub use parsing::parse_coordinate;
