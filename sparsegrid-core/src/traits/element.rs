//! Cell value type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in the cells of a sparse grid.

/// Trait for types that can be stored as cell values
///
/// A cell value must be:
/// - Clone: reads hand out copies of stored or default values
/// - PartialEq: writes compare against the default to keep the grid sparse
///
/// Implemented for every type meeting those bounds.
pub trait CellValue: Clone + PartialEq {
    /// Whether this value equals `default`, i.e. need not be stored
    fn is_default(&self, default: &Self) -> bool {
        self == default
    }
}

impl<T: Clone + PartialEq> CellValue for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_default() {
        assert!(0i32.is_default(&0));
        assert!(!5i32.is_default(&0));
        assert!((-1i64).is_default(&-1));
        assert!(String::new().is_default(&String::new()));
    }

    #[test]
    fn test_float_default_follows_partial_eq() {
        assert!(0.0f64.is_default(&-0.0));
        assert!(!f64::NAN.is_default(&f64::NAN));
    }
}
