//! Coordinate key abstraction

use core::hash::Hash;

/// Trait for types that address a single cell of a sparse grid
///
/// Implementations must hash every component so that equal keys hash
/// equally, and must never truncate a component.
pub trait CoordinateKey: Hash + Eq + Clone {
    /// All components of the key, in axis order
    fn components(&self) -> &[usize];

    /// Number of components
    fn dimension(&self) -> usize {
        self.components().len()
    }
}
