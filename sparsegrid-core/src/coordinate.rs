//! Coordinate keys and the hasher used to store them
//!
//! A coordinate is an ordered tuple of `usize` components. Equal coordinates
//! always hash equally: the hash is a fold over every component with a
//! position-dependent rotation, so coordinates that share a prefix (walking
//! one axis while the others stay fixed) still spread across the table.

use core::hash::{Hash, Hasher};

use fnv::FnvBuildHasher;

use crate::traits::CoordinateKey;

/// FNV-1a 64-bit offset basis
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
/// Odd multiplier spreading each component over all 64 bits
const COMPONENT_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Combine all components of a coordinate into a single hash value
///
/// Every component is spread with a multiply, rotated by an amount that
/// depends on its position, and folded into the running hash.
pub fn combine_components(components: &[usize]) -> u64 {
    let mut hash = FNV_OFFSET;
    for (position, &component) in components.iter().enumerate() {
        let mixed = (component as u64).wrapping_mul(COMPONENT_MIX);
        let rotation = (position as u32).wrapping_mul(23).wrapping_add(1) % 64;
        hash ^= mixed.rotate_left(rotation);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash builder used by every sparse store
///
/// Coordinate keys write a single pre-combined `u64`, so the FNV hasher only
/// scrambles eight bytes per lookup.
pub type CoordinateBuildHasher = FnvBuildHasher;

fn write_components(f: &mut core::fmt::Formatter<'_>, components: &[usize]) -> core::fmt::Result {
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            write!(f, "x")?;
        }
        write!(f, "{component}")?;
    }
    Ok(())
}

/// Coordinate with a compile-time number of components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinate<const N: usize>([usize; N]);

impl<const N: usize> Coordinate<N> {
    /// Number of components in this coordinate type
    pub const DIMENSION: usize = N;

    /// Create a coordinate from all of its components at once
    pub const fn new(components: [usize; N]) -> Self {
        Self(components)
    }

    /// Get the component along `axis`, if the axis exists
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }

    /// Borrow the components as an array
    pub const fn as_array(&self) -> &[usize; N] {
        &self.0
    }

    /// Consume the coordinate, returning its components
    pub const fn into_array(self) -> [usize; N] {
        self.0
    }

    /// Same components in reverse order (`row x column` becomes `column x row`)
    pub fn reversed(&self) -> Self {
        let mut components = self.0;
        components.reverse();
        Self(components)
    }
}

impl<const N: usize> CoordinateKey for Coordinate<N> {
    fn components(&self) -> &[usize] {
        &self.0
    }
}

impl<const N: usize> Hash for Coordinate<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(combine_components(&self.0));
    }
}

impl<const N: usize> From<[usize; N]> for Coordinate<N> {
    fn from(components: [usize; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Coordinate<N>> for [usize; N] {
    fn from(coordinate: Coordinate<N>) -> Self {
        coordinate.0
    }
}

impl<const N: usize> core::fmt::Display for Coordinate<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_components(f, &self.0)
    }
}

#[cfg(feature = "alloc")]
pub use dynamic::DynCoordinate;

#[cfg(feature = "alloc")]
mod dynamic {
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::hash::{Hash, Hasher};

    use super::{combine_components, write_components};
    use crate::traits::CoordinateKey;

    /// Coordinate whose component count is chosen at run time
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    pub struct DynCoordinate(Box<[usize]>);

    impl DynCoordinate {
        /// Create a coordinate from a slice of components
        pub fn new(components: &[usize]) -> Self {
            Self(components.into())
        }

        /// Get the component along `axis`, if the axis exists
        pub fn get(&self, axis: usize) -> Option<usize> {
            self.0.get(axis).copied()
        }

        /// Same components in reverse order
        pub fn reversed(&self) -> Self {
            let mut components = self.0.clone();
            components.reverse();
            Self(components)
        }

        /// Consume the coordinate, returning its components
        pub fn into_vec(self) -> Vec<usize> {
            self.0.into_vec()
        }
    }

    impl CoordinateKey for DynCoordinate {
        fn components(&self) -> &[usize] {
            &self.0
        }
    }

    impl Hash for DynCoordinate {
        fn hash<H: Hasher>(&self, state: &mut H) {
            state.write_u64(combine_components(&self.0));
        }
    }

    impl From<Vec<usize>> for DynCoordinate {
        fn from(components: Vec<usize>) -> Self {
            Self(components.into_boxed_slice())
        }
    }

    impl core::fmt::Display for DynCoordinate {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write_components(f, &self.0)
        }
    }
}
