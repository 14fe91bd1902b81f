//! Parsing utilities for coordinate strings
//!
//! Coordinates are written as components joined by `x` (`100x200`) or by
//! commas (`100,200`). Surrounding whitespace around each component is
//! ignored. Parsing never allocates unless the dimension is only known at
//! run time.

use crate::coordinate::Coordinate;
use crate::GridError;

/// Parse a coordinate with exactly `N` components
///
/// Returns `DimensionMismatch` when the text holds a different number of
/// components.
pub fn parse_coordinate<const N: usize>(text: &str) -> Result<Coordinate<N>, GridError> {
    let separator = separator_of(text)?;

    let mut components = [0usize; N];
    let mut count = 0;
    for part in text.split(separator) {
        let component = parse_component(part)?;
        if count < N {
            components[count] = component;
        }
        count += 1;
    }

    if count != N {
        return Err(GridError::DimensionMismatch {
            expected: N,
            got: count,
        });
    }

    Ok(Coordinate::new(components))
}

/// Parse a coordinate of any length
#[cfg(feature = "alloc")]
pub fn parse_components(text: &str) -> Result<alloc::vec::Vec<usize>, GridError> {
    let separator = separator_of(text)?;
    text.split(separator).map(parse_component).collect()
}

fn separator_of(text: &str) -> Result<char, GridError> {
    if text.trim().is_empty() {
        return Err(GridError::InvalidCoordinate);
    }
    if text.contains(',') {
        Ok(',')
    } else {
        Ok('x')
    }
}

/// Parse one coordinate component with overflow checking
///
/// Digits only: `str::parse` would also accept a leading `+`.
fn parse_component(text: &str) -> Result<usize, GridError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GridError::InvalidCoordinate);
    }

    let mut result: usize = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            return Err(GridError::InvalidCoordinate);
        }

        let digit = (byte - b'0') as usize;
        result = result
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(GridError::ComponentOverflow)?;
    }

    Ok(result)
}
