//! Error types for sparse grid operations

/// Errors that can occur while addressing or parsing grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A matrix was requested with zero dimensions
    ZeroDimension,
    /// More indices were chained than the matrix has dimensions
    TooManyIndices {
        /// Declared dimension of the matrix
        dimension: usize,
    },
    /// A cursor was resolved before every dimension had an index
    TooFewIndices {
        /// Number of indices supplied so far
        supplied: usize,
        /// Declared dimension of the matrix
        dimension: usize,
    },
    /// A whole coordinate had the wrong number of components
    DimensionMismatch {
        /// Declared dimension of the matrix
        expected: usize,
        /// Components actually supplied
        got: usize,
    },
    /// Coordinate text could not be parsed
    InvalidCoordinate,
    /// A coordinate component does not fit in `usize`
    ComponentOverflow,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::ZeroDimension => write!(f, "Matrix dimension must be at least 1"),
            GridError::TooManyIndices { dimension } => {
                write!(f, "Too many indices for a {dimension}-dimensional matrix")
            }
            GridError::TooFewIndices {
                supplied,
                dimension,
            } => write!(
                f,
                "Cursor resolved with {supplied} of {dimension} indices supplied"
            ),
            GridError::DimensionMismatch { expected, got } => write!(
                f,
                "Coordinate has {got} components, matrix has {expected} dimensions"
            ),
            GridError::InvalidCoordinate => write!(f, "Invalid coordinate"),
            GridError::ComponentOverflow => write!(f, "Coordinate component overflow"),
        }
    }
}

impl core::error::Error for GridError {}

/// Result type for sparse grid operations
pub type Result<T> = core::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GridError::TooManyIndices { dimension: 2 }.to_string(),
            "Too many indices for a 2-dimensional matrix"
        );
        assert_eq!(
            GridError::TooFewIndices {
                supplied: 1,
                dimension: 3
            }
            .to_string(),
            "Cursor resolved with 1 of 3 indices supplied"
        );
        assert_eq!(
            GridError::DimensionMismatch {
                expected: 2,
                got: 4
            }
            .to_string(),
            "Coordinate has 4 components, matrix has 2 dimensions"
        );
    }
}
