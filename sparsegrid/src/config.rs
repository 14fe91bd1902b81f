//! Construction settings for sparse matrices

/// Configuration used when creating a sparse matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig<T> {
    /// Value read from every cell that was never written
    pub default_value: T,
    /// Number of live cells to reserve room for up front
    pub initial_capacity: usize,
}

impl<T> MatrixConfig<T> {
    /// Create a config with the given default value and no preallocation
    pub fn new(default_value: T) -> Self {
        Self {
            default_value,
            initial_capacity: 0,
        }
    }

    /// Reserve room for `capacity` live cells
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Replace the default value
    pub fn with_default_value(mut self, default_value: T) -> Self {
        self.default_value = default_value;
        self
    }

    /// Estimate the live cell count of a grid with `side` cells per axis
    ///
    /// `density` is the expected fraction of non-default cells and is
    /// clamped to `0.0..=1.0`. Saturates instead of overflowing.
    pub fn estimated_capacity(side: usize, dimension: usize, density: f64) -> usize {
        let dimension = u32::try_from(dimension).unwrap_or(u32::MAX);
        let cells = side.saturating_pow(dimension);
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        (cells as f64 * density).ceil() as usize
    }
}

impl<T: Default> Default for MatrixConfig<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
