//! Engine configuration.

use crate::dims::GridDims;

/// Construction-time configuration for a [`GridEngine`](crate::GridEngine).
#[derive(Clone, Copy, Debug, Default)]
pub struct GridConfig {
    /// Initial grid dimensions.
    pub size: GridDims,
}

impl GridConfig {
    /// Configuration for a grid of the given dimensions.
    pub fn with_size(size: GridDims) -> Self {
        Self { size }
    }
}
