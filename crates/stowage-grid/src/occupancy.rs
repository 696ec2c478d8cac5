//! Dense per-cell occupancy bitmap.

use crate::dims::GridDims;
use stowage_core::Point;

/// One flag per grid cell, addressed through the row-major raveling.
///
/// The index answers "is this cell covered by some placement" in O(1);
/// it cannot say *which* placement, so exclusion-aware collision checks
/// cross-reference the placement table. The invariant maintained by the
/// engine: a flag is set iff some entry's shape, translated by its
/// origin, covers that cell.
///
/// Out-of-bounds reads return `false` and out-of-bounds writes are
/// no-ops; callers bounds-check against [`GridDims`] first when the
/// distinction matters.
#[derive(Clone, Debug)]
pub struct OccupancyIndex {
    dims: GridDims,
    cells: Vec<bool>,
}

impl OccupancyIndex {
    /// An all-clear index sized for `dims`.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    /// The dimensions this index is sized for.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Total number of cells in the bitmap.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell at `p` is marked occupied.
    pub fn is_occupied(&self, p: Point) -> bool {
        match self.dims.ravel(p) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Set or clear the flag at `p`. No-op out of bounds.
    pub fn set_occupied(&mut self, p: Point, occupied: bool) {
        if let Some(i) = self.dims.ravel(p) {
            self.cells[i] = occupied;
        }
    }

    /// Set or clear the flag for every point of an iterator.
    pub fn set_all(&mut self, points: impl IntoIterator<Item = Point>, occupied: bool) {
        for p in points {
            self.set_occupied(p, occupied);
        }
    }

    /// Number of cells currently marked occupied.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Reallocate for new dimensions, clearing every flag.
    ///
    /// Callers re-rasterize current placements afterward; the index
    /// carries no memory of the old grid.
    pub fn resize(&mut self, dims: GridDims) {
        self.dims = dims;
        self.cells.clear();
        self.cells.resize(dims.cell_count(), false);
    }
}
