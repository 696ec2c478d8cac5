//! Grid dimensions and the coordinate ⇄ index mapping.

use crate::error::GridError;
use std::fmt;
use stowage_core::Point;

/// The width and height of one rectangular grid.
///
/// A cell `(x, y)` is in bounds when `0 <= x < height` and
/// `0 <= y < width`: `x` indexes rows and `y` columns, matching the
/// row-major raveling `index = x * width + y`. Construction rejects
/// zero-cell grids and dimensions that do not fit the `i32` coordinate
/// range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create dimensions for a `width × height` grid.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count, `width × height`.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `p` lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.height as i32 && p.y >= 0 && p.y < self.width as i32
    }

    /// Map an in-bounds cell to its flat row-major index.
    ///
    /// Returns `None` for out-of-range points; callers that have
    /// already bounds-checked may unwrap freely.
    pub fn ravel(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.x as usize) * (self.width as usize) + (p.y as usize))
    }

    /// Inverse of [`ravel`](Self::ravel).
    pub fn unravel(&self, index: usize) -> Option<Point> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((index / w) as i32, (index % w) as i32))
    }

    /// Iterate all cells in row-major order (`x` outer, `y` inner).
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |x| (0..w).map(move |y| Point::new(x, y)))
    }
}

impl Default for GridDims {
    /// A 10×10 grid.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
