//! Integer grid coordinates.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed 2D grid coordinate.
///
/// `x` is the row axis and `y` the column axis, matching the row-major
/// cell ordering used by the occupancy index. Points are plain value
/// types: they carry no bounds information, and negative coordinates
/// are legal (shape offsets before normalization routinely go
/// negative).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row component.
    pub x: i32,
    /// Column component.
    pub y: i32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a point from row and column components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::new(2, 3);
        let b = Point::new(-1, 5);
        assert_eq!(a + b, Point::new(1, 8));
        assert_eq!(a - b, Point::new(3, -2));
        assert_eq!(-a, Point::new(-2, -3));
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let mut p = Point::new(4, 4);
        p += Point::new(1, -1);
        assert_eq!(p, Point::new(5, 3));
        p -= Point::new(5, 3);
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn ordering_is_lexicographic_row_then_column() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
    }
}
