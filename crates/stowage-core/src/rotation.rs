//! Quarter-turn rotations.

use crate::point::Point;
use std::fmt;

/// One of the four discrete orientations an item can take on the grid.
///
/// Rotations form a cyclic group of order four: [`next`](Rotation::next)
/// advances by a quarter turn (wrapping `TwoSeventy` back to `None`),
/// and [`compose`](Rotation::compose) adds two rotations together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation applied.
    #[default]
    None,
    /// Rotated 90 degrees.
    Ninety,
    /// Rotated 180 degrees.
    OneEighty,
    /// Rotated 270 degrees.
    TwoSeventy,
}

impl Rotation {
    /// All rotations in composition order.
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Ninety,
        Rotation::OneEighty,
        Rotation::TwoSeventy,
    ];

    /// Number of quarter turns this rotation represents (0..=3).
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::None => 0,
            Rotation::Ninety => 1,
            Rotation::OneEighty => 2,
            Rotation::TwoSeventy => 3,
        }
    }

    const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::None,
            1 => Rotation::Ninety,
            2 => Rotation::OneEighty,
            _ => Rotation::TwoSeventy,
        }
    }

    /// The next rotation clockwise: one additional quarter turn,
    /// wrapping `TwoSeventy` to `None`.
    pub const fn next(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Combine two rotations. `a.compose(b)` rotates by `a` then `b`.
    pub const fn compose(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// Rotate a point about the origin.
    ///
    /// A single quarter turn maps `(x, y)` to `(y, -x)`. Callers that
    /// need rotated shapes back in non-negative coordinates normalize
    /// afterward; see [`GridShape::rotated`](crate::GridShape::rotated).
    pub const fn apply(self, p: Point) -> Point {
        match self {
            Rotation::None => p,
            Rotation::Ninety => Point::new(p.y, -p.x),
            Rotation::OneEighty => Point::new(-p.x, -p.y),
            Rotation::TwoSeventy => Point::new(-p.y, p.x),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deg = self.quarter_turns() as u32 * 90;
        write!(f, "{deg}°")
    }
}
