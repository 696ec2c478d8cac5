//! Item footprints: sets of integer cell offsets.

use crate::point::Point;
use crate::rotation::Rotation;
use smallvec::SmallVec;
use std::fmt;

/// The cells an item occupies, relative to its own local origin.
///
/// A shape is an ordered sequence of [`Point`]s. Insertion order is
/// irrelevant for placement correctness but kept deterministic so that
/// serialized or replicated shapes compare stably. Most inventory
/// footprints are small; the backing store is a `SmallVec` sized to
/// hold a 2×4 rectangle inline.
///
/// A shape is **normalized** when the minimum `x` and minimum `y` over
/// all its points are both zero. Normalization is idempotent, and the
/// empty shape (which occupies nothing) is trivially normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridShape {
    points: SmallVec<[Point; 8]>,
}

impl GridShape {
    /// The empty shape.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A solid rectangle covering all `(x, y)` with `0 <= x < height`
    /// and `0 <= y < width`.
    ///
    /// Total for every input: either dimension being zero yields the
    /// empty shape.
    pub fn rect(height: u32, width: u32) -> Self {
        let mut points = SmallVec::with_capacity((height as usize) * (width as usize));
        for x in 0..height as i32 {
            for y in 0..width as i32 {
                points.push(Point::new(x, y));
            }
        }
        Self { points }
    }

    /// Number of cells in the shape.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the shape occupies no cells.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of the shape, in storage order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points of the shape.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Whether the shape contains `p`. Linear scan; shapes are tiny.
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Minimum `(x, y)` over all points, or `None` for the empty shape.
    pub fn min_corner(&self) -> Option<Point> {
        let first = *self.points.first()?;
        let mut min = first;
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
        }
        Some(min)
    }

    /// Shift the shape so its bounding-box minimum sits at the origin.
    ///
    /// No-op on the empty shape. Idempotent.
    pub fn normalize(&mut self) {
        let Some(min) = self.min_corner() else {
            return;
        };
        for p in &mut self.points {
            *p -= min;
        }
    }

    /// Consuming variant of [`normalize`](Self::normalize).
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Normalize, then add `offset` to every point.
    ///
    /// The normalize-first order is deliberate and load-bearing: any
    /// prior translation is discarded, so `translate(a)` followed by
    /// `translate(b)` lands the shape at `b`, not `a + b`.
    pub fn translate(&mut self, offset: Point) {
        self.normalize();
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// A copy of the shape rotated by `rotation` and re-normalized.
    ///
    /// `Rotation::None` returns the shape unchanged (not normalized),
    /// so identity rotation never perturbs a caller-supplied shape.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        if rotation == Rotation::None {
            return self.clone();
        }
        let points = self.points.iter().map(|&p| rotation.apply(p)).collect();
        Self { points }.normalized()
    }

    /// Whether `self` and `other` cover the same cell set, ignoring
    /// point order and multiplicity.
    pub fn same_cells(&self, other: &GridShape) -> bool {
        let mut a: Vec<Point> = self.points.to_vec();
        let mut b: Vec<Point> = other.points.to_vec();
        a.sort();
        a.dedup();
        b.sort();
        b.dedup();
        a == b
    }
}

impl FromIterator<Point> for GridShape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shape_of(points: &[(i32, i32)]) -> GridShape {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn rect_enumerates_rows_then_columns() {
        let s = GridShape::rect(2, 3);
        assert_eq!(
            s.points(),
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn zero_dimension_rect_is_empty() {
        assert!(GridShape::rect(0, 5).is_empty());
        assert!(GridShape::rect(5, 0).is_empty());
    }

    // ── Normalization and translation ───────────────────────────

    #[test]
    fn normalize_moves_min_corner_to_origin() {
        let mut s = shape_of(&[(3, 4), (4, 4), (3, 5)]);
        s.normalize();
        assert!(s.same_cells(&shape_of(&[(0, 0), (1, 0), (0, 1)])));
    }

    #[test]
    fn normalize_handles_negative_coordinates() {
        let mut s = shape_of(&[(-2, -1), (-1, -1)]);
        s.normalize();
        assert!(s.same_cells(&shape_of(&[(0, 0), (1, 0)])));
    }

    #[test]
    fn translate_discards_prior_translation() {
        let mut s = GridShape::rect(1, 2);
        s.translate(Point::new(3, 3));
        s.translate(Point::new(1, 1));
        // Not (4, 4): the second translate re-normalizes first.
        assert!(s.same_cells(&shape_of(&[(1, 1), (1, 2)])));
    }

    #[test]
    fn translated_rect_scenario() {
        let mut s = GridShape::rect(2, 3);
        s.translate(Point::new(5, 5));
        assert!(s.same_cells(&shape_of(&[
            (5, 5),
            (5, 6),
            (5, 7),
            (6, 5),
            (6, 6),
            (6, 7)
        ])));
    }

    // ── Rotation ────────────────────────────────────────────────

    #[test]
    fn rotated_rect_swaps_extents() {
        let s = GridShape::rect(1, 3).rotated(Rotation::Ninety);
        assert!(s.same_cells(&GridShape::rect(3, 1)));
    }

    #[test]
    fn rotation_by_none_is_identity() {
        let s = shape_of(&[(2, 2), (2, 3)]);
        assert_eq!(s.rotated(Rotation::None), s);
    }

    #[test]
    fn rotated_l_shape() {
        // L tromino: two cells down, one to the right.
        let s = shape_of(&[(0, 0), (1, 0), (1, 1)]);
        let r = s.rotated(Rotation::Ninety);
        assert!(r.same_cells(&shape_of(&[(0, 0), (0, 1), (1, 0)])));
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_shape() -> impl Strategy<Value = GridShape> {
        prop::collection::vec((-20i32..20, -20i32..20), 0..12)
            .prop_map(|pts| pts.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in arb_shape()) {
            let once = s.clone().normalized();
            let twice = once.clone().normalized();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_shape_touches_both_axes(s in arb_shape()) {
            let n = s.normalized();
            if let Some(min) = n.min_corner() {
                prop_assert_eq!(min, Point::ZERO);
            }
        }

        #[test]
        fn four_quarter_rotations_restore_cells(s in arb_shape()) {
            let n = s.normalized();
            let mut r = n.clone();
            for _ in 0..4 {
                r = r.rotated(Rotation::Ninety);
            }
            prop_assert!(r.same_cells(&n));
        }

        #[test]
        fn rotation_preserves_cell_count(s in arb_shape()) {
            for rot in Rotation::ALL {
                prop_assert_eq!(s.rotated(rot).len(), s.len());
            }
        }
    }
}
