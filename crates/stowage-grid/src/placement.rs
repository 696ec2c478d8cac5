//! Placement records: where one item sits on the grid.

use std::cmp::Ordering;
use stowage_core::{GridShape, ItemKey, Point, Rotation};

/// The recorded position and orientation of one item.
///
/// `shape` is stored already rotated into its current orientation and
/// normalized, so rasterizing a placement is a plain translation by
/// `origin`. `pivot` records the rotation anchor: rotating a shape
/// changes its bounding box, so a stable anchor must be carried across
/// rotations rather than recomputed.
#[derive(Clone, Debug)]
pub struct Placement {
    /// The grid cell the shape's normalized local origin maps to.
    pub origin: Point,
    /// The rotation anchor preserved across rotations.
    pub pivot: Point,
    /// The item's footprint, rotated and normalized.
    pub shape: GridShape,
    /// The rotation currently applied to `shape`.
    pub rotation: Rotation,
}

impl Placement {
    /// A placement at `origin` with no rotation and pivot at the origin.
    pub fn new(origin: Point, shape: GridShape) -> Self {
        Self {
            origin,
            pivot: origin,
            shape: shape.normalized(),
            rotation: Rotation::None,
        }
    }

    /// The grid cells this placement covers: the shape translated by
    /// `origin`.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let origin = self.origin;
        self.shape.iter().map(move |p| p + origin)
    }

    /// Whether this placement covers the grid cell `p`.
    pub fn covers(&self, p: Point) -> bool {
        self.shape.contains(p - self.origin)
    }
}

/// Placements compare equal on `(origin, rotation)` alone.
///
/// Two different shapes parked at the same origin and rotation are the
/// same placement for ordering and deduplication purposes; shape and
/// pivot are payload, not identity.
impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.rotation == other.rotation
    }
}

/// Table ordering: lexicographic on `origin.x`, then `origin.y`.
///
/// Deliberately a free function rather than an `Ord` impl: an `Ord`
/// that ignores rotation would disagree with the `(origin, rotation)`
/// equality above, which std collections are allowed to exploit.
pub fn origin_cmp(a: &Placement, b: &Placement) -> Ordering {
    (a.origin.x, a.origin.y).cmp(&(b.origin.x, b.origin.y))
}

/// One row of the placement table: a key bound to its placement.
#[derive(Clone, Debug)]
pub struct PlacementEntry {
    /// The container-supplied item identifier.
    pub key: ItemKey,
    /// Where the item currently sits.
    pub placement: Placement,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement_at(x: i32, y: i32) -> Placement {
        Placement::new(Point::new(x, y), GridShape::rect(1, 1))
    }

    #[test]
    fn equality_ignores_shape_and_pivot() {
        let mut a = Placement::new(Point::new(2, 3), GridShape::rect(2, 2));
        let b = Placement::new(Point::new(2, 3), GridShape::rect(1, 4));
        assert_eq!(a, b);
        a.rotation = Rotation::Ninety;
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_row_then_column() {
        let a = placement_at(0, 9);
        let b = placement_at(1, 0);
        let c = placement_at(1, 2);
        assert_eq!(origin_cmp(&a, &b), Ordering::Less);
        assert_eq!(origin_cmp(&b, &c), Ordering::Less);
        assert_eq!(origin_cmp(&c, &c), Ordering::Equal);
    }

    #[test]
    fn cells_translate_shape_by_origin() {
        let p = Placement::new(Point::new(4, 5), GridShape::rect(1, 2));
        let cells: Vec<Point> = p.cells().collect();
        assert_eq!(cells, vec![Point::new(4, 5), Point::new(4, 6)]);
        assert!(p.covers(Point::new(4, 6)));
        assert!(!p.covers(Point::new(5, 5)));
    }

    #[test]
    fn new_normalizes_the_shape() {
        let raw: GridShape = [Point::new(3, 3), Point::new(3, 4)].into_iter().collect();
        let p = Placement::new(Point::new(0, 0), raw);
        assert!(p.covers(Point::new(0, 0)));
        assert!(p.covers(Point::new(0, 1)));
    }
}
