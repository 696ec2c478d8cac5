//! End-to-end placement scenarios exercised through the public API.

use stowage_core::{GridShape, ItemKey, Point, Rotation};
use stowage_grid::{Authority, GridDims, GridEngine, UniformRects};

const AUTH: Authority = Authority::Authoritative;

fn engine(width: u32, height: u32) -> GridEngine {
    GridEngine::with_dims(GridDims::new(width, height).unwrap())
}

#[test]
fn translated_rect_covers_expected_cells() {
    let mut shape = GridShape::rect(2, 3);
    shape.translate(Point::new(5, 5));
    let expected: GridShape = [(5, 5), (5, 6), (5, 7), (6, 5), (6, 6), (6, 7)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect();
    assert!(shape.same_cells(&expected));
}

#[test]
fn occupied_cell_fails_fit_test_neighbour_passes() {
    let mut e = engine(10, 10);
    let unit = UniformRects {
        height: 1,
        width: 1,
    };
    e.add_item(ItemKey(1), &unit, Some(Point::new(0, 0)), AUTH)
        .unwrap();
    let probe = GridShape::rect(1, 1);
    assert!(!e.fits_in_grid(&probe, Point::new(0, 0), Rotation::None, &[]));
    assert!(e.fits_in_grid(&probe, Point::new(0, 1), Rotation::None, &[]));
}

#[test]
fn rotating_a_two_by_two_in_open_space_succeeds() {
    let mut e = engine(10, 10);
    let square = UniformRects {
        height: 2,
        width: 2,
    };
    e.add_item(ItemKey(1), &square, Some(Point::new(0, 0)), AUTH)
        .unwrap();
    e.rotate_item(ItemKey(1), AUTH).unwrap();
    let p = e.placement(ItemKey(1)).unwrap();
    assert_eq!(p.rotation, Rotation::Ninety);
    assert!(p
        .shape
        .same_cells(&GridShape::rect(2, 2).rotated(Rotation::Ninety)));
}

#[test]
fn moving_onto_the_only_occupant_swaps_the_two_items() {
    let mut e = engine(10, 10);
    let unit = UniformRects {
        height: 1,
        width: 1,
    };
    e.add_item(ItemKey(1), &unit, Some(Point::new(0, 0)), AUTH)
        .unwrap();
    e.add_item(ItemKey(2), &unit, Some(Point::new(3, 3)), AUTH)
        .unwrap();
    e.move_item(ItemKey(1), Point::new(0, 0), Point::new(3, 3), AUTH)
        .unwrap();
    assert_eq!(e.placement(ItemKey(1)).unwrap().origin, Point::new(3, 3));
    assert_eq!(e.placement(ItemKey(2)).unwrap().origin, Point::new(0, 0));
}

#[test]
fn shrinking_the_grid_never_corrupts_the_bitmap() {
    let mut e = engine(10, 10);
    let unit = UniformRects {
        height: 1,
        width: 1,
    };
    e.add_item(ItemKey(1), &unit, Some(Point::new(1, 1)), AUTH)
        .unwrap();
    e.add_item(ItemKey(2), &unit, Some(Point::new(9, 9)), AUTH)
        .unwrap();
    e.set_grid_size(GridDims::new(5, 5).unwrap(), AUTH).unwrap();

    // Exactly 25 cells, and every set flag re-derivable from the
    // surviving placements.
    assert_eq!(e.dims().cell_count(), 25);
    assert_eq!(e.occupied_cell_count(), 1);
    assert!(e.placement(ItemKey(2)).is_none());
    for cell in e.dims().cells() {
        let covered = e.entries().iter().any(|en| en.placement.covers(cell));
        assert_eq!(e.is_occupied(cell), covered);
    }
}
