//! The shape-source collaborator boundary.

use stowage_core::{GridShape, ItemKey};

/// Supplies the base (unrotated, unpositioned) footprint for an item.
///
/// Implemented by the hosting container's item data layer — the engine
/// treats it as a pure function and implies no caching. `None` means
/// the container knows no shape for the key; the engine reports that
/// as a not-found error at add time.
pub trait ShapeSource {
    /// The base shape for `key`, if the item exists.
    fn base_shape(&self, key: ItemKey) -> Option<GridShape>;
}

/// Every item is a solid `height × width` rectangle.
///
/// The simplest useful source; handy in tests and for containers whose
/// items are all uniform blocks.
#[derive(Clone, Copy, Debug)]
pub struct UniformRects {
    /// Rectangle height in cells.
    pub height: u32,
    /// Rectangle width in cells.
    pub width: u32,
}

impl ShapeSource for UniformRects {
    fn base_shape(&self, _key: ItemKey) -> Option<GridShape> {
        Some(GridShape::rect(self.height, self.width))
    }
}

impl<F> ShapeSource for F
where
    F: Fn(ItemKey) -> Option<GridShape>,
{
    fn base_shape(&self, key: ItemKey) -> Option<GridShape> {
        self(key)
    }
}
