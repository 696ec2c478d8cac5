//! The container-event collaborator boundary.

use crate::authority::Authority;
use crate::engine::GridEngine;
use crate::error::GridError;
use crate::source::ShapeSource;
use stowage_core::{ItemKey, Point};

/// How a hosting container drives the engine around its own item
/// lifecycle events.
///
/// The container asks [`allows_addition`](Self::allows_addition)
/// before accepting an item (the answer must be computed without side
/// effects), commits the spatial placement in
/// [`post_addition`](Self::post_addition) once the item is in, and
/// tears the placement down in [`post_removal`](Self::post_removal)
/// after the item leaves. These hooks run on the authoritative side
/// only; replicated peers observe the placement table instead.
pub trait ContainerHooks {
    /// Answer a pre-addition query: can this item be placed somewhere?
    fn allows_addition(&self, key: ItemKey, source: &dyn ShapeSource) -> bool;

    /// Commit the placement for an item the container just accepted.
    /// Returns the origin the item was placed at.
    fn post_addition(
        &mut self,
        key: ItemKey,
        source: &dyn ShapeSource,
    ) -> Result<Point, GridError>;

    /// Tear down the placement for an item the container removed.
    fn post_removal(&mut self, key: ItemKey) -> Result<(), GridError>;
}

impl ContainerHooks for GridEngine {
    fn allows_addition(&self, key: ItemKey, source: &dyn ShapeSource) -> bool {
        self.can_add_item(key, source)
    }

    fn post_addition(
        &mut self,
        key: ItemKey,
        source: &dyn ShapeSource,
    ) -> Result<Point, GridError> {
        self.add_item(key, source, None, Authority::Authoritative)
    }

    fn post_removal(&mut self, key: ItemKey) -> Result<(), GridError> {
        self.remove_item(key, Authority::Authoritative)
    }
}
