//! The spatial grid engine: placement validation and mutation.
//!
//! [`GridEngine`] owns the three structures that must stay mutually
//! consistent — the [`PlacementTable`], the [`OccupancyIndex`], and the
//! grid dimensions — and exposes the only operations allowed to mutate
//! them. Every mutator is check-then-commit: validation happens before
//! any structural change, and the two operations that need a tentative
//! change (rotate, swap) restore prior occupancy exactly before
//! returning failure.

use crate::authority::Authority;
use crate::config::GridConfig;
use crate::dims::GridDims;
use crate::error::GridError;
use crate::events::{EventBus, GridEvent};
use crate::metrics::EngineMetrics;
use crate::occupancy::OccupancyIndex;
use crate::placement::{Placement, PlacementEntry};
use crate::source::ShapeSource;
use crate::table::PlacementTable;
use crossbeam_channel::Receiver;
use stowage_core::{GridShape, ItemKey, Point, Rotation};

/// One container's spatial state: a bounded grid of keyed placements.
///
/// Single-owner, single-threaded mutation: all state changes flow
/// through `&mut self` methods invoked serially by the authoritative
/// actor, so exclusion between readers and the writer is enforced at
/// compile time. Change notifications are delivered synchronously,
/// before the triggering operation returns, at a moment when the
/// placement table and occupancy index agree.
#[derive(Debug)]
pub struct GridEngine {
    dims: GridDims,
    table: PlacementTable,
    occupancy: OccupancyIndex,
    events: EventBus,
    metrics: EngineMetrics,
}

impl GridEngine {
    /// Create an empty engine from configuration.
    pub fn new(config: GridConfig) -> Self {
        Self {
            dims: config.size,
            table: PlacementTable::new(),
            occupancy: OccupancyIndex::new(config.size),
            events: EventBus::new(),
            metrics: EngineMetrics::default(),
        }
    }

    /// Create an empty engine with the given dimensions.
    pub fn with_dims(dims: GridDims) -> Self {
        Self::new(GridConfig::with_size(dims))
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Current grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of items placed on the grid.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the grid holds no items.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of cells currently marked occupied.
    pub fn occupied_cell_count(&self) -> usize {
        self.occupancy.occupied_count()
    }

    /// Whether the cell at `p` is covered by some placement.
    pub fn is_occupied(&self, p: Point) -> bool {
        self.occupancy.is_occupied(p)
    }

    /// The placement recorded for `key`, if any.
    pub fn placement(&self, key: ItemKey) -> Option<&Placement> {
        self.table.find_by_key(key)
    }

    /// The current (rotated, normalized) shape of `key`, if placed.
    pub fn entry_shape(&self, key: ItemKey) -> Option<&GridShape> {
        self.table.find_by_key(key).map(|p| &p.shape)
    }

    /// Ordered view of all placements — the canonical representation
    /// a replication layer consumes as its source of truth.
    pub fn entries(&self) -> &[PlacementEntry] {
        &self.table.entries()[..]
    }

    /// Cumulative operation counters.
    pub fn metrics(&self) -> EngineMetrics {
        self.metrics
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&mut self) -> Receiver<GridEvent> {
        self.events.subscribe()
    }

    // ── Fit testing ─────────────────────────────────────────────

    /// Whether `shape`, rotated by `rotation` and placed at `position`,
    /// stays in bounds and collides with no entry outside `excluded`.
    pub fn fits_in_grid(
        &self,
        shape: &GridShape,
        position: Point,
        rotation: Rotation,
        excluded: &[ItemKey],
    ) -> bool {
        self.placement_error(&shape.rotated(rotation), position, excluded)
            .is_ok()
    }

    /// Fit test over an already-rotated shape, distinguishing the
    /// bounds failure from the collision failure.
    ///
    /// The bitmap alone cannot say which key owns an occupied cell, so
    /// when exclusions are in play the placement table attributes the
    /// cell; an occupied cell no entry claims is treated as a
    /// collision.
    fn placement_error(
        &self,
        rotated: &GridShape,
        position: Point,
        excluded: &[ItemKey],
    ) -> Result<(), GridError> {
        for p in rotated.iter() {
            let cell = p + position;
            if !self.dims.contains(cell) {
                return Err(GridError::OutOfBounds { point: cell });
            }
            if !self.occupancy.is_occupied(cell) {
                continue;
            }
            if excluded.is_empty() {
                return Err(GridError::Collision { point: cell });
            }
            match self.table.owner_of(cell) {
                Some(owner) if excluded.contains(&owner) => {}
                _ => return Err(GridError::Collision { point: cell }),
            }
        }
        Ok(())
    }

    /// First position, scanning cells in row-major order, where the
    /// unrotated `shape` fits with no exclusions.
    ///
    /// O(width · height · |shape|) worst case; grids are small and
    /// this runs only when an item arrives without a suggested
    /// position.
    pub fn first_empty_location(&self, shape: &GridShape) -> Option<Point> {
        self.dims
            .cells()
            .find(|&pos| self.placement_error(shape, pos, &[]).is_ok())
    }

    /// Side-effect-free pre-addition answer: could `key` be placed
    /// anywhere on the grid right now?
    pub fn can_add_item(&self, key: ItemKey, source: &dyn ShapeSource) -> bool {
        match source.base_shape(key) {
            Some(shape) => self.first_empty_location(&shape.normalized()).is_some(),
            None => false,
        }
    }

    /// Side-effect-free pre-addition answer for a specific position.
    pub fn can_add_item_at(&self, key: ItemKey, source: &dyn ShapeSource, position: Point) -> bool {
        match source.base_shape(key) {
            Some(shape) => self
                .placement_error(&shape.normalized(), position, &[])
                .is_ok(),
            None => false,
        }
    }

    // ── Mutations ───────────────────────────────────────────────

    fn require_authority(&mut self, auth: Authority) -> Result<(), GridError> {
        if auth.is_authoritative() {
            Ok(())
        } else {
            Err(self.reject(GridError::Unauthorized))
        }
    }

    fn reject(&mut self, err: GridError) -> GridError {
        self.metrics.rejections += 1;
        err
    }

    /// Place an item on the grid.
    ///
    /// The base shape comes from the container's [`ShapeSource`]. With
    /// no explicit `position` the engine scans for the first empty
    /// location. On success the item is inserted unrotated, its pivot
    /// at its origin, its cells marked occupied, and an added event
    /// emitted; the chosen origin is returned.
    ///
    /// Re-adding a key that is already placed replaces the old
    /// placement (the old cells are vacated first and both the removal
    /// and the addition are announced).
    pub fn add_item(
        &mut self,
        key: ItemKey,
        source: &dyn ShapeSource,
        position: Option<Point>,
        auth: Authority,
    ) -> Result<Point, GridError> {
        self.require_authority(auth)?;
        let shape = match source.base_shape(key) {
            Some(s) => s.normalized(),
            None => return Err(self.reject(GridError::NotFound { key })),
        };

        let origin = match position {
            Some(p) => p,
            None => match self.first_empty_location(&shape) {
                Some(p) => p,
                None => return Err(self.reject(GridError::NoSpaceAvailable)),
            },
        };
        // Excluding the key itself makes replacement validation see
        // through the item's own current cells.
        self.placement_error(&shape, origin, &[key])
            .map_err(|e| self.reject(e))?;

        if let Some(old) = self.table.find_by_key(key).cloned() {
            self.occupancy.set_all(old.cells(), false);
        }
        let placement = Placement::new(origin, shape);
        self.occupancy.set_all(placement.cells(), true);
        self.table.insert(key, placement, &mut self.events);
        self.metrics.adds += 1;
        Ok(origin)
    }

    /// Remove an item from the grid.
    ///
    /// Absent keys are a no-op. The removal notification fires while
    /// the entry and its occupancy are still intact; the cells are
    /// vacated from the entry's recorded shape data.
    pub fn remove_item(&mut self, key: ItemKey, auth: Authority) -> Result<(), GridError> {
        self.require_authority(auth)?;
        let Some(placement) = self.table.remove(key, &mut self.events) else {
            return Ok(());
        };
        self.occupancy.set_all(placement.cells(), false);
        self.metrics.removes += 1;
        Ok(())
    }

    /// Rotate an item one quarter turn clockwise in place.
    ///
    /// The candidate footprint is the stored shape rotated a further
    /// 90° and re-normalized, which equals the base shape at the next
    /// rotation. The item's own cells are ignored during the fit test;
    /// if the candidate does not fit at the current origin, occupancy
    /// is restored exactly and the rotation is reported blocked. The
    /// pivot is preserved across rotations.
    pub fn rotate_item(&mut self, key: ItemKey, auth: Authority) -> Result<(), GridError> {
        self.require_authority(auth)?;
        let Some(current) = self.table.find_by_key(key).cloned() else {
            return Err(self.reject(GridError::NotFound { key }));
        };
        let next = current.rotation.next();
        let candidate = current.shape.rotated(Rotation::Ninety);

        self.occupancy.set_all(current.cells(), false);
        if let Err(_blocked) = self.placement_error(&candidate, current.origin, &[key]) {
            self.occupancy.set_all(current.cells(), true);
            return Err(self.reject(GridError::RotationBlocked { key }));
        }

        let origin = current.origin;
        self.occupancy
            .set_all(candidate.iter().map(|p| p + origin), true);
        self.table.update(
            key,
            |p| {
                p.shape = candidate;
                p.rotation = next;
            },
            &mut self.events,
        );
        self.metrics.rotations += 1;
        Ok(())
    }

    /// Move an item, swapping with a single item it lands on.
    ///
    /// `source_point` must be a cell the item currently covers; stale
    /// client-supplied coordinates are rejected as not-found. The move
    /// offset is `target_point − source_point`. Landing on empty space
    /// translates the item; landing on exactly one other item attempts
    /// an atomic position swap; landing on several items is refused as
    /// ambiguous.
    pub fn move_item(
        &mut self,
        key: ItemKey,
        source_point: Point,
        target_point: Point,
        auth: Authority,
    ) -> Result<(), GridError> {
        self.require_authority(auth)?;
        let Some(moving) = self.table.find_by_key(key).cloned() else {
            return Err(self.reject(GridError::NotFound { key }));
        };
        if !moving.covers(source_point) {
            return Err(self.reject(GridError::NotFound { key }));
        }
        let offset = target_point - source_point;

        let overlapping = self.find_overlapping_items(&moving, offset, key);
        match overlapping.as_slice() {
            [] => self.move_single_item(key, &moving, offset),
            [other] => self.try_swap_items(key, &moving, *other, offset),
            many => {
                let count = many.len();
                Err(self.reject(GridError::AmbiguousTarget { count }))
            }
        }
    }

    /// Keys of every other entry whose placement overlaps the moving
    /// item's cells translated by `offset`.
    fn find_overlapping_items(
        &self,
        moving: &Placement,
        offset: Point,
        exclude: ItemKey,
    ) -> Vec<ItemKey> {
        self.table
            .entries()
            .iter()
            .filter(|e| e.key != exclude)
            .filter(|e| moving.cells().any(|c| e.placement.covers(c + offset)))
            .map(|e| e.key)
            .collect()
    }

    /// Translate one item into empty space.
    fn move_single_item(
        &mut self,
        key: ItemKey,
        moving: &Placement,
        offset: Point,
    ) -> Result<(), GridError> {
        self.placement_error(&moving.shape, moving.origin + offset, &[key])
            .map_err(|e| self.reject(e))?;
        self.occupancy.set_all(moving.cells(), false);
        self.occupancy
            .set_all(moving.cells().map(|c| c + offset), true);
        self.table.update(
            key,
            |p| {
                p.origin += offset;
                p.pivot += offset;
            },
            &mut self.events,
        );
        self.metrics.moves += 1;
        Ok(())
    }

    /// Exchange two items' positions atomically.
    ///
    /// The mover lands at `+offset`, the displaced item at `−offset`
    /// (the space the mover vacated). Both candidate placements are
    /// validated against third parties with both items' old cells
    /// vacated, and the two candidates are checked against each other
    /// directly. Either both placements commit or occupancy is
    /// restored exactly.
    fn try_swap_items(
        &mut self,
        moving_key: ItemKey,
        moving: &Placement,
        other_key: ItemKey,
        offset: Point,
    ) -> Result<(), GridError> {
        let Some(other) = self.table.find_by_key(other_key).cloned() else {
            return Err(self.reject(GridError::NotFound { key: other_key }));
        };
        let excluded = [moving_key, other_key];
        let moving_target = moving.origin + offset;
        let other_target = other.origin - offset;

        self.occupancy.set_all(moving.cells(), false);
        self.occupancy.set_all(other.cells(), false);

        if self
            .placement_error(&moving.shape, moving_target, &excluded)
            .is_err()
        {
            self.occupancy.set_all(moving.cells(), true);
            self.occupancy.set_all(other.cells(), true);
            return Err(self.reject(GridError::SwapBlocked));
        }
        let moving_new: Vec<Point> = moving.shape.iter().map(|p| p + moving_target).collect();
        let other_new: Vec<Point> = other.shape.iter().map(|p| p + other_target).collect();
        self.occupancy.set_all(moving_new.iter().copied(), true);

        // Owner attribution cannot police the mover's tentative cells:
        // its table entry still records the old origin, which may also
        // cover them when the footprints overlap. The two candidates
        // are checked against each other directly.
        let candidates_collide = other_new.iter().any(|c| moving_new.contains(c));
        if candidates_collide
            || self
                .placement_error(&other.shape, other_target, &excluded)
                .is_err()
        {
            self.occupancy.set_all(moving_new.iter().copied(), false);
            self.occupancy.set_all(moving.cells(), true);
            self.occupancy.set_all(other.cells(), true);
            return Err(self.reject(GridError::SwapBlocked));
        }

        self.occupancy.set_all(other_new.iter().copied(), true);
        self.table.update(
            moving_key,
            |p| {
                p.origin += offset;
                p.pivot += offset;
            },
            &mut self.events,
        );
        self.table.update(
            other_key,
            |p| {
                p.origin -= offset;
                p.pivot -= offset;
            },
            &mut self.events,
        );
        self.metrics.swaps += 1;
        Ok(())
    }

    /// Resize the grid.
    ///
    /// Entries whose cells no longer fit inside the new bounds are
    /// evicted with removal notifications (the occupancy invariant —
    /// the bitmap is always derivable from in-bounds placements —
    /// rules out keeping them). The bitmap is then reallocated to
    /// exactly the new cell count and every surviving entry
    /// re-rasterized, and a resize event is emitted.
    pub fn set_grid_size(&mut self, new_dims: GridDims, auth: Authority) -> Result<(), GridError> {
        self.require_authority(auth)?;
        if new_dims == self.dims {
            return Ok(());
        }

        let evicted: Vec<ItemKey> = self
            .table
            .entries()
            .iter()
            .filter(|e| e.placement.cells().any(|c| !new_dims.contains(c)))
            .map(|e| e.key)
            .collect();
        for key in evicted {
            self.table.remove(key, &mut self.events);
            self.metrics.removes += 1;
        }

        self.dims = new_dims;
        self.occupancy.resize(new_dims);
        for entry in self.table.entries() {
            self.occupancy.set_all(entry.placement.cells(), true);
        }
        self.events.emit(GridEvent::Resized(new_dims));
        self.metrics.resizes += 1;
        Ok(())
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
