//! Stowage: a 2D spatial inventory engine.
//!
//! Stowage places variably-shaped, rotatable items onto a bounded
//! grid, keeps a per-cell occupancy index for collision queries, and
//! maintains a keyed collection of placements that can be added,
//! moved, rotated, swapped, and removed while preserving non-overlap
//! and in-bounds invariants at all times.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Stowage sub-crates. For most users, adding `stowage` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! // A 10×10 grid; every item is a 2×2 block.
//! let mut engine = GridEngine::with_dims(GridDims::new(10, 10).unwrap());
//! let blocks = UniformRects { height: 2, width: 2 };
//!
//! let at = engine
//!     .add_item(ItemKey(1), &blocks, None, Authority::Authoritative)
//!     .unwrap();
//! assert_eq!(at, Point::new(0, 0));
//!
//! engine
//!     .move_item(ItemKey(1), at, Point::new(4, 4), Authority::Authoritative)
//!     .unwrap();
//! assert_eq!(
//!     engine.placement(ItemKey(1)).unwrap().origin,
//!     Point::new(4, 4)
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stowage-core` | Points, rotations, shapes, item keys |
//! | [`grid`] | `stowage-grid` | Dimensions, occupancy, placement table, engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry primitives (`stowage-core`).
///
/// [`types::Point`], [`types::Rotation`], [`types::GridShape`], and
/// [`types::ItemKey`] are the vocabulary every other crate speaks.
pub use stowage_core as types;

/// The placement engine (`stowage-grid`).
///
/// [`grid::GridEngine`] plus its supporting structures: dimensions and
/// raveling, the occupancy bitmap, the keyed placement table, events,
/// and the collaborator traits.
pub use stowage_grid as grid;

/// Common imports for typical Stowage usage.
///
/// ```rust
/// use stowage::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use stowage_core::{GridShape, ItemKey, Point, Rotation};

    // Engine and supporting types
    pub use stowage_grid::{
        Authority, ContainerHooks, EngineMetrics, EntryEventKind, GridConfig, GridDims,
        GridEngine, GridEvent, Placement, PlacementEntry, ShapeSource, UniformRects,
    };

    // Errors
    pub use stowage_grid::GridError;
}
