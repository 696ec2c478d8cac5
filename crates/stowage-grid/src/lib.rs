//! Spatial placement engine for grid inventories.
//!
//! This crate holds the moving parts of Stowage: the coordinate ⇄
//! index mapping ([`GridDims`]), the per-cell [`OccupancyIndex`], the
//! keyed [`PlacementTable`], and the [`GridEngine`] that keeps all
//! three mutually consistent under add / move / rotate / swap / remove.
//!
//! # Invariants
//!
//! - A bitmap flag is set iff some placement's shape, translated by
//!   its origin, covers that cell — the index is always derivable by
//!   re-rasterizing the table, and is kept incrementally consistent
//!   rather than rebuilt per query.
//! - Distinct placements never overlap, at every point observable
//!   between operations.
//! - Failed operations leave the engine byte-for-byte unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod authority;
pub mod config;
pub mod dims;
pub mod engine;
pub mod error;
pub mod events;
pub mod extension;
pub mod metrics;
pub mod occupancy;
pub mod placement;
pub mod source;
pub mod table;

pub use authority::Authority;
pub use config::GridConfig;
pub use dims::GridDims;
pub use engine::GridEngine;
pub use error::GridError;
pub use events::{EntryEventKind, EventBus, GridEvent};
pub use extension::ContainerHooks;
pub use metrics::EngineMetrics;
pub use occupancy::OccupancyIndex;
pub use placement::{origin_cmp, Placement, PlacementEntry};
pub use source::{ShapeSource, UniformRects};
pub use table::{PlacementTable, TableHooks};
