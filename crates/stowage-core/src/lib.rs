//! Core geometry types for the Stowage spatial inventory engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the building blocks every other Stowage crate works in terms of:
//! integer grid coordinates ([`Point`]), quarter-turn rotations
//! ([`Rotation`]), item footprints ([`GridShape`]), and the opaque
//! [`ItemKey`] identifier supplied by the hosting container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod key;
pub mod point;
pub mod rotation;
pub mod shape;

pub use key::ItemKey;
pub use point::Point;
pub use rotation::Rotation;
pub use shape::GridShape;
