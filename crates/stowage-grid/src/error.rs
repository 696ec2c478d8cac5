//! Error types for grid construction and placement operations.

use std::error::Error;
use std::fmt;
use stowage_core::{ItemKey, Point};

/// Errors arising from grid construction or placement operations.
///
/// Every variant is a local, recoverable validation failure: mutating
/// operations check before committing, so a returned error means the
/// engine's state is exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A cell of the candidate placement lies outside the grid.
    OutOfBounds {
        /// The first offending cell.
        point: Point,
    },
    /// A cell of the candidate placement is already occupied by a
    /// non-excluded item.
    Collision {
        /// The first contested cell.
        point: Point,
    },
    /// No entry exists for the given key, or the caller-supplied
    /// coordinates do not match the recorded placement.
    NotFound {
        /// The key that failed to resolve.
        key: ItemKey,
    },
    /// No position on the grid can hold the shape.
    NoSpaceAvailable,
    /// The next rotation's footprint does not fit at the item's origin.
    RotationBlocked {
        /// The item that could not be rotated.
        key: ItemKey,
    },
    /// A move landed on more than one existing item; the engine will
    /// not displace multiple items in one move.
    AmbiguousTarget {
        /// How many items the move overlapped.
        count: usize,
    },
    /// A two-item swap was blocked by a third item or by the grid edge.
    SwapBlocked,
    /// The caller lacks authority for a mutating operation.
    Unauthorized,
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A grid dimension exceeds the representable coordinate range.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point } => write!(f, "cell {point} is outside the grid"),
            Self::Collision { point } => write!(f, "cell {point} is already occupied"),
            Self::NotFound { key } => write!(f, "no placement for item {key}"),
            Self::NoSpaceAvailable => write!(f, "no free position fits the shape"),
            Self::RotationBlocked { key } => {
                write!(f, "rotation of item {key} is blocked")
            }
            Self::AmbiguousTarget { count } => {
                write!(f, "move overlaps {count} items; at most one can be displaced")
            }
            Self::SwapBlocked => write!(f, "swap blocked by a third item or the grid edge"),
            Self::Unauthorized => write!(f, "operation requires grid authority"),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}
