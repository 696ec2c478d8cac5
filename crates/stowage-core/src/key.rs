//! Opaque item identifiers.

use std::fmt;

/// Identifies one item within the hosting container.
///
/// Keys are allocated and owned by the external container; the grid
/// engine only borrows them to label placements. Two placements with
/// the same key never coexist in one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemKey {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
