//! Authority gating for mutating operations.

/// Whether the caller is the designated authority for this grid.
///
/// In a networked setting only the server role mutates placement
/// state; remote peers observe through the replicated placement table.
/// The engine models that as an explicit capability value passed to
/// every mutating operation — there is no ambient runtime check.
/// Non-authoritative calls are rejected before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    /// The single writer; mutations are permitted.
    Authoritative,
    /// A replicated observer; mutations are rejected.
    Remote,
}

impl Authority {
    /// Whether this value permits mutation.
    pub fn is_authoritative(self) -> bool {
        matches!(self, Authority::Authoritative)
    }
}
