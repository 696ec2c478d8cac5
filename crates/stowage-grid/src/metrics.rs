//! Cumulative operation counters.

/// Counters accumulated over the lifetime of one engine instance.
///
/// Consumers (telemetry, debugging overlays) read them between
/// operations; the engine only ever increments.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineMetrics {
    /// Items successfully added to the grid.
    pub adds: u64,
    /// Items removed from the grid (including resize evictions).
    pub removes: u64,
    /// Successful single-item moves.
    pub moves: u64,
    /// Successful two-item swaps.
    pub swaps: u64,
    /// Successful rotations.
    pub rotations: u64,
    /// Grid resizes applied.
    pub resizes: u64,
    /// Operations rejected by validation (any error outcome).
    pub rejections: u64,
}
