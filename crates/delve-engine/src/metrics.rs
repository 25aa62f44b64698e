//! Metrics for one [`Dungeon::apply`](crate::Dungeon::apply) call.

/// Timing and size data collected while applying a pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyMetrics {
    /// Wall-clock time for the whole pipeline, in microseconds.
    pub total_us: u64,
    /// Number of steps run.
    pub steps: usize,
    /// Explicit cells on the grid before the run.
    pub cells_before: usize,
    /// Explicit cells on the grid after the run.
    pub cells_after: usize,
    /// Recoverable diagnostics raised by the steps, in order.
    pub warnings: Vec<String>,
}
