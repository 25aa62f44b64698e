//! Reusable step fixtures.
//!
//! - [`FillStep`] writes one named tile over the whole grid.
//! - [`FailingStep`] fails deterministically after N calls.
//! - [`CountingModifier`] records how many rooms it was handed.

use delve_core::{Coordinate, Grid, Room, Tile};
use delve_step::{RoomModifier, Step, StepContext, StepError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Writes a named tile into every cell.
pub struct FillStep {
    pub tile: String,
}

impl FillStep {
    pub fn new(tile: impl Into<String>) -> Self {
        Self { tile: tile.into() }
    }
}

impl Step for FillStep {
    fn name(&self) -> &str {
        "FillStep"
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.tile.as_str()]
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let tile = ctx.tile(&self.tile)?;
        let dim = grid.dimension();
        for y in 0..dim.h {
            for x in 0..dim.w {
                grid.set(Coordinate::new(x, y), tile.clone())?;
            }
        }
        Ok(grid)
    }
}

/// Fails deterministically after a configurable number of successful calls.
///
/// Uses `AtomicUsize` for the call counter so it satisfies `Send`.
pub struct FailingStep {
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingStep {
    /// Create a step that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `process()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Step for FailingStep {
    fn name(&self) -> &str {
        "FailingStep"
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(StepError::Failed {
                step: self.name().to_string(),
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        // Leave a trace so callers can see partial work was discarded.
        grid.set(Coordinate::ORIGIN, ctx.primary())?;
        Ok(grid)
    }
}

/// Records the size of every room list it receives.
#[derive(Clone, Default)]
pub struct CountingModifier {
    seen: Arc<std::sync::Mutex<Vec<usize>>>,
}

impl CountingModifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Room counts received, one entry per call.
    pub fn seen(&self) -> Vec<usize> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl RoomModifier for CountingModifier {
    fn name(&self) -> &str {
        "CountingModifier"
    }

    fn modify(
        &self,
        _grid: &mut Grid<Tile>,
        rooms: &[Room],
        _ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(rooms.len());
        }
        Ok(())
    }
}
