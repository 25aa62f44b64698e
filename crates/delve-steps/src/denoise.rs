//! Boundary denoising.
//!
//! Looks at every default cell that touches a non-default cell on a
//! cardinal side. Its edge count is the number of in-bounds cardinal
//! neighbours holding a different tile. Cells whose edge count is at most
//! `threshold` become the primary tile (or a named replacement). All
//! candidates are judged against the grid as it was before the pass.
//!
//! The presets only differ in threshold.

use crate::grid_helpers::cardinal_neighbours;
use delve_core::{Coordinate, Grid, Tile};
use delve_step::{Step, StepContext, StepError};
use indexmap::IndexSet;

/// Threshold 4: every boundary cell converts.
pub const MANGLE: u8 = 4;
/// Threshold 3.
pub const DEFAULT: u8 = 3;
/// Threshold 2.
pub const SMOOTHING: u8 = 2;
/// Threshold 1.
pub const SUPER_SMOOTHING: u8 = 1;
/// Threshold 0.
pub const CARVE: u8 = 0;

/// Converts default cells along region boundaries.
#[derive(Clone, Debug)]
pub struct Denoise {
    threshold: u8,
    tile: Option<String>,
}

impl Default for Denoise {
    fn default() -> Self {
        Self::new(DEFAULT)
    }
}

impl Denoise {
    /// Denoise with the given edge-count threshold, writing the primary tile.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            tile: None,
        }
    }

    /// Preset with threshold [`MANGLE`].
    pub fn mangle() -> Self {
        Self::new(MANGLE)
    }

    /// Preset with threshold [`SMOOTHING`].
    pub fn smoothing() -> Self {
        Self::new(SMOOTHING)
    }

    /// Preset with threshold [`SUPER_SMOOTHING`].
    pub fn super_smoothing() -> Self {
        Self::new(SUPER_SMOOTHING)
    }

    /// Preset with threshold [`CARVE`].
    pub fn carve() -> Self {
        Self::new(CARVE)
    }

    /// Write the named tile instead of the primary tile.
    pub fn with_tile(mut self, name: impl Into<String>) -> Self {
        self.tile = Some(name.into());
        self
    }

    /// The configured threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Default cells bordering a non-default cell, in discovery order.
    fn boundary(grid: &Grid<Tile>) -> IndexSet<Coordinate> {
        let default = grid.default_value();
        let mut out = IndexSet::new();
        for (c, tile) in grid.iter() {
            if tile == default {
                continue;
            }
            for n in cardinal_neighbours(*c, grid.dimension()) {
                if grid.get(n).is_ok_and(|t| t == default) {
                    out.insert(n);
                }
            }
        }
        out
    }

    fn edge_count(grid: &Grid<Tile>, c: Coordinate) -> Result<usize, StepError> {
        let own = grid.get(c)?;
        let mut count = 0;
        for n in cardinal_neighbours(c, grid.dimension()) {
            if grid.get(n)? != own {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl Step for Denoise {
    fn name(&self) -> &str {
        "Denoise"
    }

    fn status(&self) -> &str {
        "Denoising..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        self.tile.as_deref().into_iter().collect()
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let replacement = match &self.tile {
            Some(name) => ctx.tile(name)?,
            None => ctx.primary(),
        };
        let mut convert = Vec::new();
        for c in Self::boundary(&grid) {
            if Self::edge_count(&grid, c)? <= usize::from(self.threshold) {
                convert.push(c);
            }
        }
        tracing::debug!(converted = convert.len(), threshold = self.threshold, "denoised");
        for c in convert {
            grid.set(c, replacement.clone())?;
        }
        Ok(grid)
    }
}
