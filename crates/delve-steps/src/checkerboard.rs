//! Alternating-cell fill.

use delve_core::{Coordinate, Grid, Tile};
use delve_step::{Step, StepContext, StepError};

/// Sets every other cell to a named tile.
///
/// Even rows start at column 0 and odd rows at column 1; `invert` swaps
/// the two.
#[derive(Clone, Debug)]
pub struct Checkerboard {
    tile: String,
    invert: bool,
}

impl Checkerboard {
    /// Checkerboard of `tile` with the top-left cell set.
    pub fn new(tile: impl Into<String>) -> Self {
        Self {
            tile: tile.into(),
            invert: false,
        }
    }

    /// Start with the top-left cell clear instead.
    pub fn inverted(mut self) -> Self {
        self.invert = !self.invert;
        self
    }
}

impl Step for Checkerboard {
    fn name(&self) -> &str {
        "Checkerboard"
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.tile.as_str()]
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let tile = ctx.tile(&self.tile)?;
        let dim = grid.dimension();
        for y in 0..dim.h {
            let first = if (y % 2 == 0) != self.invert { 0 } else { 1 };
            for x in (first..dim.w).step_by(2) {
                grid.set(Coordinate::new(x, y), tile.clone())?;
            }
        }
        Ok(grid)
    }
}
