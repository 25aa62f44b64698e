//! Crops the grid to its explicit cells.

use delve_core::{Coordinate, Dimension, Grid, Tile};
use delve_step::{Step, StepContext, StepError};

/// Shrinks the grid to the bounding box of its explicit cells plus a margin.
///
/// An empty grid keeps its full bounds, so trimming it only adds padding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trim {
    padding: i32,
}

impl Trim {
    /// Trim with `padding` default cells on every side. Negative values
    /// are treated as 0.
    pub fn new(padding: i32) -> Self {
        Self {
            padding: padding.max(0),
        }
    }

    /// The margin kept on each side.
    pub fn padding(&self) -> i32 {
        self.padding
    }
}

impl Step for Trim {
    fn name(&self) -> &str {
        "Trim"
    }

    fn status(&self) -> &str {
        "Trimming..."
    }

    fn process(&self, grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let dim = grid.dimension();
        let (min, max) = grid
            .bounding_box()
            .unwrap_or((Coordinate::ORIGIN, Coordinate::new(dim.w - 1, dim.h - 1)));
        let size = Dimension::new(
            max.x - min.x + 1 + 2 * self.padding,
            max.y - min.y + 1 + 2 * self.padding,
        );
        let offset = Coordinate::new(self.padding, self.padding) - min;
        let mut out = Grid::new(size, ctx.default_tile());
        for (c, tile) in grid.iter() {
            out.set(*c + offset, tile.clone())?;
        }
        tracing::debug!(from = %dim, to = %size, "trimmed");
        Ok(out)
    }
}
