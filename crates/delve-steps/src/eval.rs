//! Closure-driven steps for one-off edits.

use delve_core::{Coordinate, Dimension, Grid, Tile};
use delve_step::{Step, StepContext, StepError};

type CellFn = Box<dyn Fn(i32, i32, &Tile) -> Option<Tile> + Send>;
type GridFn = Box<dyn Fn(&mut Grid<Tile>, Dimension) -> Result<(), StepError> + Send>;

/// Applies a per-cell closure over a rectangle.
///
/// The closure sees every cell of the rectangle, explicit or not, and
/// returns `Some(tile)` to overwrite it or `None` to leave it alone. The
/// rectangle is half-open, `[from, to)`, and clamped to the grid.
pub struct Eval {
    from: Option<Coordinate>,
    to: Option<Coordinate>,
    f: CellFn,
}

impl Eval {
    /// Evaluate `f` over the whole grid.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(i32, i32, &Tile) -> Option<Tile> + Send + 'static,
    {
        Self {
            from: None,
            to: None,
            f: Box::new(f),
        }
    }

    /// Evaluate `f` over `[from, to)` only.
    pub fn within<F>(from: Coordinate, to: Coordinate, f: F) -> Self
    where
        F: Fn(i32, i32, &Tile) -> Option<Tile> + Send + 'static,
    {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::new(f)
        }
    }
}

impl std::fmt::Debug for Eval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eval")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl Step for Eval {
    fn name(&self) -> &str {
        "Eval"
    }

    fn process(&self, mut grid: Grid<Tile>, _ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let Dimension { w, h } = grid.dimension();
        let from = self.from.unwrap_or(Coordinate::ORIGIN);
        let to = self.to.unwrap_or(Coordinate::new(w, h));
        let (x0, x1) = (from.x.clamp(0, w), to.x.clamp(0, w));
        let (y0, y1) = (from.y.clamp(0, h), to.y.clamp(0, h));
        for y in y0..y1 {
            for x in x0..x1 {
                let c = Coordinate::new(x, y);
                if let Some(tile) = (self.f)(x, y, grid.get(c)?) {
                    grid.set(c, tile)?;
                }
            }
        }
        Ok(grid)
    }
}

/// Applies an arbitrary closure to the whole grid.
pub struct Run {
    f: GridFn,
}

impl Run {
    /// Run `f` with the grid and its dimension.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Grid<Tile>, Dimension) -> Result<(), StepError> + Send + 'static,
    {
        Self { f: Box::new(f) }
    }
}

impl std::fmt::Debug for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Run").finish_non_exhaustive()
    }
}

impl Step for Run {
    fn name(&self) -> &str {
        "Run"
    }

    fn process(&self, mut grid: Grid<Tile>, _ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let dim = grid.dimension();
        (self.f)(&mut grid, dim)?;
        Ok(grid)
    }
}
