//! The [`Step`] trait.

use crate::context::StepContext;
use crate::error::StepError;
use delve_core::{Grid, Tile};

/// One stage of a generation pipeline.
///
/// # Contract
///
/// - `process()` must not assume the incoming grid is empty, and must
///   tolerate being the first or last step in a chain.
/// - Every explicitly set coordinate of the returned grid must be in bounds.
/// - All randomness comes from `ctx.rng()`, so output is a pure function of
///   the incoming grid, the parameters, and the RNG stream.
///
/// # Object safety
///
/// This trait is object-safe; pipelines store steps as `Vec<Box<dyn Step>>`.
///
/// # Examples
///
/// A step that fills the top row with the primary tile:
///
/// ```
/// use delve_core::{Coordinate, Grid, Tile};
/// use delve_step::{Step, StepContext, StepError};
///
/// struct TopRow;
///
/// impl Step for TopRow {
///     fn name(&self) -> &str { "TopRow" }
///
///     fn process(
///         &self,
///         mut grid: Grid<Tile>,
///         ctx: &mut StepContext<'_>,
///     ) -> Result<Grid<Tile>, StepError> {
///         for x in 0..grid.dimension().w {
///             grid.set(Coordinate::new(x, 0), ctx.primary())?;
///         }
///         Ok(grid)
///     }
/// }
///
/// assert_eq!(TopRow.name(), "TopRow");
/// ```
pub trait Step: Send + 'static {
    /// Human-readable name for logging and error reporting.
    fn name(&self) -> &str;

    /// Progress text shown while the step runs.
    fn status(&self) -> &str {
        "Generating..."
    }

    /// Tile names this step will look up.
    ///
    /// Checked against the tileset before a pipeline starts, so a typo
    /// aborts the run before any step has touched the grid.
    fn required_tiles(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Transform the grid.
    fn process(&self, grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError>;
}
