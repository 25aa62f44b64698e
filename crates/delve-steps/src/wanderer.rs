//! Random-walk carving.
//!
//! Each wanderer lives for a random number of steps, painting its cell with
//! the primary tile and then trying random directions until one lands in
//! bounds. With probability `new_tile_bias` it also refuses a cell that is
//! already primary, which pushes it toward fresh ground. A wanderer that
//! fails to move `max_retries` times in a row dies early.

use delve_core::{Direction, Grid, Tile};
use delve_step::{Step, StepContext, StepError};
use rand::Rng;

/// Drunkard's-walk cave carver.
#[derive(Clone, Debug)]
pub struct MindlessWanderer {
    wanderers: usize,
    max_lifetime: u32,
    allow_separation: bool,
    new_tile_bias: f64,
    max_retries: u32,
}

/// Builder for [`MindlessWanderer`].
///
/// All fields have defaults: 10 wanderers, lifetime 100, no separation,
/// bias 0.5, 50 retries.
pub struct MindlessWandererBuilder {
    inner: MindlessWanderer,
}

impl Default for MindlessWanderer {
    fn default() -> Self {
        Self {
            wanderers: 10,
            max_lifetime: 100,
            allow_separation: false,
            new_tile_bias: 0.5,
            max_retries: 50,
        }
    }
}

impl MindlessWanderer {
    /// Create a new builder for configuring a `MindlessWanderer` step.
    pub fn builder() -> MindlessWandererBuilder {
        MindlessWandererBuilder {
            inner: Self::default(),
        }
    }

    fn wander(&self, grid: &mut Grid<Tile>, primary: &Tile, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        let dim = grid.dimension();
        let lifespan = ctx.rng().random_range(self.max_lifetime / 2..=self.max_lifetime);
        let start = if self.allow_separation {
            dim.random_coordinate(ctx.rng(), 0)
        } else if grid.is_empty() {
            Some(dim.center())
        } else {
            grid.random_entry(ctx.rng()).map(|(c, _)| c)
        };
        let Some(mut pos) = start.filter(|c| dim.contains(*c)) else {
            return Ok(());
        };

        for _ in 0..lifespan {
            grid.set(pos, primary.clone())?;
            let mut moved = false;
            for _ in 0..self.max_retries {
                let candidate = pos.relative(Direction::random(ctx.rng()));
                if !dim.contains(candidate) {
                    continue;
                }
                if grid.get(candidate)? == primary && ctx.rng().random::<f64>() < self.new_tile_bias {
                    continue;
                }
                pos = candidate;
                moved = true;
                break;
            }
            if !moved {
                return Ok(());
            }
        }
        Ok(())
    }
}

impl MindlessWandererBuilder {
    /// Number of agents (default: 10).
    pub fn wanderers(mut self, count: usize) -> Self {
        self.inner.wanderers = count;
        self
    }

    /// Longest lifespan; each agent draws from `[max / 2, max]` (default: 100).
    pub fn max_lifetime(mut self, steps: u32) -> Self {
        self.inner.max_lifetime = steps;
        self
    }

    /// Start agents anywhere instead of on carved ground (default: false).
    pub fn allow_separation(mut self, allow: bool) -> Self {
        self.inner.allow_separation = allow;
        self
    }

    /// Chance to refuse an already carved cell (default: 0.5).
    pub fn new_tile_bias(mut self, bias: f64) -> Self {
        self.inner.new_tile_bias = bias;
        self
    }

    /// Failed moves in a row before an agent dies (default: 50).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.inner.max_retries = retries;
        self
    }

    /// Build the step, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `new_tile_bias` is outside `[0, 1]`.
    pub fn build(self) -> Result<MindlessWanderer, String> {
        if !(0.0..=1.0).contains(&self.inner.new_tile_bias) {
            return Err(format!(
                "new_tile_bias must be in [0, 1], got {}",
                self.inner.new_tile_bias
            ));
        }
        Ok(self.inner)
    }
}

impl Step for MindlessWanderer {
    fn name(&self) -> &str {
        "MindlessWanderer"
    }

    fn status(&self) -> &str {
        "Wandering..."
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let primary = ctx.primary();
        for _ in 0..self.wanderers {
            self.wander(&mut grid, &primary, ctx)?;
        }
        Ok(grid)
    }
}
