//! The dungeon orchestrator.
//!
//! [`Dungeon`] owns one grid, the tileset it is drawn with, and the seeded
//! RNG every pipeline applied to it draws from.
//!
//! # Overdub semantics
//!
//! [`apply()`](Dungeon::apply) never resets the grid: each pipeline starts
//! from whatever the previous one left. A pipeline that fails leaves the
//! grid exactly as it was (the RNG stream has still advanced).

use std::time::Instant;

use delve_core::{Dimension, Grid, Tile, TileSet};
use delve_step::Pipeline;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, DungeonConfig};
use crate::error::DungeonError;
use crate::metrics::ApplyMetrics;
use crate::render::Renderer;

// Compile-time assertion: a dungeon over a sendable tileset is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Dungeon<delve_core::CharTileSet>>();
    }
};

/// A named dungeon: one grid, one tileset, one RNG stream.
///
/// # Example
///
/// ```ignore
/// let mut dungeon = Dungeon::new(DungeonConfig::seeded(7), CharTileSet::standard())?;
/// dungeon.apply(&Pipeline::new().with(MindlessWanderer::default()))?;
/// dungeon.apply(&Pipeline::new().with(Denoise::smoothing()))?;
/// dungeon.render(&mut ConsoleRenderer::stdout())?;
/// ```
pub struct Dungeon<S: TileSet> {
    name: String,
    tiles: S,
    seed: u64,
    rng: ChaCha8Rng,
    grid: Grid<Tile>,
    log_steps: bool,
}

impl<S: TileSet> Dungeon<S> {
    /// Create an empty dungeon from a [`DungeonConfig`].
    ///
    /// Validates the configuration and resolves the seed. The grid starts
    /// with every cell at the tileset's default tile.
    pub fn new(config: DungeonConfig, tiles: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let grid = Grid::new(config.dimension, tiles.default_tile().clone());
        if config.log_steps {
            tracing::info!(name = %config.name, seed, dimension = %config.dimension, "dungeon created");
        }
        Ok(Self {
            name: config.name,
            tiles,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            grid,
            log_steps: config.log_steps,
        })
    }

    /// Run `pipeline` on top of the current grid.
    ///
    /// # Errors
    ///
    /// Returns [`DungeonError::Pipeline`] if validation or any step fails.
    /// The grid is unchanged in that case.
    pub fn apply(&mut self, pipeline: &Pipeline) -> Result<ApplyMetrics, DungeonError> {
        let start = Instant::now();
        let cells_before = self.grid.len();
        let report = pipeline.run(self.grid.clone(), &self.tiles, &mut self.rng)?;
        self.grid = report.grid;

        let metrics = ApplyMetrics {
            total_us: start.elapsed().as_micros() as u64,
            steps: pipeline.len(),
            cells_before,
            cells_after: self.grid.len(),
            warnings: report.warnings,
        };
        if self.log_steps {
            tracing::info!(
                dungeon = %self.name,
                steps = metrics.steps,
                cells = metrics.cells_after,
                warnings = metrics.warnings.len(),
                us = metrics.total_us,
                "pipeline applied"
            );
        }
        Ok(metrics)
    }

    /// Draw the current grid with `renderer`.
    pub fn render<R: Renderer<S>>(&self, renderer: &mut R) -> Result<(), DungeonError> {
        renderer.render(&self.grid, &self.tiles)?;
        Ok(())
    }

    /// Drop every explicit cell. The RNG stream is not rewound.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// The dungeon's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved seed. Recreating the dungeon with this seed and the
    /// same pipelines reproduces the grid.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Grid size.
    pub fn dimension(&self) -> Dimension {
        self.grid.dimension()
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    /// The tileset.
    pub fn tiles(&self) -> &S {
        &self.tiles
    }

    /// Consume the dungeon, returning its grid.
    pub fn into_grid(self) -> Grid<Tile> {
        self.grid
    }
}

impl<S: TileSet> std::fmt::Debug for Dungeon<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dungeon")
            .field("name", &self.name)
            .field("seed", &self.seed)
            .field("dimension", &self.grid.dimension())
            .field("cells", &self.grid.len())
            .finish_non_exhaustive()
    }
}
