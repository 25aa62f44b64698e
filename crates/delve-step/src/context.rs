//! Execution context passed to steps.
//!
//! [`StepContext`] carries the tileset, the single seeded RNG every step
//! draws from, and a sink for recoverable warnings.

use crate::error::StepError;
use delve_core::{Tile, TileSet};
use rand_chacha::ChaCha8Rng;

/// Execution context passed to each step's `process()` method.
///
/// The RNG is borrowed, not owned: a whole pipeline (and a whole dungeon)
/// shares one generator, so a fixed seed and a fixed step order always
/// produce the same grid.
pub struct StepContext<'a> {
    tiles: &'a dyn TileSet,
    rng: &'a mut ChaCha8Rng,
    warnings: Vec<String>,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the pipeline runner. Tests build one directly.
    pub fn new(tiles: &'a dyn TileSet, rng: &'a mut ChaCha8Rng) -> Self {
        Self {
            tiles,
            rng,
            warnings: Vec::new(),
        }
    }

    /// The tileset in use.
    pub fn tiles(&self) -> &dyn TileSet {
        self.tiles
    }

    /// The shared random generator.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.rng
    }

    /// Resolve a tile by name.
    ///
    /// Unknown names are a configuration error; there is no fallback.
    pub fn tile(&self, name: &str) -> Result<Tile, StepError> {
        self.tiles
            .get(name)
            .cloned()
            .ok_or_else(|| StepError::UnknownTile {
                name: name.to_string(),
            })
    }

    /// The tileset's default (background) tile.
    pub fn default_tile(&self) -> Tile {
        self.tiles.default_tile().clone()
    }

    /// The tileset's primary tile.
    pub fn primary(&self) -> Tile {
        self.tiles.primary().clone()
    }

    /// The tileset's secondary tile.
    pub fn secondary(&self) -> Tile {
        self.tiles.secondary().clone()
    }

    /// Record a recoverable diagnostic. Also emitted as a `tracing` warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.warnings.push(message);
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the context, returning its warnings.
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::CharTileSet;
    use rand::{Rng, SeedableRng};

    #[test]
    fn tile_lookup_resolves_or_fails() {
        let set = CharTileSet::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let ctx = StepContext::new(&set, &mut rng);
        assert_eq!(ctx.tile("floor").unwrap(), Tile::open("Floor"));
        assert_eq!(
            ctx.tile("lava"),
            Err(StepError::UnknownTile {
                name: "lava".into()
            })
        );
        assert_eq!(ctx.default_tile(), Tile::solid("Wall"));
    }

    #[test]
    fn warnings_accumulate_in_order() {
        let set = CharTileSet::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut ctx = StepContext::new(&set, &mut rng);
        ctx.warn("first");
        ctx.warn(String::from("second"));
        assert_eq!(ctx.warnings(), ["first", "second"]);
        assert_eq!(ctx.into_warnings().len(), 2);
    }

    #[test]
    fn rng_is_shared_with_caller() {
        let set = CharTileSet::standard();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        {
            let mut ctx = StepContext::new(&set, &mut a);
            let _: u64 = ctx.rng().random();
        }
        let _: u64 = b.random();
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
