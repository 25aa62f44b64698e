//! Loot scattering.
//!
//! Items are drawn uniformly from a loot table of tile names. As a step,
//! up to `max_loot - 1` items land on random explicit cells of the grid.
//! As a room modifier, each room receives `area % max_loot` items at
//! random cells of that room.

use delve_core::{Grid, Room, Tile};
use delve_step::{RoomModifier, Step, StepContext, StepError};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Scatters items from a loot table.
#[derive(Clone, Debug)]
pub struct Loot {
    items: Vec<String>,
    max_loot: usize,
}

/// Builder for [`Loot`].
///
/// Required: at least one item. `max_loot` defaults to 10.
pub struct LootBuilder {
    items: Vec<String>,
    max_loot: usize,
}

impl Loot {
    /// Create a new builder for configuring a `Loot` step.
    pub fn builder() -> LootBuilder {
        LootBuilder {
            items: Vec::new(),
            max_loot: 10,
        }
    }

    fn resolve(&self, ctx: &StepContext<'_>) -> Result<Vec<Tile>, StepError> {
        self.items.iter().map(|name| ctx.tile(name)).collect()
    }
}

impl LootBuilder {
    /// Add a tile name to the loot table.
    pub fn item(mut self, name: impl Into<String>) -> Self {
        self.items.push(name.into());
        self
    }

    /// Add several tile names to the loot table.
    pub fn items<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(names.into_iter().map(Into::into));
        self
    }

    /// Modulus for item counts (default: 10).
    pub fn max_loot(mut self, max: usize) -> Self {
        self.max_loot = max;
        self
    }

    /// Build the step, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the loot table is empty or `max_loot` is 0.
    pub fn build(self) -> Result<Loot, String> {
        if self.items.is_empty() {
            return Err("items must not be empty".to_string());
        }
        if self.max_loot == 0 {
            return Err("max_loot must be >= 1".to_string());
        }
        Ok(Loot {
            items: self.items,
            max_loot: self.max_loot,
        })
    }
}

impl Step for Loot {
    fn name(&self) -> &str {
        "Loot"
    }

    fn status(&self) -> &str {
        "Scattering loot..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let table = self.resolve(ctx)?;
        if grid.is_empty() {
            ctx.warn("Loot: grid has no explicit cells; no loot placed");
            return Ok(grid);
        }
        let count = ctx.rng().random_range(0..self.max_loot);
        for _ in 0..count {
            let Some((c, _)) = grid.random_entry(ctx.rng()) else {
                break;
            };
            if let Some(item) = table.choose(ctx.rng()) {
                grid.set(c, item.clone())?;
            }
        }
        tracing::debug!(count, "loot placed");
        Ok(grid)
    }
}

impl RoomModifier for Loot {
    fn name(&self) -> &str {
        "Loot"
    }

    fn required_tiles(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    fn modify(&self, grid: &mut Grid<Tile>, rooms: &[Room], ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        let table = self.resolve(ctx)?;
        for room in rooms {
            let count = usize::try_from(room.area()).unwrap_or(0) % self.max_loot;
            for _ in 0..count {
                let Some(c) = room.random_cell(ctx.rng()) else {
                    break;
                };
                if let Some(item) = table.choose(ctx.rng()) {
                    grid.set(c, item.clone())?;
                }
            }
        }
        Ok(())
    }
}
