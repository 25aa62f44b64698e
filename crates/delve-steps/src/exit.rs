//! Exit placement.

use delve_core::{Grid, Room, Tile};
use delve_step::{RoomModifier, Step, StepContext, StepError};
use rand::seq::IndexedRandom;

/// Replaces one random cell with the exit tile.
///
/// As a [`Step`] the cell is any explicit cell of the grid. As a
/// [`RoomModifier`] it is a random cell of a random room.
#[derive(Clone, Debug)]
pub struct Exit {
    tile: String,
}

impl Default for Exit {
    fn default() -> Self {
        Self::new("exit")
    }
}

impl Exit {
    /// Place the named tile as the exit.
    pub fn new(tile: impl Into<String>) -> Self {
        Self { tile: tile.into() }
    }
}

impl Step for Exit {
    fn name(&self) -> &str {
        "Exit"
    }

    fn status(&self) -> &str {
        "Placing exit..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.tile.as_str()]
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let exit = ctx.tile(&self.tile)?;
        match grid.random_entry(ctx.rng()).map(|(c, _)| c) {
            Some(c) => {
                grid.set(c, exit)?;
            }
            None => ctx.warn("Exit: grid has no explicit cells; no exit placed"),
        }
        Ok(grid)
    }
}

impl RoomModifier for Exit {
    fn name(&self) -> &str {
        "Exit"
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.tile.as_str()]
    }

    fn modify(&self, grid: &mut Grid<Tile>, rooms: &[Room], ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        let exit = ctx.tile(&self.tile)?;
        let cell = rooms.choose(ctx.rng()).and_then(|room| room.random_cell(ctx.rng()));
        match cell {
            Some(c) => {
                grid.set(c, exit)?;
            }
            None => ctx.warn("Exit: no rooms to place an exit in"),
        }
        Ok(())
    }
}
