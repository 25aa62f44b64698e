//! Shared grid helpers for the room-producing and carving steps.

use delve_core::{Coordinate, Dimension, Direction, Grid, Room, Tile};
use delve_step::{Modifier, StepError};
use smallvec::SmallVec;

/// The in-bounds cardinal neighbours of `c`, in `N, E, S, W` order.
pub(crate) fn cardinal_neighbours(c: Coordinate, bounds: Dimension) -> SmallVec<[Coordinate; 4]> {
    Direction::CARDINALS
        .iter()
        .map(|&d| c.relative(d))
        .filter(|&n| bounds.contains(n))
        .collect()
}

/// Copy a room's cells onto the grid.
pub(crate) fn place_room(grid: &mut Grid<Tile>, room: &Room) -> Result<(), StepError> {
    grid.merge(&room.tiles())?;
    Ok(())
}

/// Tile names needed by a room-producing step: its own floor plus whatever
/// its room modifiers ask for. Skipped step modifiers contribute nothing.
pub(crate) fn host_required_tiles<'a>(floor: &'a str, modifiers: &'a [Modifier]) -> Vec<&'a str> {
    let mut names = vec![floor];
    for m in modifiers {
        names.extend(m.required_tiles());
    }
    names
}
