//! Post-processing hooks for room-producing steps.
//!
//! Steps that place rooms (binary split, cell tree, rect cell) accept a list
//! of [`Modifier`]s. Once their rooms are on the grid they hand the room
//! list to every [`Modifier::Room`]. A plain [`Modifier::Step`] cannot
//! consume rooms, so it is skipped with a warning rather than failing the run.

use crate::context::StepContext;
use crate::error::StepError;
use crate::step::Step;
use delve_core::{Grid, Room, Tile};

/// A post-process that consumes the rooms a step just placed.
pub trait RoomModifier: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Tile names this modifier will look up.
    fn required_tiles(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Modify `grid` using the room list.
    fn modify(
        &self,
        grid: &mut Grid<Tile>,
        rooms: &[Room],
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError>;
}

/// A modifier handed to a room-producing step.
pub enum Modifier {
    /// Consumes the room list.
    Room(Box<dyn RoomModifier>),
    /// A whole-grid step. Room-producing steps skip these with a warning.
    Step(Box<dyn Step>),
}

impl Modifier {
    /// Wrap a room modifier.
    pub fn room(m: impl RoomModifier) -> Self {
        Self::Room(Box::new(m))
    }

    /// Wrap a whole-grid step.
    pub fn step(s: impl Step) -> Self {
        Self::Step(Box::new(s))
    }

    /// Name of the wrapped modifier or step.
    pub fn name(&self) -> &str {
        match self {
            Self::Room(m) => m.name(),
            Self::Step(s) => s.name(),
        }
    }

    /// Tile names the wrapped modifier will look up.
    ///
    /// Always empty for [`Modifier::Step`]: it is skipped, never run, so its
    /// tiles need not be bound.
    pub fn required_tiles(&self) -> Vec<&str> {
        match self {
            Self::Room(m) => m.required_tiles(),
            Self::Step(_) => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Room(m) => f.debug_tuple("Room").field(&m.name()).finish(),
            Self::Step(s) => f.debug_tuple("Step").field(&s.name()).finish(),
        }
    }
}

/// Run every room-capable modifier in order; warn about and skip the rest.
pub fn apply_room_modifiers(
    host: &str,
    modifiers: &[Modifier],
    grid: &mut Grid<Tile>,
    rooms: &[Room],
    ctx: &mut StepContext<'_>,
) -> Result<(), StepError> {
    for modifier in modifiers {
        match modifier {
            Modifier::Room(m) => {
                tracing::debug!(host, modifier = m.name(), rooms = rooms.len(), "applying room modifier");
                m.modify(grid, rooms, ctx)?;
            }
            Modifier::Step(s) => {
                ctx.warn(format!(
                    "{host}: modifier '{}' does not consume rooms and was skipped",
                    s.name()
                ));
            }
        }
    }
    Ok(())
}
