//! Random room placement joined into a chain.
//!
//! Rooms of random size are dropped at random positions (one cell away from
//! the grid edge). Unless overlap is allowed, a room that collides with an
//! earlier one is rejected. Each accepted room is connected to the previous
//! one by a corridor. Placement gives up after `max_attempts` consecutive
//! rejections and keeps the rooms placed so far.

use crate::grid_helpers::{host_required_tiles, place_room};
use crate::path::Path;
use delve_core::{Dimension, Grid, Room, Tile};
use delve_step::{apply_room_modifiers, Modifier, Step, StepContext, StepError};

/// Room-and-corridor generator built from randomly placed rooms.
#[derive(Debug)]
pub struct CellTree {
    min_room: Dimension,
    max_room: Dimension,
    max_rooms: usize,
    max_range: i32,
    randomness: f64,
    allow_overlap: bool,
    max_attempts: usize,
    floor: String,
    modifiers: Vec<Modifier>,
}

/// Builder for [`CellTree`].
///
/// All fields have defaults: rooms 5x5 to 11x11, 10 rooms, corridor run
/// 10, randomness 0.0, no overlap, 200 attempts, floor `"floor"`.
pub struct CellTreeBuilder {
    min_room: Dimension,
    max_room: Dimension,
    max_rooms: usize,
    max_range: i32,
    randomness: f64,
    allow_overlap: bool,
    max_attempts: usize,
    floor: String,
    modifiers: Vec<Modifier>,
}

impl CellTree {
    /// Create a new builder for configuring a `CellTree` step.
    pub fn builder() -> CellTreeBuilder {
        CellTreeBuilder {
            min_room: Dimension::square(5),
            max_room: Dimension::square(11),
            max_rooms: 10,
            max_range: 10,
            randomness: 0.0,
            allow_overlap: false,
            max_attempts: 200,
            floor: "floor".to_string(),
            modifiers: Vec::new(),
        }
    }

    /// Place and connect rooms. Returns them in placement order.
    pub fn generate(&self, grid: &mut Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Vec<Room>, StepError> {
        let area = grid.dimension();
        // Only the smallest room has to fit; oversized draws are rejected below.
        let spare = area - self.min_room;
        if spare.w < 2 || spare.h < 2 {
            return Err(StepError::invalid_config(
                self.name(),
                format!(
                    "grid {area} is too small for rooms of at least {}; need 2 spare cells per axis",
                    self.min_room
                ),
            ));
        }
        let floor = ctx.tile(&self.floor)?;

        let mut rooms: Vec<Room> = Vec::with_capacity(self.max_rooms);
        let mut rejected = 0usize;
        while rooms.len() < self.max_rooms {
            if rejected >= self.max_attempts {
                ctx.warn(format!(
                    "{}: gave up after {rejected} consecutive rejected placements with {} of {} rooms",
                    self.name(),
                    rooms.len(),
                    self.max_rooms
                ));
                break;
            }
            let Some(size) = Dimension::random_between(ctx.rng(), self.min_room, self.max_room) else {
                break;
            };
            let Some(pos) = (area - size).random_coordinate(ctx.rng(), 1) else {
                rejected += 1;
                continue;
            };
            let room = Room::new(pos, size, floor.clone());
            if !self.allow_overlap && rooms.iter().any(|r| room.overlaps(r)) {
                rejected += 1;
                continue;
            }

            place_room(grid, &room)?;
            if let Some(previous) = rooms.last() {
                Path::between(room.center(), previous.center(), self.max_range, self.randomness, &self.floor)
                    .carve(grid, ctx)?;
            }
            rooms.push(room);
            rejected = 0;
        }
        tracing::debug!(rooms = rooms.len(), "cell tree placed");
        Ok(rooms)
    }
}

impl CellTreeBuilder {
    /// Smallest room size (default: 5x5).
    pub fn min_room(mut self, size: Dimension) -> Self {
        self.min_room = size;
        self
    }

    /// Largest room size (default: 11x11).
    pub fn max_room(mut self, size: Dimension) -> Self {
        self.max_room = size;
        self
    }

    /// Number of rooms to place (default: 10).
    pub fn max_rooms(mut self, count: usize) -> Self {
        self.max_rooms = count;
        self
    }

    /// Longest straight corridor run (default: 10). Must be >= 1.
    pub fn max_range(mut self, range: i32) -> Self {
        self.max_range = range;
        self
    }

    /// Corridor randomness (default: 0.0).
    pub fn randomness(mut self, randomness: f64) -> Self {
        self.randomness = randomness;
        self
    }

    /// Allow rooms to overlap (default: false).
    pub fn allow_overlap(mut self, allow: bool) -> Self {
        self.allow_overlap = allow;
        self
    }

    /// Consecutive rejections before giving up (default: 200). Must be >= 1.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Name of the room floor tile (default: `"floor"`).
    pub fn floor(mut self, name: impl Into<String>) -> Self {
        self.floor = name.into();
        self
    }

    /// Append a modifier run over the placed rooms.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Build the step, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the room size range is empty or non-positive,
    /// `max_range` or `max_attempts` is below 1, or `randomness` is outside
    /// `[0, 1]`.
    pub fn build(self) -> Result<CellTree, String> {
        if self.min_room.is_empty() {
            return Err(format!("min_room must be at least 1x1, got {}", self.min_room));
        }
        if self.min_room.w > self.max_room.w || self.min_room.h > self.max_room.h {
            return Err(format!(
                "min_room {} must not exceed max_room {}",
                self.min_room, self.max_room
            ));
        }
        if self.max_range < 1 {
            return Err(format!("max_range must be >= 1, got {}", self.max_range));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(format!("randomness must be in [0, 1], got {}", self.randomness));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be >= 1".to_string());
        }
        Ok(CellTree {
            min_room: self.min_room,
            max_room: self.max_room,
            max_rooms: self.max_rooms,
            max_range: self.max_range,
            randomness: self.randomness,
            allow_overlap: self.allow_overlap,
            max_attempts: self.max_attempts,
            floor: self.floor,
            modifiers: self.modifiers,
        })
    }
}

impl Step for CellTree {
    fn name(&self) -> &str {
        "CellTree"
    }

    fn status(&self) -> &str {
        "Generating cell tree..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        host_required_tiles(&self.floor, &self.modifiers)
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let rooms = self.generate(&mut grid, ctx)?;
        apply_room_modifiers(self.name(), &self.modifiers, &mut grid, &rooms, ctx)?;
        Ok(grid)
    }
}
