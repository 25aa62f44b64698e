//! Lattice-grown clusters of equal rooms.
//!
//! Starting from one randomly placed cell, each new room is stamped one
//! cell plus a hallway gap away from a random existing room, in a random
//! cardinal direction, and linked to it by a corridor. All rooms sit on the
//! lattice anchored at the first one, so they never partially overlap.

use crate::grid_helpers::{host_required_tiles, place_room};
use crate::path::Path;
use delve_core::{Coordinate, Dimension, Direction, Grid, Room, Tile};
use delve_step::{apply_room_modifiers, Modifier, Step, StepContext, StepError};
use rand::Rng;

/// Grows a cluster of fixed-size rooms.
#[derive(Debug)]
pub struct RectCell {
    cell: Dimension,
    min_rooms: usize,
    max_rooms: usize,
    hallway: i32,
    retries: usize,
    max_stride: i32,
    floor: String,
    modifiers: Vec<Modifier>,
}

/// Builder for [`RectCell`].
///
/// All fields have defaults: 5x5 cells, 6 to 25 rooms, hallway 1, 50
/// retries, stride 1, floor `"floor"`.
pub struct RectCellBuilder {
    cell: Dimension,
    min_rooms: usize,
    max_rooms: usize,
    hallway: i32,
    retries: usize,
    max_stride: i32,
    floor: String,
    modifiers: Vec<Modifier>,
}

impl RectCell {
    /// Create a new builder for configuring a `RectCell` step.
    pub fn builder() -> RectCellBuilder {
        RectCellBuilder {
            cell: Dimension::square(5),
            min_rooms: 6,
            max_rooms: 25,
            hallway: 1,
            retries: 50,
            max_stride: 1,
            floor: "floor".to_string(),
            modifiers: Vec::new(),
        }
    }

    /// Grow the cluster. Returns the rooms in placement order.
    pub fn generate(&self, grid: &mut Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Vec<Room>, StepError> {
        let area = grid.dimension();
        if area.w < self.cell.w || area.h < self.cell.h {
            return Err(StepError::invalid_config(
                self.name(),
                format!("grid {area} is smaller than one {} cell", self.cell),
            ));
        }
        let floor = ctx.tile(&self.floor)?;
        // Valid top-left corners.
        let viable = area - self.cell + Dimension::square(1);
        let Some(seed) = viable.random_coordinate(ctx.rng(), 0) else {
            return Ok(Vec::new());
        };
        let first = Room::new(seed, self.cell, floor.clone());
        place_room(grid, &first)?;
        let mut rooms = vec![first];

        let target = ctx.rng().random_range(self.min_rooms..=self.max_rooms);
        let pitch = Coordinate::new(self.cell.w + self.hallway, self.cell.h + self.hallway);
        let mut retry = self.retries;
        while rooms.len() < target {
            if retry == 0 {
                tracing::debug!(placed = rooms.len(), target, "rect cell ran out of retries");
                break;
            }
            let base = rooms[ctx.rng().random_range(0..rooms.len())].pos();
            let rel = Direction::random_cardinal(ctx.rng()).rel();
            let stride = ctx.rng().random_range(1..=self.max_stride);
            let pos = base + Coordinate::new(rel.x * stride * pitch.x, rel.y * stride * pitch.y);
            if !viable.contains(pos) || rooms.iter().any(|r| r.pos() == pos) {
                retry -= 1;
                continue;
            }

            let room = Room::new(pos, self.cell, floor.clone());
            place_room(grid, &room)?;
            let from = base + self.cell.center();
            Path::between(from, room.center(), 10, 0.0, &self.floor).carve(grid, ctx)?;
            rooms.push(room);
            retry = self.retries;
        }
        Ok(rooms)
    }
}

impl RectCellBuilder {
    /// Size of every room (default: 5x5).
    pub fn cell(mut self, size: Dimension) -> Self {
        self.cell = size;
        self
    }

    /// Inclusive range the room count is drawn from (default: 6 to 25).
    pub fn rooms(mut self, min: usize, max: usize) -> Self {
        self.min_rooms = min;
        self.max_rooms = max;
        self
    }

    /// Gap between neighbouring rooms (default: 1).
    pub fn hallway(mut self, gap: i32) -> Self {
        self.hallway = gap;
        self
    }

    /// Consecutive failed placements before stopping (default: 50).
    pub fn retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Largest lattice jump per placement (default: 1).
    pub fn max_stride(mut self, stride: i32) -> Self {
        self.max_stride = stride;
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
    /// Returns `Err` if the cell is empty, the room range is empty or starts
    /// at 0, `hallway` is negative, or `retries`/`max_stride` is below 1.
    pub fn build(self) -> Result<RectCell, String> {
        if self.cell.is_empty() {
            return Err(format!("cell must be at least 1x1, got {}", self.cell));
        }
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(format!(
                "rooms must satisfy 1 <= min <= max, got {}..={}",
                self.min_rooms, self.max_rooms
            ));
        }
        if self.hallway < 0 {
            return Err(format!("hallway must be >= 0, got {}", self.hallway));
        }
        if self.retries == 0 {
            return Err("retries must be >= 1".to_string());
        }
        if self.max_stride < 1 {
            return Err(format!("max_stride must be >= 1, got {}", self.max_stride));
        }
        Ok(RectCell {
            cell: self.cell,
            min_rooms: self.min_rooms,
            max_rooms: self.max_rooms,
            hallway: self.hallway,
            retries: self.retries,
            max_stride: self.max_stride,
            floor: self.floor,
            modifiers: self.modifiers,
        })
    }
}

impl Step for RectCell {
    fn name(&self) -> &str {
        "RectCell"
    }

    fn status(&self) -> &str {
        "Growing cells..."
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

#[cfg(test)]
mod tests {
    use super::*;
    use delve_test_utils::{empty_grid, seeded_rng, tiles, CountingModifier};

    #[test]
    fn rooms_share_a_lattice() {
        let set = tiles();
        let mut rng = seeded_rng(12);
        let mut ctx = StepContext::new(&set, &mut rng);
        let step = RectCell::builder().rooms(8, 8).build().unwrap();
        let rooms = step.generate(&mut empty_grid(&set, 60, 60), &mut ctx).unwrap();
        assert_eq!(rooms.len(), 8);
        let origin = rooms[0].pos();
        for room in &rooms {
            assert_eq!((room.pos().x - origin.x).rem_euclid(6), 0);
            assert_eq!((room.pos().y - origin.y).rem_euclid(6), 0);
            assert_eq!(room.dimension(), Dimension::square(5));
        }
        for (i, a) in rooms.iter().enumerate() {
            assert!(rooms[i + 1..].iter().all(|b| b.pos() != a.pos()));
        }
    }

    #[test]
    fn single_cell_grid_stops_after_retries() {
        let set = tiles();
        let mut rng = seeded_rng(1);
        let mut ctx = StepContext::new(&set, &mut rng);
        let step = RectCell::builder().rooms(3, 3).retries(5).build().unwrap();
        let rooms = step.generate(&mut empty_grid(&set, 5, 5), &mut ctx).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].pos(), Coordinate::ORIGIN);
    }

    #[test]
    fn grid_smaller_than_cell_is_config_error() {
        let set = tiles();
        let mut rng = seeded_rng(1);
        let mut ctx = StepContext::new(&set, &mut rng);
        let step = RectCell::builder().build().unwrap();
        let err = step.process(empty_grid(&set, 4, 20), &mut ctx).unwrap_err();
        assert!(matches!(err, StepError::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn hosts_room_modifiers() {
        let set = tiles();
        let mut rng = seeded_rng(2);
        let mut ctx = StepContext::new(&set, &mut rng);
        let counter = CountingModifier::new();
        let step = RectCell::builder()
            .rooms(4, 4)
            .modifier(Modifier::room(counter.clone()))
            .build()
            .unwrap();
        step.process(empty_grid(&set, 40, 40), &mut ctx).unwrap();
        assert_eq!(counter.seen(), vec![4]);
    }

    // ---- Builder tests ----

    #[test]
    fn builder_rejects_bad_ranges() {
        assert!(RectCell::builder().rooms(0, 4).build().unwrap_err().contains("rooms"));
        assert!(RectCell::builder().rooms(5, 4).build().is_err());
        assert!(RectCell::builder().hallway(-1).build().unwrap_err().contains("hallway"));
        assert!(RectCell::builder().cell(Dimension::new(0, 3)).build().is_err());
        assert!(RectCell::builder().max_stride(0).build().is_err());
    }
}
