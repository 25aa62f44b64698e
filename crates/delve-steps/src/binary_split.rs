//! Binary space partitioning.
//!
//! The whole grid starts as one partition. Each of `depth` rounds splits
//! every partition in two, cutting across its long side when the aspect
//! ratio reaches `split_ratio` and flipping a coin otherwise. A partition
//! whose cut axis is no longer than `2 * min_cell_size` stays a leaf.
//!
//! Every leaf then hosts a room with probability `1 - reject`: the leaf
//! shrunk by `padding` on each axis, placed at a random offset inside the
//! leftover margin. Rooms are joined in order by short corridors, and the
//! room list is handed to any room modifiers.
//!
//! Constructed via the builder pattern: [`BinarySplit::builder`].

use crate::grid_helpers::{host_required_tiles, place_room};
use crate::path::Path;
use delve_core::{Coordinate, Dimension, Grid, Room, Tile};
use delve_step::{apply_room_modifiers, Modifier, Step, StepContext, StepError};
use rand::Rng;

/// Longest straight corridor run between consecutive rooms.
const CORRIDOR_RANGE: i32 = 5;

/// An axis-aligned cell produced by [`partition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Top-left corner.
    pub pos: Coordinate,
    /// Width and height.
    pub size: Dimension,
}

impl Partition {
    fn split<R: Rng + ?Sized>(self, rng: &mut R, min_cell_size: i32, split_ratio: f64) -> Vec<Partition> {
        let Dimension { w, h } = self.size;
        if w <= 0 || h <= 0 {
            return vec![self];
        }
        let (wf, hf) = (f64::from(w), f64::from(h));
        let cut_height = if wf / hf >= split_ratio {
            false
        } else if hf / wf >= split_ratio {
            true
        } else {
            rng.random_bool(0.5)
        };

        let length = if cut_height { h } else { w };
        if length <= 2 * min_cell_size {
            return vec![self];
        }
        let offset = rng.random_range(min_cell_size..length - min_cell_size);
        let Coordinate { x, y } = self.pos;
        if cut_height {
            vec![
                Partition { pos: Coordinate::new(x, y), size: Dimension::new(w, offset) },
                Partition { pos: Coordinate::new(x, y + offset), size: Dimension::new(w, h - offset) },
            ]
        } else {
            vec![
                Partition { pos: Coordinate::new(x, y), size: Dimension::new(offset, h) },
                Partition { pos: Coordinate::new(x + offset, y), size: Dimension::new(w - offset, h) },
            ]
        }
    }

    fn make_room<R: Rng + ?Sized>(self, rng: &mut R, padding: i32, floor: &Tile) -> Option<Room> {
        let area = self.size - Dimension::square(padding);
        if area.is_empty() || area.largest_square() < padding {
            return None;
        }
        let offset = (self.size - area).random_coordinate(rng, 0)?;
        Some(Room::new(self.pos + offset, area, floor.clone()))
    }
}

/// Recursively split `area` for `depth` rounds and return the leaves.
///
/// Leaves tile the area exactly: they never overlap and their areas sum to
/// the area of the root.
pub fn partition<R: Rng + ?Sized>(
    rng: &mut R,
    area: Dimension,
    depth: u32,
    min_cell_size: i32,
    split_ratio: f64,
) -> Vec<Partition> {
    let mut partitions = vec![Partition { pos: Coordinate::ORIGIN, size: area }];
    for _ in 0..depth {
        partitions = partitions
            .into_iter()
            .flat_map(|p| p.split(rng, min_cell_size, split_ratio))
            .collect();
    }
    partitions
}

/// A BSP room generator.
#[derive(Debug)]
pub struct BinarySplit {
    depth: u32,
    min_cell_size: i32,
    padding: i32,
    split_ratio: f64,
    reject: f64,
    floor: String,
    modifiers: Vec<Modifier>,
}

/// Builder for [`BinarySplit`].
///
/// All fields have defaults: depth 4, min cell size 10, padding 4, split
/// ratio 1.75, reject 0.0, floor `"floor"`, no modifiers.
pub struct BinarySplitBuilder {
    depth: u32,
    min_cell_size: i32,
    padding: i32,
    split_ratio: f64,
    reject: f64,
    floor: String,
    modifiers: Vec<Modifier>,
}

impl BinarySplit {
    /// Create a new builder for configuring a `BinarySplit` step.
    pub fn builder() -> BinarySplitBuilder {
        BinarySplitBuilder {
            depth: 4,
            min_cell_size: 10,
            padding: 4,
            split_ratio: 1.75,
            reject: 0.0,
            floor: "floor".to_string(),
            modifiers: Vec::new(),
        }
    }

    /// Partition the grid, place rooms, and connect them. Returns the rooms
    /// in placement order.
    pub fn generate(&self, grid: &mut Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Vec<Room>, StepError> {
        let floor = ctx.tile(&self.floor)?;
        let leaves = partition(
            ctx.rng(),
            grid.dimension(),
            self.depth,
            self.min_cell_size,
            self.split_ratio,
        );
        tracing::debug!(leaves = leaves.len(), "partitioned");

        let mut rooms = Vec::new();
        for leaf in leaves {
            if ctx.rng().random::<f64>() < self.reject {
                continue;
            }
            if let Some(room) = leaf.make_room(ctx.rng(), self.padding, &floor) {
                place_room(grid, &room)?;
                rooms.push(room);
            }
        }

        for pair in rooms.windows(2) {
            Path::between(pair[0].center(), pair[1].center(), CORRIDOR_RANGE, 0.0, &self.floor)
                .carve(grid, ctx)?;
        }
        tracing::debug!(rooms = rooms.len(), "rooms placed");
        Ok(rooms)
    }
}

impl BinarySplitBuilder {
    /// Rounds of splitting (default: 4).
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Smallest side a split may produce (default: 10). Must be >= 1.
    pub fn min_cell_size(mut self, size: i32) -> Self {
        self.min_cell_size = size;
        self
    }

    /// Shrink applied to each leaf to size its room (default: 4).
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Aspect ratio that forces a cut across the long side (default: 1.75).
    pub fn split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = ratio;
        self
    }

    /// Probability a leaf gets no room (default: 0.0).
    pub fn reject(mut self, reject: f64) -> Self {
        self.reject = reject;
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
    /// Returns `Err` if `min_cell_size` is below 1, `padding` is negative,
    /// `split_ratio` is below 1 or not finite, or `reject` is outside `[0, 1]`.
    pub fn build(self) -> Result<BinarySplit, String> {
        if self.min_cell_size < 1 {
            return Err(format!("min_cell_size must be >= 1, got {}", self.min_cell_size));
        }
        if self.padding < 0 {
            return Err(format!("padding must be >= 0, got {}", self.padding));
        }
        if !self.split_ratio.is_finite() || self.split_ratio < 1.0 {
            return Err(format!("split_ratio must be finite and >= 1, got {}", self.split_ratio));
        }
        if !(0.0..=1.0).contains(&self.reject) {
            return Err(format!("reject must be in [0, 1], got {}", self.reject));
        }
        Ok(BinarySplit {
            depth: self.depth,
            min_cell_size: self.min_cell_size,
            padding: self.padding,
            split_ratio: self.split_ratio,
            reject: self.reject,
            floor: self.floor,
            modifiers: self.modifiers,
        })
    }
}

impl Step for BinarySplit {
    fn name(&self) -> &str {
        "BinarySplit"
    }

    fn status(&self) -> &str {
        "Generating cells..."
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
