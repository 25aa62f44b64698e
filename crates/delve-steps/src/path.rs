//! Point-to-point corridor carving.
//!
//! A cursor walks from `start` toward `end` in straight cardinal runs. Each
//! move is greedy (the direction that brings the cursor closest to `end`)
//! with probability `1 - randomness`, otherwise a random cardinal. A move
//! never reverses the previous one, and never overshoots `end` along its
//! axis. The walk stops once the cursor reaches `end` or one of its
//! cardinal neighbours; `end` itself is carved last.
//!
//! Constructed via [`Path::new`] for the defaults or [`Path::builder`].

use delve_core::{Coordinate, Direction, Grid, Tile};
use delve_step::{Step, StepContext, StepError};
use rand::Rng;

/// Carves a corridor between two coordinates.
#[derive(Clone, Debug)]
pub struct Path {
    start: Coordinate,
    end: Coordinate,
    max_range: i32,
    randomness: f64,
    tile: String,
    max_moves: Option<usize>,
}

/// Builder for [`Path`].
///
/// Required fields: `start` and `end`.
pub struct PathBuilder {
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    max_range: i32,
    randomness: f64,
    tile: String,
    max_moves: Option<usize>,
}

impl Path {
    /// A greedy path with run length up to 10, carving `"floor"`.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            max_range: 10,
            randomness: 0.0,
            tile: "floor".to_string(),
            max_moves: None,
        }
    }

    /// Create a new builder for configuring a `Path` step.
    pub fn builder() -> PathBuilder {
        PathBuilder {
            start: None,
            end: None,
            max_range: 10,
            randomness: 0.0,
            tile: "floor".to_string(),
            max_moves: None,
        }
    }

    /// Corridor used internally to connect rooms. Out-of-range parameters
    /// are clamped rather than rejected.
    pub(crate) fn between(
        start: Coordinate,
        end: Coordinate,
        max_range: i32,
        randomness: f64,
        tile: &str,
    ) -> Self {
        Self {
            start,
            end,
            max_range: max_range.max(1),
            randomness: if randomness.is_finite() {
                randomness.clamp(0.0, 1.0)
            } else {
                0.0
            },
            tile: tile.to_string(),
            max_moves: None,
        }
    }

    /// Carve the corridor into `grid` in place.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidConfig`] if `start` or `end` is outside the grid,
    /// [`StepError::Exhausted`] if the move budget runs out first.
    pub fn carve(&self, grid: &mut Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        for (label, c) in [("start", self.start), ("end", self.end)] {
            if !grid.contains(c) {
                return Err(StepError::invalid_config(
                    self.name(),
                    format!("{label} {c} is outside the {} grid", grid.dimension()),
                ));
            }
        }
        let tile = ctx.tile(&self.tile)?;
        let budget = self
            .max_moves
            .unwrap_or_else(|| 4 * (grid.dimension().area().max(16) as usize));

        grid.set(self.start, tile.clone())?;
        let mut cursor = self.start;
        let mut facing: Option<Direction> = None;
        let mut moves = 0usize;

        while cursor != self.end && !self.end.relatives().contains(&cursor) {
            if moves >= budget {
                return Err(StepError::Exhausted {
                    step: self.name().to_string(),
                    attempts: moves,
                });
            }
            moves += 1;

            let reverse = facing.map(Direction::opposite);
            let direction = if ctx.rng().random::<f64>() >= self.randomness {
                greedy(cursor, self.end, reverse)
            } else {
                Direction::random_cardinal(ctx.rng())
            };
            if Some(direction) == reverse {
                continue;
            }

            let axis = match direction {
                Direction::East | Direction::West => (self.end.x - cursor.x).abs(),
                _ => (self.end.y - cursor.y).abs(),
            };
            let run = ctx.rng().random_range(1..=self.max_range).min(axis.max(1));
            let target = cursor.relative_by(direction, run);
            if !grid.contains(target) {
                continue;
            }
            for i in 1..=run {
                grid.set(cursor.relative_by(direction, i), tile.clone())?;
            }
            cursor = target;
            facing = Some(direction);
        }

        grid.set(self.end, tile)?;
        tracing::debug!(start = %self.start, end = %self.end, moves, "path carved");
        Ok(())
    }
}

/// The cardinal direction whose one-step move lands closest to `end`.
/// Ties go to the earliest direction in `N, E, S, W` order.
fn greedy(cursor: Coordinate, end: Coordinate, exclude: Option<Direction>) -> Direction {
    let mut best = Direction::North;
    let mut best_distance = f64::INFINITY;
    for d in Direction::CARDINALS {
        if Some(d) == exclude {
            continue;
        }
        let distance = cursor.relative(d).distance(end);
        if distance < best_distance {
            best = d;
            best_distance = distance;
        }
    }
    best
}

impl PathBuilder {
    /// Set the starting coordinate.
    pub fn start(mut self, start: Coordinate) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the destination coordinate.
    pub fn end(mut self, end: Coordinate) -> Self {
        self.end = Some(end);
        self
    }

    /// Longest straight run per move (default: 10). Must be >= 1.
    pub fn max_range(mut self, max_range: i32) -> Self {
        self.max_range = max_range;
        self
    }

    /// Probability of a random rather than greedy move (default: 0.0).
    pub fn randomness(mut self, randomness: f64) -> Self {
        self.randomness = randomness;
        self
    }

    /// Name of the tile to carve (default: `"floor"`).
    pub fn tile(mut self, tile: impl Into<String>) -> Self {
        self.tile = tile.into();
        self
    }

    /// Cap on walk iterations (default: four times the grid area).
    pub fn max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    /// Build the step, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `start` or `end` is not set, `max_range` is below 1,
    /// `randomness` is outside `[0, 1]`, or `max_moves` is 0.
    pub fn build(self) -> Result<Path, String> {
        let start = self.start.ok_or_else(|| "start is required".to_string())?;
        let end = self.end.ok_or_else(|| "end is required".to_string())?;
        if self.max_range < 1 {
            return Err(format!("max_range must be >= 1, got {}", self.max_range));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(format!(
                "randomness must be in [0, 1], got {}",
                self.randomness
            ));
        }
        if self.max_moves == Some(0) {
            return Err("max_moves must be >= 1".to_string());
        }
        Ok(Path {
            start,
            end,
            max_range: self.max_range,
            randomness: self.randomness,
            tile: self.tile,
            max_moves: self.max_moves,
        })
    }
}

impl Step for Path {
    fn name(&self) -> &str {
        "Path"
    }

    fn status(&self) -> &str {
        "Creating path..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.tile.as_str()]
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        self.carve(&mut grid, ctx)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::TileSet;
    use delve_test_utils::{empty_grid, seeded_rng, tiles};
    use proptest::prelude::*;

    fn floor_cells(grid: &Grid<Tile>) -> Vec<Coordinate> {
        let mut cells: Vec<_> = grid.keys().copied().collect();
        cells.sort();
        cells
    }

    #[test]
    fn straight_line_has_no_detours() {
        let set = tiles();
        let mut rng = seeded_rng(1);
        let mut ctx = StepContext::new(&set, &mut rng);
        let path = Path::builder()
            .start(Coordinate::new(0, 0))
            .end(Coordinate::new(5, 0))
            .max_range(10)
            .randomness(0.0)
            .tile("floor")
            .build()
            .unwrap();
        let grid = path.process(empty_grid(&set, 10, 10), &mut ctx).unwrap();
        let expected: Vec<_> = (0..=5).map(|x| Coordinate::new(x, 0)).collect();
        assert_eq!(floor_cells(&grid), expected);
        assert!(grid.iter().all(|(_, t)| t == set.primary()));
    }

    #[test]
    fn start_equal_to_end_carves_one_cell() {
        let set = tiles();
        let mut rng = seeded_rng(2);
        let mut ctx = StepContext::new(&set, &mut rng);
        let c = Coordinate::new(3, 3);
        let grid = Path::new(c, c).process(empty_grid(&set, 6, 6), &mut ctx).unwrap();
        assert_eq!(floor_cells(&grid), vec![c]);
    }

    #[test]
    fn out_of_bounds_endpoint_is_config_error() {
        let set = tiles();
        let mut rng = seeded_rng(3);
        let mut ctx = StepContext::new(&set, &mut rng);
        let err = Path::new(Coordinate::new(0, 0), Coordinate::new(10, 0))
            .process(empty_grid(&set, 10, 10), &mut ctx)
            .unwrap_err();
        assert!(matches!(err, StepError::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn move_budget_is_enforced() {
        let set = tiles();
        let mut rng = seeded_rng(4);
        let mut ctx = StepContext::new(&set, &mut rng);
        let path = Path::builder()
            .start(Coordinate::new(0, 0))
            .end(Coordinate::new(19, 19))
            .max_range(1)
            .max_moves(3)
            .build()
            .unwrap();
        let err = path.process(empty_grid(&set, 20, 20), &mut ctx).unwrap_err();
        assert_eq!(
            err,
            StepError::Exhausted {
                step: "Path".into(),
                attempts: 3
            }
        );
    }

    // ---- Builder tests ----

    #[test]
    fn builder_requires_endpoints() {
        let err = Path::builder().end(Coordinate::ORIGIN).build().unwrap_err();
        assert!(err.contains("start"), "{err}");
        let err = Path::builder().start(Coordinate::ORIGIN).build().unwrap_err();
        assert!(err.contains("end"), "{err}");
    }

    #[test]
    fn builder_rejects_bad_ranges() {
        let base = || Path::builder().start(Coordinate::ORIGIN).end(Coordinate::ORIGIN);
        assert!(base().max_range(0).build().unwrap_err().contains("max_range"));
        assert!(base().randomness(1.5).build().unwrap_err().contains("randomness"));
        assert!(base().randomness(f64::NAN).build().is_err());
        assert!(base().max_moves(0).build().unwrap_err().contains("max_moves"));
    }

    proptest! {
        #[test]
        fn path_connects_endpoints(
            sx in 0i32..16, sy in 0i32..16,
            ex in 0i32..16, ey in 0i32..16,
            max_range in 1i32..6,
            randomness in 0.0f64..0.5,
            seed in any::<u64>(),
        ) {
            let set = tiles();
            let mut rng = seeded_rng(seed);
            let mut ctx = StepContext::new(&set, &mut rng);
            let (start, end) = (Coordinate::new(sx, sy), Coordinate::new(ex, ey));
            let path = Path::builder()
                .start(start)
                .end(end)
                .max_range(max_range)
                .randomness(randomness)
                .build()
                .unwrap();
            let grid = path.process(empty_grid(&set, 16, 16), &mut ctx).unwrap();
            prop_assert!(grid.get_explicit(start).is_some());
            prop_assert!(grid.get_explicit(end).is_some());

            // Every carved cell except a lone start has a carved cardinal neighbour.
            if start != end {
                for c in grid.keys() {
                    let linked = c.relatives().iter().any(|n| grid.get_explicit(*n).is_some());
                    prop_assert!(linked, "{} is isolated", c);
                }
            }
        }
    }
}
