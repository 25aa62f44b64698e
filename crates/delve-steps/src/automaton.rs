//! Cellular automaton smoothing.
//!
//! Seeds every cell alive with probability `1 - fill_ratio`, then runs
//! `generations` rounds of the rule "alive iff at least `threshold` of the
//! eight in-bounds neighbours are alive", double-buffered so each round
//! reads only the previous one.
//!
//! The result ignores whatever was on the incoming grid: every cell is
//! written explicitly with either the alive or the dead tile.

use delve_core::{Coordinate, Grid, Tile};
use delve_step::{Step, StepContext, StepError};
use rand::Rng;

/// A cave-style cellular automaton.
#[derive(Clone, Debug)]
pub struct Automaton {
    generations: u32,
    fill_ratio: f64,
    threshold: u8,
    alive: String,
    dead: String,
}

/// Builder for [`Automaton`].
///
/// All fields have defaults: 20 generations, fill ratio 0.25, threshold 4,
/// alive `"floor"`, dead `"wall"`.
pub struct AutomatonBuilder {
    generations: u32,
    fill_ratio: f64,
    threshold: u8,
    alive: String,
    dead: String,
}

impl Default for Automaton {
    fn default() -> Self {
        Self {
            generations: 20,
            fill_ratio: 0.25,
            threshold: 4,
            alive: "floor".to_string(),
            dead: "wall".to_string(),
        }
    }
}

impl Automaton {
    /// Create a new builder for configuring an `Automaton` step.
    pub fn builder() -> AutomatonBuilder {
        let d = Self::default();
        AutomatonBuilder {
            generations: d.generations,
            fill_ratio: d.fill_ratio,
            threshold: d.threshold,
            alive: d.alive,
            dead: d.dead,
        }
    }
}

impl AutomatonBuilder {
    /// Number of smoothing rounds (default: 20).
    pub fn generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Probability a cell starts dead (default: 0.25).
    pub fn fill_ratio(mut self, fill_ratio: f64) -> Self {
        self.fill_ratio = fill_ratio;
        self
    }

    /// Living neighbours needed to live (default: 4). At most 8.
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Name of the alive tile (default: `"floor"`).
    pub fn alive(mut self, name: impl Into<String>) -> Self {
        self.alive = name.into();
        self
    }

    /// Name of the dead tile (default: `"wall"`).
    pub fn dead(mut self, name: impl Into<String>) -> Self {
        self.dead = name.into();
        self
    }

    /// Build the step, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `fill_ratio` is outside `[0, 1]` or `threshold`
    /// exceeds 8.
    pub fn build(self) -> Result<Automaton, String> {
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(format!(
                "fill_ratio must be in [0, 1], got {}",
                self.fill_ratio
            ));
        }
        if self.threshold > 8 {
            return Err(format!("threshold must be <= 8, got {}", self.threshold));
        }
        Ok(Automaton {
            generations: self.generations,
            fill_ratio: self.fill_ratio,
            threshold: self.threshold,
            alive: self.alive,
            dead: self.dead,
        })
    }
}

impl Step for Automaton {
    fn name(&self) -> &str {
        "Automaton"
    }

    fn status(&self) -> &str {
        "Mutating..."
    }

    fn required_tiles(&self) -> Vec<&str> {
        vec![self.alive.as_str(), self.dead.as_str()]
    }

    fn process(&self, grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let alive_tile = ctx.tile(&self.alive)?;
        let dead_tile = ctx.tile(&self.dead)?;
        let dim = grid.dimension();
        let (w, h) = (dim.w.max(0) as usize, dim.h.max(0) as usize);

        let mut current = vec![false; w * h];
        for cell in current.iter_mut() {
            *cell = ctx.rng().random::<f64>() > self.fill_ratio;
        }

        let mut next = vec![false; w * h];
        for _ in 0..self.generations {
            for y in 0..h {
                for x in 0..w {
                    let c = Coordinate::new(x as i32, y as i32);
                    let count = c
                        .neighbours_in(dim)
                        .iter()
                        .filter(|n| current[n.y as usize * w + n.x as usize])
                        .count();
                    next[y * w + x] = count >= usize::from(self.threshold);
                }
            }
            std::mem::swap(&mut current, &mut next);
        }

        let mut out = Grid::new(dim, grid.default_value().clone());
        for y in 0..h {
            for x in 0..w {
                let tile = if current[y * w + x] {
                    alive_tile.clone()
                } else {
                    dead_tile.clone()
                };
                out.set(Coordinate::new(x as i32, y as i32), tile)?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::TileSet;
    use delve_test_utils::{count_tile, empty_grid, grid_to_ascii, seeded_rng, tiles};

    fn run(step: &Automaton, seed: u64, w: i32, h: i32) -> Grid<Tile> {
        let set = tiles();
        let mut rng = seeded_rng(seed);
        let mut ctx = StepContext::new(&set, &mut rng);
        step.process(empty_grid(&set, w, h), &mut ctx).unwrap()
    }

    #[test]
    fn zero_generations_is_raw_seeding() {
        let step = Automaton::builder()
            .generations(0)
            .fill_ratio(0.4)
            .build()
            .unwrap();
        let grid = run(&step, 11, 12, 7);

        let mut rng = seeded_rng(11);
        let set = tiles();
        for y in 0..7 {
            for x in 0..12 {
                let expect_alive = rng.random::<f64>() > 0.4;
                let tile = grid.get(Coordinate::new(x, y)).unwrap();
                assert_eq!(tile == set.primary(), expect_alive, "({x}, {y})");
            }
        }
    }

    #[test]
    fn every_cell_is_written() {
        let grid = run(&Automaton::default(), 5, 20, 10);
        assert_eq!(grid.len(), 200);
    }

    #[test]
    fn fill_ratio_extremes() {
        let set = tiles();
        let all_alive = Automaton::builder().fill_ratio(0.0).build().unwrap();
        let grid = run(&all_alive, 1, 8, 8);
        assert_eq!(count_tile(&grid, set.primary()), 64);

        let all_dead = Automaton::builder().fill_ratio(1.0).build().unwrap();
        let grid = run(&all_dead, 1, 8, 8);
        assert_eq!(count_tile(&grid, set.primary()), 0);
    }

    #[test]
    fn corners_die_under_high_threshold() {
        // A corner has only three neighbours, so threshold 4 kills it even
        // on a fully alive board.
        let step = Automaton::builder()
            .generations(1)
            .fill_ratio(0.0)
            .threshold(4)
            .build()
            .unwrap();
        let set = tiles();
        let grid = run(&step, 1, 4, 4);
        assert_eq!(grid_to_ascii(&set, &grid), ["#..#", "....", "....", "#..#"]);
    }

    #[test]
    fn ignores_incoming_contents() {
        let set = tiles();
        let mut a = empty_grid(&set, 10, 10);
        a.set(Coordinate::new(3, 3), Tile::open("Gold")).unwrap();
        let b = empty_grid(&set, 10, 10);

        let step = Automaton::default();
        let mut rng = seeded_rng(21);
        let out_a = step.process(a, &mut StepContext::new(&set, &mut rng)).unwrap();
        let mut rng = seeded_rng(21);
        let out_b = step.process(b, &mut StepContext::new(&set, &mut rng)).unwrap();
        assert_eq!(out_a, out_b);
    }

    // ---- Builder tests ----

    #[test]
    fn builder_rejects_out_of_range() {
        assert!(Automaton::builder()
            .fill_ratio(-0.1)
            .build()
            .unwrap_err()
            .contains("fill_ratio"));
        assert!(Automaton::builder()
            .threshold(9)
            .build()
            .unwrap_err()
            .contains("threshold"));
    }
}
