//! Connected-region discovery.
//!
//! Flood-fills the grid's non-default cells into maximal 4-connected
//! regions, seeding each fill from a random cell not yet claimed. Regions
//! are chained in discovery order through `previous`/`next` indices. Once
//! every region is known, a callback runs once per region, in order, with
//! mutable access to the grid.
//!
//! [`RegionDetect::connecting`] is a ready-made callback that carves a
//! corridor from each region to the next, joining the whole map.

use crate::grid_helpers::cardinal_neighbours;
use crate::path::Path;
use delve_core::{Coordinate, Grid, Tile};
use delve_step::{Step, StepContext, StepError};
use indexmap::IndexSet;
use rand::seq::IteratorRandom;
use std::collections::VecDeque;

/// A maximal 4-connected set of non-default cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Position in discovery order.
    pub index: usize,
    /// Cells in the region, in flood-fill order.
    pub positions: IndexSet<Coordinate>,
    /// Index of the region discovered just before this one.
    pub previous: Option<usize>,
    /// Index of the region discovered just after this one.
    pub next: Option<usize>,
}

/// Callback invoked once per region with the full region list.
pub type RegionCallback =
    Box<dyn Fn(&Region, &[Region], &mut Grid<Tile>, &mut StepContext<'_>) -> Result<(), StepError> + Send>;

/// Flood-fill region discovery with a per-region callback.
pub struct RegionDetect {
    callback: RegionCallback,
    label: &'static str,
}

impl RegionDetect {
    /// Run `callback` for each region.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Region, &[Region], &mut Grid<Tile>, &mut StepContext<'_>) -> Result<(), StepError>
            + Send
            + 'static,
    {
        Self {
            callback: Box::new(callback),
            label: "custom",
        }
    }

    /// Discover regions without touching the grid.
    pub fn inspect() -> Self {
        Self {
            label: "inspect",
            ..Self::new(|_, _, _, _| Ok(()))
        }
    }

    /// Carve a primary-tile corridor from a random cell of each region to a
    /// random cell of the next one.
    pub fn connecting() -> Self {
        Self {
            callback: Box::new(connect_to_next),
            label: "connecting",
        }
    }

    /// Discover the regions of `grid` in order.
    pub fn detect(grid: &Grid<Tile>, ctx: &mut StepContext<'_>) -> Vec<Region> {
        let default = grid.default_value();
        let mut remaining = grid.clone();
        remaining.retain(|_, t| t != default);

        let mut regions: Vec<Region> = Vec::new();
        while let Some((seed, _)) = remaining.random_entry(ctx.rng()) {
            let positions = flood(grid, seed);
            for c in &positions {
                remaining.remove(*c);
            }
            let index = regions.len();
            if let Some(last) = regions.last_mut() {
                last.next = Some(index);
            }
            regions.push(Region {
                index,
                positions,
                previous: index.checked_sub(1),
                next: None,
            });
        }
        regions
    }
}

/// Breadth-first fill over cardinal neighbours whose tile is not the default.
fn flood(grid: &Grid<Tile>, seed: Coordinate) -> IndexSet<Coordinate> {
    let default = grid.default_value();
    let mut positions = IndexSet::from([seed]);
    let mut queue = VecDeque::from([seed]);
    while let Some(c) = queue.pop_front() {
        for n in cardinal_neighbours(c, grid.dimension()) {
            let open = grid.get_explicit(n).is_some_and(|t| t != default);
            if open && positions.insert(n) {
                queue.push_back(n);
            }
        }
    }
    positions
}

fn connect_to_next(
    region: &Region,
    regions: &[Region],
    grid: &mut Grid<Tile>,
    ctx: &mut StepContext<'_>,
) -> Result<(), StepError> {
    let Some(next) = region.next.and_then(|i| regions.get(i)) else {
        return Ok(());
    };
    let from = region.positions.iter().copied().choose(ctx.rng());
    let to = next.positions.iter().copied().choose(ctx.rng());
    if let (Some(from), Some(to)) = (from, to) {
        let tile = ctx.primary();
        Path::between(from, to, 10, 0.0, tile.name()).carve(grid, ctx)?;
    }
    Ok(())
}

impl std::fmt::Debug for RegionDetect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionDetect")
            .field("callback", &self.label)
            .finish()
    }
}

impl Step for RegionDetect {
    fn name(&self) -> &str {
        "RegionDetect"
    }

    fn status(&self) -> &str {
        "Detecting regions..."
    }

    fn process(&self, mut grid: Grid<Tile>, ctx: &mut StepContext<'_>) -> Result<Grid<Tile>, StepError> {
        let regions = Self::detect(&grid, ctx);
        tracing::debug!(regions = regions.len(), "regions found");
        for region in &regions {
            (self.callback)(region, &regions, &mut grid, ctx)?;
        }
        Ok(grid)
    }
}
