//! Benchmark profiles for the Delve dungeon generator.
//!
//! Provides pre-built pipelines shared by the benches:
//!
//! - [`bsp_pipeline`]: binary split with loot and an exit, then denoise
//! - [`cave_pipeline`]: cellular automaton joined by region detection
//! - [`wanderer_pipeline`]: random-walk carving, smoothing, trim
//! - [`SMALL`] and [`LARGE`]: the grid sizes they are measured at

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use delve_core::Dimension;
use delve_step::{Modifier, Pipeline};
use delve_steps::{
    Automaton, BinarySplit, Denoise, Exit, Loot, MindlessWanderer, RegionDetect, Trim,
};

/// A typical roguelike screen: 80x50 (4K cells).
pub const SMALL: Dimension = Dimension { w: 80, h: 50 };

/// A large map: 320x200 (64K cells).
pub const LARGE: Dimension = Dimension { w: 320, h: 200 };

/// Binary split (depth 4) with loot and an exit, then default denoise.
pub fn bsp_pipeline() -> Pipeline {
    let loot = Loot::builder()
        .items(["gold", "potion"])
        .build()
        .expect("loot profile is valid");
    let bsp = BinarySplit::builder()
        .modifier(Modifier::room(loot))
        .modifier(Modifier::room(Exit::default()))
        .build()
        .expect("bsp profile is valid");
    Pipeline::new().with(bsp).with(Denoise::default())
}

/// Cellular automaton (8 generations), every cave joined to the next.
pub fn cave_pipeline() -> Pipeline {
    let automaton = Automaton::builder()
        .generations(8)
        .build()
        .expect("cave profile is valid");
    Pipeline::new()
        .with(automaton)
        .with(RegionDetect::connecting())
}

/// Random-walk carving scaled to the grid, smoothed and trimmed.
///
/// One wanderer per 400 cells.
pub fn wanderer_pipeline(dimension: Dimension) -> Pipeline {
    let wanderers = usize::try_from(dimension.area() / 400).unwrap_or(0).max(1);
    let wanderer = MindlessWanderer::builder()
        .wanderers(wanderers)
        .max_lifetime(200)
        .build()
        .expect("wanderer profile is valid");
    Pipeline::new()
        .with(wanderer)
        .with(Denoise::smoothing())
        .with(Trim::new(1))
}
