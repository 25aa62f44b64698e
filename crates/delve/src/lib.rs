//! Delve: procedural dungeon generation from composable steps.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Delve sub-crates. For most users, adding `delve` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use delve::prelude::*;
//!
//! let mut dungeon = Dungeon::new(DungeonConfig::seeded(42), CharTileSet::standard()).unwrap();
//!
//! // Rooms joined by corridors, with an exit in one of them.
//! let bsp = BinarySplit::builder()
//!     .modifier(Modifier::room(Exit::default()))
//!     .build()
//!     .unwrap();
//! let metrics = dungeon
//!     .apply(&Pipeline::new().with(bsp).with(Denoise::smoothing()))
//!     .unwrap();
//! assert!(metrics.warnings.is_empty());
//!
//! let mut renderer = ConsoleRenderer::new(Vec::new());
//! dungeon.render(&mut renderer).unwrap();
//! let text = String::from_utf8(renderer.into_inner()).unwrap();
//! assert_eq!(text.lines().count(), 30);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `delve-core` | Coordinates, grids, rooms, tiles, tilesets |
//! | [`step`] | `delve-step` | Step trait, context, modifiers, pipeline runner |
//! | [`steps`] | `delve-steps` | Generation algorithms and post-processing |
//! | [`engine`] | `delve-engine` | Dungeon orchestrator and renderers |

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`delve-core`).
///
/// [`types::Grid`] is the sparse tile map every step transforms;
/// [`types::CharTileSet`] is the stock tileset.
pub use delve_core as types;

/// Step trait and pipeline runner (`delve-step`).
///
/// The [`step::Step`] trait is the main extension point for user-defined
/// generation logic.
pub use delve_step as step;

/// Generation algorithms (`delve-steps`).
///
/// Room producers such as [`steps::BinarySplit`], carvers such as
/// [`steps::MindlessWanderer`], and post-processing such as
/// [`steps::Denoise`].
pub use delve_steps as steps;

/// Dungeon orchestrator and renderers (`delve-engine`).
pub use delve_engine as engine;

/// Common imports for typical Delve usage.
///
/// ```rust
/// use delve::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use delve_core::{CharTileSet, Coordinate, Dimension, Direction, Grid, Room, Tile, TileSet};

    // Steps and pipelines
    pub use delve_step::{Modifier, Pipeline, PipelineError, RoomModifier, Step, StepContext, StepError};

    // Algorithms
    pub use delve_steps::{
        Automaton, BinarySplit, CellTree, Checkerboard, Denoise, Eval, Exit, Loot,
        MindlessWanderer, Path, RectCell, RegionDetect, Run, Trim,
    };

    // Engine
    pub use delve_engine::{
        ConsoleRenderer, Dungeon, DungeonConfig, DungeonError, RenderError, Renderer,
    };
}
