//! Dungeon orchestration and rendering for Delve.
//!
//! A [`Dungeon`] owns one grid, one tileset and one seeded RNG. Pipelines
//! applied to it build on whatever is already there, and a [`Renderer`]
//! turns the result into output.
//!
//! # Example
//!
//! ```ignore
//! let mut dungeon = Dungeon::new(DungeonConfig::default(), CharTileSet::standard())?;
//! dungeon.apply(&Pipeline::new().with(BinarySplit::builder().build()?))?;
//! dungeon.render(&mut ConsoleRenderer::stdout())?;
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dungeon;
pub mod error;
pub mod metrics;
pub mod render;

pub use config::{ConfigError, DungeonConfig};
pub use dungeon::Dungeon;
pub use error::DungeonError;
pub use metrics::ApplyMetrics;
pub use render::{ConsoleRenderer, RenderError, Renderer};
