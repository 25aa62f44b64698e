//! Core data model for the Delve dungeon generator.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! value types every generation step operates on: positions and extents,
//! compass directions, the sparse [`Grid`], [`Room`]s, [`Tile`]s, and the
//! [`TileSet`] lookup trait.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod room;
pub mod tile;
pub mod tileset;

pub use coord::{Coordinate, Dimension};
pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use room::Room;
pub use tile::Tile;
pub use tileset::{CharTileSet, CharTileSetBuilder, TileBinding, TileSet};
