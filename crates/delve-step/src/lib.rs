//! Step trait, step context, and pipeline runner for Delve.
//!
//! A [`Step`] is a transform `(Grid<Tile>, context) -> Grid<Tile>`. Steps
//! are composed into a [`Pipeline`] and run strictly in order, each
//! receiving the grid the previous one produced. Room-producing steps hand
//! their rooms to [`RoomModifier`]s through the closed [`Modifier`] enum.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod modifier;
pub mod pipeline;
pub mod step;

pub use context::StepContext;
pub use error::StepError;
pub use modifier::{apply_room_modifiers, Modifier, RoomModifier};
pub use pipeline::{validate_pipeline, Pipeline, PipelineError, PipelineReport};
pub use step::Step;
