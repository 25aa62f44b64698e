//! Generation algorithms for Delve.
//!
//! Every type here implements [`Step`](delve_step::Step) and can be pushed
//! onto a [`Pipeline`](delve_step::Pipeline). They fall into four groups:
//!
//! - **Room producers**: [`BinarySplit`], [`CellTree`] and [`RectCell`]
//!   place rooms, join them with corridors, and hand the rooms to their
//!   [`Modifier`](delve_step::Modifier)s.
//! - **Carvers**: [`Automaton`], [`MindlessWanderer`] and [`Path`] shape
//!   caves and corridors directly.
//! - **Post-processing**: [`RegionDetect`], [`Denoise`] and [`Trim`] clean up
//!   whatever came before.
//! - **Decoration and utilities**: [`Exit`] and [`Loot`] (usable as steps
//!   or room modifiers), [`Checkerboard`], [`Eval`] and [`Run`].
//!
//! All randomness is drawn from the pipeline's shared generator through
//! [`StepContext::rng`](delve_step::StepContext::rng).

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod grid_helpers;

pub mod automaton;
pub mod binary_split;
pub mod cell_tree;
pub mod checkerboard;
pub mod denoise;
pub mod eval;
pub mod exit;
pub mod loot;
pub mod path;
pub mod rect_cell;
pub mod region_detect;
pub mod trim;
pub mod wanderer;

pub use automaton::{Automaton, AutomatonBuilder};
pub use binary_split::{BinarySplit, BinarySplitBuilder, Partition};
pub use cell_tree::{CellTree, CellTreeBuilder};
pub use checkerboard::Checkerboard;
pub use denoise::Denoise;
pub use eval::{Eval, Run};
pub use exit::Exit;
pub use loot::{Loot, LootBuilder};
pub use path::{Path, PathBuilder};
pub use rect_cell::{RectCell, RectCellBuilder};
pub use region_detect::{Region, RegionCallback, RegionDetect};
pub use trim::Trim;
pub use wanderer::{MindlessWanderer, MindlessWandererBuilder};
