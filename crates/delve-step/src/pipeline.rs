//! Pipeline validation and sequential execution.
//!
//! [`validate_pipeline`] checks every tile name a step will ask for before
//! anything runs, so a misconfigured pipeline fails without partial output.
//! [`Pipeline::run`] then threads one grid through the steps in order.

use crate::context::StepContext;
use crate::error::StepError;
use crate::step::Step;
use delve_core::{Grid, Tile, TileSet};
use rand_chacha::ChaCha8Rng;

use std::error::Error;
use std::fmt;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from validating or running a pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// A step names a tile the tileset does not bind. Raised before any
    /// step runs.
    UnknownTile {
        /// Index of the step in the pipeline.
        index: usize,
        /// Name of the step.
        step: String,
        /// The unresolved tile name.
        tile: String,
    },
    /// A step returned an error while processing.
    StepFailed {
        /// Index of the step in the pipeline.
        index: usize,
        /// Name of the step.
        name: String,
        /// The underlying step error.
        reason: StepError,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTile { index, step, tile } => {
                write!(f, "step {index} ('{step}') uses unbound tile '{tile}'")
            }
            Self::StepFailed {
                index,
                name,
                reason,
            } => write!(f, "step {index} ('{name}') failed: {reason}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StepFailed { reason, .. } => Some(reason),
            Self::UnknownTile { .. } => None,
        }
    }
}

// ── Validation ─────────────────────────────────────────────────────

/// Check that every tile name required by `steps` resolves in `tiles`.
pub fn validate_pipeline(steps: &[Box<dyn Step>], tiles: &dyn TileSet) -> Result<(), PipelineError> {
    for (index, step) in steps.iter().enumerate() {
        if let Some(missing) = step
            .required_tiles()
            .into_iter()
            .find(|name| tiles.get(name).is_none())
        {
            return Err(PipelineError::UnknownTile {
                index,
                step: step.name().to_string(),
                tile: missing.to_string(),
            });
        }
    }
    Ok(())
}

// ── Execution ──────────────────────────────────────────────────────

/// The outcome of a successful pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// The final grid.
    pub grid: Grid<Tile>,
    /// Recoverable diagnostics raised by steps, in order.
    pub warnings: Vec<String>,
}

/// An ordered list of steps.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn with(mut self, step: impl Step) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Append an already boxed step.
    pub fn push(&mut self, step: Box<dyn Step>) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps, in execution order.
    pub fn steps(&self) -> &[Box<dyn Step>] {
        &self.steps
    }

    /// Validate, then run every step in order over `grid`.
    ///
    /// Each step fully completes before the next begins. The first failure
    /// aborts the run; the partially processed grid is dropped.
    pub fn run(
        &self,
        grid: Grid<Tile>,
        tiles: &dyn TileSet,
        rng: &mut ChaCha8Rng,
    ) -> Result<PipelineReport, PipelineError> {
        validate_pipeline(&self.steps, tiles)?;
        let mut ctx = StepContext::new(tiles, rng);
        let mut grid = grid;
        for (index, step) in self.steps.iter().enumerate() {
            tracing::info!(index, step = step.name(), "{}", step.status());
            grid = step
                .process(grid, &mut ctx)
                .map_err(|reason| PipelineError::StepFailed {
                    index,
                    name: step.name().to_string(),
                    reason,
                })?;
            tracing::debug!(index, step = step.name(), cells = grid.len(), "step complete");
        }
        Ok(PipelineReport {
            grid,
            warnings: ctx.into_warnings(),
        })
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|s| s.name()))
            .finish()
    }
}
