//! Errors raised by individual steps.

use delve_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors from a single step's `process()`.
///
/// Wrapped in [`PipelineError::StepFailed`](crate::PipelineError::StepFailed)
/// by the pipeline runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A grid read, write, or merge went out of bounds.
    Grid(GridError),
    /// The step's parameters cannot work on this grid.
    InvalidConfig {
        /// Name of the rejecting step.
        step: String,
        /// What is wrong.
        reason: String,
    },
    /// A tile name has no binding in the tileset.
    UnknownTile {
        /// The name that failed to resolve.
        name: String,
    },
    /// A bounded loop ran out of attempts before finishing.
    Exhausted {
        /// Name of the step that gave up.
        step: String,
        /// How many attempts were made.
        attempts: usize,
    },
    /// Catch-all for failures reported by user-supplied callbacks.
    Failed {
        /// Name of the failing step.
        step: String,
        /// Human-readable description.
        reason: String,
    },
}

impl StepError {
    /// Shorthand for [`StepError::InvalidConfig`].
    pub fn invalid_config(step: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            step: step.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid access failed: {e}"),
            Self::InvalidConfig { step, reason } => {
                write!(f, "invalid configuration for '{step}': {reason}")
            }
            Self::UnknownTile { name } => write!(f, "no tile bound to name '{name}'"),
            Self::Exhausted { step, attempts } => {
                write!(f, "step '{step}' gave up after {attempts} attempts")
            }
            Self::Failed { step, reason } => write!(f, "step '{step}' failed: {reason}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
