//! Top-level error type for dungeon operations.

use std::error::Error;
use std::fmt;

use delve_step::PipelineError;

use crate::config::ConfigError;
use crate::render::RenderError;

/// Errors from constructing, generating, or rendering a dungeon.
#[derive(Debug)]
pub enum DungeonError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A pipeline failed; the grid was left as it was.
    Pipeline(PipelineError),
    /// Rendering failed.
    Render(RenderError),
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
        }
    }
}

impl Error for DungeonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Pipeline(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DungeonError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PipelineError> for DungeonError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

impl From<RenderError> for DungeonError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
