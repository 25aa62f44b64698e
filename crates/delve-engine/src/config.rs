//! Dungeon configuration, validation, and error types.
//!
//! [`DungeonConfig`] is the input for [`Dungeon::new`](crate::Dungeon::new).
//! [`validate()`](DungeonConfig::validate) checks it before anything is
//! allocated.

use std::error::Error;
use std::fmt;

use delve_core::Dimension;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DungeonConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is not positive.
    EmptyDimension {
        /// The configured dimension.
        dimension: Dimension,
    },
    /// The name is empty or only whitespace.
    InvalidName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { dimension } => {
                write!(f, "dimension {dimension} must be at least 1x1")
            }
            Self::InvalidName => write!(f, "dungeon name must not be blank"),
        }
    }
}

impl Error for ConfigError {}

// ── DungeonConfig ──────────────────────────────────────────────────

/// Configuration for constructing a [`Dungeon`](crate::Dungeon).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonConfig {
    /// Display name. Default: `"Unnamed Dungeon"`.
    pub name: String,
    /// Grid size. Default: 50x30.
    pub dimension: Dimension,
    /// RNG seed. `None` draws one from the OS-seeded thread RNG.
    pub seed: Option<u64>,
    /// Emit an `info` event per applied pipeline. Default: true.
    pub log_steps: bool,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            name: "Unnamed Dungeon".to_string(),
            dimension: Dimension::new(50, 30),
            seed: None,
            log_steps: true,
        }
    }
}

impl DungeonConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension.is_empty() {
            return Err(ConfigError::EmptyDimension {
                dimension: self.dimension,
            });
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DungeonConfig::default();
        assert_eq!(config.name, "Unnamed Dungeon");
        assert_eq!(config.dimension, Dimension::new(50, 30));
        assert!(config.log_steps);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_dimension() {
        let config = DungeonConfig {
            dimension: Dimension::new(0, 10),
            ..DungeonConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyDimension {
                dimension: Dimension::new(0, 10)
            })
        );
    }

    #[test]
    fn rejects_blank_name() {
        let config = DungeonConfig {
            name: "   ".to_string(),
            ..DungeonConfig::seeded(1)
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidName));
        assert_eq!(ConfigError::InvalidName.to_string(), "dungeon name must not be blank");
    }
}
