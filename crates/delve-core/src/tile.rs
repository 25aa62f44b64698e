//! Named tile kinds.

use std::fmt;
use std::sync::Arc;

/// A tile kind: a name plus whether it blocks movement.
///
/// Two tiles are equal iff both name and solidity match. The name is
/// reference-counted so cloning a tile into thousands of grid cells is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    name: Arc<str>,
    solid: bool,
}

impl Tile {
    /// Create a tile.
    pub fn new(name: impl Into<Arc<str>>, solid: bool) -> Self {
        Self {
            name: name.into(),
            solid,
        }
    }

    /// A solid tile (wall-like).
    pub fn solid(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, true)
    }

    /// A non-solid tile (floor-like).
    pub fn open(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, false)
    }

    /// The tile's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if the tile blocks movement.
    pub fn is_solid(&self) -> bool {
        self.solid
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
