//! Tile binding tables.
//!
//! A [`TileSet`] maps tile names to canonical [`Tile`] values and exposes
//! three semantic slots: `default` (background, usually wall), `primary`
//! (usually floor), and `secondary` (an accent such as an exit). Generation
//! steps only ever ask a tileset for tiles; they never invent them.

use crate::tile::Tile;

/// Lookup of canonical tiles by name and by semantic slot.
pub trait TileSet {
    /// The background tile. Grids are usually created with this as default.
    fn default_tile(&self) -> &Tile;

    /// The most important foreground tile, typically floor.
    fn primary(&self) -> &Tile;

    /// The accent tile. Its use varies between steps.
    fn secondary(&self) -> &Tile;

    /// The tile bound to `name`, if any.
    fn get(&self, name: &str) -> Option<&Tile>;

    /// `true` if `tile` has a binding in this set.
    fn binds(&self, tile: &Tile) -> bool;
}

/// A tile paired with the render datum it is bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct TileBinding<D> {
    /// The bound tile.
    pub tile: Tile,
    /// Data a renderer uses to draw the tile.
    pub data: D,
}

impl<D> TileBinding<D> {
    /// Bind `tile` to `data`.
    pub fn new(tile: Tile, data: D) -> Self {
        Self { tile, data }
    }
}

/// A tileset binding tiles to characters, for text renderers.
///
/// Name lookup is ASCII case-insensitive, so `"floor"` finds a tile named
/// `"Floor"`.
///
/// # Examples
///
/// ```
/// use delve_core::{CharTileSet, TileSet};
///
/// let set = CharTileSet::standard();
/// let floor = set.get("floor").unwrap();
/// assert_eq!(set.glyph(floor), Some('.'));
/// assert_eq!(set.default_tile().name(), "Wall");
/// ```
#[derive(Clone, Debug)]
pub struct CharTileSet {
    bindings: Vec<TileBinding<char>>,
    default: usize,
    primary: usize,
    secondary: usize,
}

impl CharTileSet {
    /// Create a new builder.
    pub fn builder() -> CharTileSetBuilder {
        CharTileSetBuilder::new()
    }

    /// The stock set: wall `#` (default), floor `.` (primary), exit `>`
    /// (secondary), gold `$`, potion `!`.
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                TileBinding::new(Tile::solid("Wall"), '#'),
                TileBinding::new(Tile::open("Floor"), '.'),
                TileBinding::new(Tile::open("Exit"), '>'),
                TileBinding::new(Tile::open("Gold"), '$'),
                TileBinding::new(Tile::open("Potion"), '!'),
            ],
            default: 0,
            primary: 1,
            secondary: 2,
        }
    }

    /// The glyph bound to `tile`.
    pub fn glyph(&self, tile: &Tile) -> Option<char> {
        self.bindings
            .iter()
            .find(|b| b.tile == *tile)
            .map(|b| b.data)
    }

    /// The binding for `name`, case-insensitively.
    pub fn binding(&self, name: &str) -> Option<&TileBinding<char>> {
        self.bindings
            .iter()
            .find(|b| b.tile.name().eq_ignore_ascii_case(name))
    }

    /// All bindings in declaration order.
    pub fn bindings(&self) -> &[TileBinding<char>] {
        &self.bindings
    }
}

impl TileSet for CharTileSet {
    fn default_tile(&self) -> &Tile {
        &self.bindings[self.default].tile
    }

    fn primary(&self) -> &Tile {
        &self.bindings[self.primary].tile
    }

    fn secondary(&self) -> &Tile {
        &self.bindings[self.secondary].tile
    }

    fn get(&self, name: &str) -> Option<&Tile> {
        self.binding(name).map(|b| &b.tile)
    }

    fn binds(&self, tile: &Tile) -> bool {
        self.bindings.iter().any(|b| b.tile == *tile)
    }
}

/// Builder for [`CharTileSet`].
///
/// Required: at least one binding, plus the `default`, `primary` and
/// `secondary` slot names, each naming a bound tile.
#[derive(Debug, Default)]
pub struct CharTileSetBuilder {
    bindings: Vec<TileBinding<char>>,
    default: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
}

impl CharTileSetBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Bind `tile` to `glyph`.
    pub fn bind(mut self, tile: Tile, glyph: char) -> Self {
        self.bindings.push(TileBinding::new(tile, glyph));
        self
    }

    /// Name the default (background) tile.
    pub fn default_tile(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Name the primary tile.
    pub fn primary(mut self, name: impl Into<String>) -> Self {
        self.primary = Some(name.into());
        self
    }

    /// Name the secondary tile.
    pub fn secondary(mut self, name: impl Into<String>) -> Self {
        self.secondary = Some(name.into());
        self
    }

    /// Build the tileset, validating that every slot names a bound tile.
    pub fn build(self) -> Result<CharTileSet, String> {
        if self.bindings.is_empty() {
            return Err("bindings must not be empty".into());
        }
        for (i, b) in self.bindings.iter().enumerate() {
            if self.bindings[..i]
                .iter()
                .any(|other| other.tile.name().eq_ignore_ascii_case(b.tile.name()))
            {
                return Err(format!("tile '{}' is bound more than once", b.tile));
            }
        }
        let slot = |label: &str, name: Option<&String>| -> Result<usize, String> {
            let name = name.ok_or_else(|| format!("{label} is required"))?;
            self.bindings
                .iter()
                .position(|b| b.tile.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| format!("{label} '{name}' is not bound"))
        };
        let default = slot("default_tile", self.default.as_ref())?;
        let primary = slot("primary", self.primary.as_ref())?;
        let secondary = slot("secondary", self.secondary.as_ref())?;
        Ok(CharTileSet {
            bindings: self.bindings,
            default,
            primary,
            secondary,
        })
    }
}
