//! Renderers turn a finished grid into output.
//!
//! A renderer declares which tileset it understands through the type
//! parameter of [`Renderer`], so pairing a renderer with a tileset it
//! cannot draw is rejected at compile time. Tiles the tileset has no
//! binding for are caught at render time as [`RenderError::UnboundTile`].

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use delve_core::{CharTileSet, Coordinate, Dimension, Grid, Tile, TileSet};

// ── RenderError ────────────────────────────────────────────────────

/// Errors raised while rendering.
#[derive(Debug)]
pub enum RenderError {
    /// The grid holds a tile the tileset cannot draw.
    UnboundTile {
        /// The offending tile.
        tile: Tile,
        /// Where it was found.
        at: Coordinate,
    },
    /// Writing to the output failed.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundTile { tile, at } => {
                write!(f, "tile '{tile}' at {at} has no binding in the tileset")
            }
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnboundTile { .. } => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ── Renderer ───────────────────────────────────────────────────────

/// Draws a grid using tileset `S`.
pub trait Renderer<S: TileSet> {
    /// Render every cell of `grid`, explicit or default.
    fn render(&mut self, grid: &Grid<Tile>, tiles: &S) -> Result<(), RenderError>;
}

// ── ConsoleRenderer ────────────────────────────────────────────────

/// Writes one line per row with every glyph printed twice, which makes
/// cells roughly square in a terminal.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleRenderer<io::Stdout> {
    /// Render to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer<CharTileSet> for ConsoleRenderer<W> {
    fn render(&mut self, grid: &Grid<Tile>, tiles: &CharTileSet) -> Result<(), RenderError> {
        let Dimension { w, h } = grid.dimension();
        let mut text = String::with_capacity(((2 * w.max(0) + 1) * h.max(0)) as usize);
        for y in 0..h {
            for x in 0..w {
                let at = Coordinate::new(x, y);
                let tile = grid.get(at).unwrap_or(grid.default_value());
                let glyph = tiles.glyph(tile).ok_or_else(|| RenderError::UnboundTile {
                    tile: tile.clone(),
                    at,
                })?;
                text.push(glyph);
                text.push(glyph);
            }
            text.push('\n');
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grid: &Grid<Tile>) -> Result<String, RenderError> {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.render(grid, &CharTileSet::standard())?;
        Ok(String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[test]
    fn doubles_every_glyph() {
        let mut grid = Grid::new(Dimension::new(3, 2), Tile::solid("Wall"));
        grid.set(Coordinate::new(1, 0), Tile::open("Floor")).unwrap();
        grid.set(Coordinate::new(2, 1), Tile::open("Exit")).unwrap();
        assert_eq!(render(&grid).unwrap(), "##..##\n####>>\n");
    }

    #[test]
    fn unbound_tile_writes_nothing() {
        let mut grid = Grid::new(Dimension::new(2, 2), Tile::solid("Wall"));
        grid.set(Coordinate::new(1, 1), Tile::open("Lava")).unwrap();
        let mut renderer = ConsoleRenderer::new(Vec::new());
        let err = renderer.render(&grid, &CharTileSet::standard()).unwrap_err();
        assert!(matches!(
            &err,
            RenderError::UnboundTile { tile, at } if tile.name() == "Lava" && *at == Coordinate::new(1, 1)
        ));
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = Grid::new(Dimension::new(0, 0), Tile::solid("Wall"));
        assert_eq!(render(&grid).unwrap(), "");
    }
}
