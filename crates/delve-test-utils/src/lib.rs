//! Test utilities and fixture steps for Delve development.
//!
//! Provides a seeded RNG, the standard tileset, an ASCII grid builder and
//! dumper for writing readable scenarios, and a handful of fixture steps
//! ([`fixtures`]) for pipeline and engine tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingModifier, FailingStep, FillStep};

use delve_core::{CharTileSet, Coordinate, Dimension, Grid, Tile, TileSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The standard character tileset.
pub fn tiles() -> CharTileSet {
    CharTileSet::standard()
}

/// An empty grid of the given size using the tileset's default tile.
pub fn empty_grid(set: &CharTileSet, w: i32, h: i32) -> Grid<Tile> {
    Grid::new(Dimension::new(w, h), set.default_tile().clone())
}

/// Build a grid from rows of glyphs.
///
/// Glyphs bound to the default tile are left unset; every other glyph is
/// set explicitly. Panics on an unbound glyph or ragged rows.
pub fn grid_from_ascii(set: &CharTileSet, rows: &[&str]) -> Grid<Tile> {
    let h = rows.len() as i32;
    let w = rows.first().map_or(0, |r| r.chars().count()) as i32;
    let mut grid = Grid::new(Dimension::new(w, h), set.default_tile().clone());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count() as i32, w, "row {y} is ragged");
        for (x, glyph) in row.chars().enumerate() {
            let tile = set
                .bindings()
                .iter()
                .find(|b| b.data == glyph)
                .map(|b| b.tile.clone())
                .unwrap_or_else(|| panic!("glyph '{glyph}' is not bound"));
            if tile != *set.default_tile() {
                grid.set(Coordinate::new(x as i32, y as i32), tile).unwrap();
            }
        }
    }
    grid
}

/// Render every cell of `grid` as one glyph per cell, `?` for unbound tiles.
pub fn grid_to_ascii(set: &CharTileSet, grid: &Grid<Tile>) -> Vec<String> {
    let Dimension { w, h } = grid.dimension();
    (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    let tile = grid.get(Coordinate::new(x, y)).unwrap();
                    set.glyph(tile).unwrap_or('?')
                })
                .collect()
        })
        .collect()
}

/// Count cells (explicit or default) holding `tile`.
pub fn count_tile(grid: &Grid<Tile>, tile: &Tile) -> usize {
    let Dimension { w, h } = grid.dimension();
    (0..h)
        .flat_map(|y| (0..w).map(move |x| Coordinate::new(x, y)))
        .filter(|c| grid.get(*c).map(|t| t == tile).unwrap_or(false))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let set = tiles();
        let rows = ["#..#", "#>$#", "####"];
        let grid = grid_from_ascii(&set, &rows);
        assert_eq!(grid.dimension(), Dimension::new(4, 3));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid_to_ascii(&set, &grid), rows);
        assert_eq!(count_tile(&grid, set.default_tile()), 8);
    }
}
