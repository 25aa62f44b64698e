//! Rectangular rooms anchored on a larger grid.

use crate::coord::{Coordinate, Dimension};
use crate::error::GridError;
use crate::grid::Grid;
use crate::tile::Tile;
use rand::Rng;

/// A rectangle of tiles positioned on a parent grid.
///
/// Cells are stored zero-based internally and every cell in the rectangle is
/// explicitly filled with the floor tile at construction. All public
/// accessors take and return absolute (parent-grid) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pos: Coordinate,
    cells: Grid<Tile>,
}

impl Room {
    /// Create a room at `pos` filled with `floor`.
    ///
    /// A zero or negative `dimension` produces a room with no cells.
    pub fn new(pos: Coordinate, dimension: Dimension, floor: Tile) -> Self {
        let mut cells = Grid::new(dimension, floor.clone());
        if !dimension.is_empty() {
            for y in 0..dimension.h {
                for x in 0..dimension.w {
                    cells.insert_unchecked(Coordinate::new(x, y), floor.clone());
                }
            }
        }
        Self { pos, cells }
    }

    /// Absolute position of the top-left cell.
    pub fn pos(&self) -> Coordinate {
        self.pos
    }

    /// Width and height of the room.
    pub fn dimension(&self) -> Dimension {
        self.cells.dimension()
    }

    /// Number of cells in the room.
    pub fn area(&self) -> i32 {
        self.dimension().area()
    }

    /// Absolute center, rounding toward the top-left.
    pub fn center(&self) -> Coordinate {
        self.pos + self.dimension().center()
    }

    /// The room's cells as a grid keyed by absolute coordinates.
    ///
    /// The returned grid is sized to reach the room's far corner, so it can
    /// be merged into any parent grid that contains the room.
    pub fn tiles(&self) -> Grid<Tile> {
        let far = self.pos + self.dimension();
        let mut grid = Grid::new(
            Dimension::new(far.x.max(0), far.y.max(0)),
            self.cells.default_value().clone(),
        );
        for (c, tile) in &self.cells {
            let abs = *c + self.pos;
            if grid.contains(abs) {
                grid.insert_unchecked(abs, tile.clone());
            }
        }
        grid
    }

    /// Iterate `(absolute coordinate, tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Tile)> + '_ {
        self.cells.iter().map(move |(c, t)| (*c + self.pos, t))
    }

    /// `true` if the absolute coordinate `c` lies within the room.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.contains(c - self.pos)
    }

    /// Read the tile at absolute coordinate `c`.
    pub fn get(&self, c: Coordinate) -> Result<&Tile, GridError> {
        self.cells.get(c - self.pos)
    }

    /// Write a tile at absolute coordinate `c`.
    pub fn set(&mut self, c: Coordinate, tile: Tile) -> Result<Option<Tile>, GridError> {
        self.cells.set(c - self.pos, tile)
    }

    /// Absolute coordinates of the outer ring of cells.
    pub fn border(&self) -> Vec<Coordinate> {
        let Dimension { w, h } = self.dimension();
        self.cells
            .keys()
            .filter(|c| c.x < 1 || c.x >= w - 1 || c.y < 1 || c.y >= h - 1)
            .map(|c| *c + self.pos)
            .collect()
    }

    /// The four corner cells: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Coordinate; 4] {
        let Dimension { w, h } = self.dimension();
        let (right, bottom) = ((w - 1).max(0), (h - 1).max(0));
        [
            self.pos,
            self.pos + Coordinate::new(right, 0),
            self.pos + Coordinate::new(0, bottom),
            self.pos + Coordinate::new(right, bottom),
        ]
    }

    /// Coarse overlap test.
    ///
    /// `true` if any cell of `self` lies inside the closed rectangle spanned
    /// by `other`, which includes the row and column just past its far edge.
    /// Rooms placed with this test therefore never touch.
    pub fn overlaps(&self, other: &Room) -> bool {
        let (a, b) = (self.dimension(), other.dimension());
        if a.is_empty() || b.is_empty() {
            return false;
        }
        self.pos.x <= other.pos.x + b.w
            && self.pos.x + a.w - 1 >= other.pos.x
            && self.pos.y <= other.pos.y + b.h
            && self.pos.y + a.h - 1 >= other.pos.y
    }

    /// A uniformly random absolute cell, or `None` for an empty room.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        self.cells.random_entry(rng).map(|(c, _)| c + self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn floor() -> Tile {
        Tile::open("Floor")
    }

    #[test]
    fn construction_fills_every_cell() {
        let room = Room::new(Coordinate::new(2, 3), Dimension::new(4, 5), floor());
        assert_eq!(room.iter().count(), 20);
        assert!(room.iter().all(|(_, t)| *t == floor()));
        assert!(room.contains(Coordinate::new(2, 3)));
        assert!(room.contains(Coordinate::new(5, 7)));
        assert!(!room.contains(Coordinate::new(6, 7)));
    }

    #[test]
    fn zero_size_room_is_empty() {
        let room = Room::new(Coordinate::new(2, 3), Dimension::new(0, 5), floor());
        assert_eq!(room.iter().count(), 0);
        assert!(room.tiles().is_empty());
    }

    #[test]
    fn tiles_are_absolute_and_repeatable() {
        let room = Room::new(Coordinate::new(2, 2), Dimension::new(3, 3), floor());
        let first = room.tiles();
        let second = room.tiles();
        assert_eq!(first, second);
        assert_eq!(first.dimension(), Dimension::new(5, 5));
        assert!(first.get_explicit(Coordinate::new(2, 2)).is_some());
        assert!(first.get_explicit(Coordinate::new(0, 0)).is_none());
    }

    #[test]
    fn center_and_corners() {
        let room = Room::new(Coordinate::new(10, 4), Dimension::new(5, 3), floor());
        assert_eq!(room.center(), Coordinate::new(12, 5));
        assert_eq!(
            room.corners(),
            [
                Coordinate::new(10, 4),
                Coordinate::new(14, 4),
                Coordinate::new(10, 6),
                Coordinate::new(14, 6),
            ]
        );
    }

    #[test]
    fn border_is_outer_ring() {
        let room = Room::new(Coordinate::new(1, 1), Dimension::new(4, 4), floor());
        let border = room.border();
        assert_eq!(border.len(), 12);
        assert!(!border.contains(&Coordinate::new(2, 2)));
        assert!(!border.contains(&Coordinate::new(3, 3)));
        assert!(border.contains(&Coordinate::new(1, 1)));
        assert!(border.contains(&Coordinate::new(4, 2)));
    }

    #[test]
    fn get_and_set_are_rebased() {
        let mut room = Room::new(Coordinate::new(5, 5), Dimension::new(2, 2), floor());
        let exit = Tile::open("Exit");
        room.set(Coordinate::new(6, 6), exit.clone()).unwrap();
        assert_eq!(room.get(Coordinate::new(6, 6)), Ok(&exit));
        assert!(room.get(Coordinate::new(0, 0)).is_err());
    }

    #[test]
    fn overlap_includes_adjacent_edge() {
        let a = Room::new(Coordinate::new(0, 0), Dimension::new(4, 4), floor());
        let touching = Room::new(Coordinate::new(4, 0), Dimension::new(2, 2), floor());
        let apart = Room::new(Coordinate::new(6, 0), Dimension::new(2, 2), floor());
        let inside = Room::new(Coordinate::new(1, 1), Dimension::new(1, 1), floor());
        assert!(touching.overlaps(&a));
        assert!(!apart.overlaps(&a));
        assert!(inside.overlaps(&a));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn random_cell_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let room = Room::new(Coordinate::new(7, 2), Dimension::new(3, 2), floor());
        for _ in 0..50 {
            let c = room.random_cell(&mut rng).unwrap();
            assert!(room.contains(c));
        }
        let empty = Room::new(Coordinate::ORIGIN, Dimension::new(0, 0), floor());
        assert!(empty.random_cell(&mut rng).is_none());
    }
}
