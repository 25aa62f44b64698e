//! The eight compass directions.

use crate::coord::Coordinate;
use rand::Rng;

/// A compass direction with a unit relative vector.
///
/// The declaration order is load-bearing: directions run clockwise from
/// north-west, so the opposite of the direction at index `i` is always the
/// one at index `(i + 4) % 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `(-1, -1)`
    NorthWest = 0,
    /// `(0, -1)`
    North = 1,
    /// `(1, -1)`
    NorthEast = 2,
    /// `(1, 0)`
    East = 3,
    /// `(1, 1)`
    SouthEast = 4,
    /// `(0, 1)`
    South = 5,
    /// `(-1, 1)`
    SouthWest = 6,
    /// `(-1, 0)`
    West = 7,
}

impl Direction {
    /// Every direction, clockwise from north-west.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// `N, E, S, W`.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonals.
    pub const ORDINALS: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Unit vector for this direction.
    pub fn rel(self) -> Coordinate {
        match self {
            Direction::NorthWest => Coordinate::new(-1, -1),
            Direction::North => Coordinate::new(0, -1),
            Direction::NorthEast => Coordinate::new(1, -1),
            Direction::East => Coordinate::new(1, 0),
            Direction::SouthEast => Coordinate::new(1, 1),
            Direction::South => Coordinate::new(0, 1),
            Direction::SouthWest => Coordinate::new(-1, 1),
            Direction::West => Coordinate::new(-1, 0),
        }
    }

    /// Position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// `true` for north, east, south and west.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 1
    }

    /// Look up the direction whose unit vector is `(dx, dy)`.
    pub fn from_rel(dx: i32, dy: i32) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| {
            let rel = d.rel();
            rel.x == dx && rel.y == dy
        })
    }

    /// A uniformly random direction out of all eight.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// A uniformly random cardinal direction.
    pub fn random_cardinal<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::CARDINALS[rng.random_range(0..Self::CARDINALS.len())]
    }
}
