//! Integer positions ([`Coordinate`]) and extents ([`Dimension`]) on a tile grid.
//!
//! Both are `Copy` value types. Movement never mutates a coordinate in place;
//! every translation produces a new value, so coordinates are always safe to
//! use as map keys.

use crate::direction::Direction;
use rand::Rng;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Sub};

/// A position on a tile grid.
///
/// `x` grows eastward (left to right), `y` grows southward (top to bottom).
///
/// # Examples
///
/// ```
/// use delve_core::{Coordinate, Direction};
///
/// let c = Coordinate::new(10, 15);
/// assert_eq!(c.relative(Direction::South), Coordinate::new(10, 16));
/// assert_eq!(c.relative_by(Direction::East, 10), Coordinate::new(20, 15));
/// assert_eq!(c.distance(Coordinate::new(15, 15)), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column, growing eastward.
    pub x: i32,
    /// Row, growing southward.
    pub y: i32,
}

impl Coordinate {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Create a coordinate at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `direction`.
    pub fn relative(self, direction: Direction) -> Self {
        self.relative_by(direction, 1)
    }

    /// The coordinate `spaces` steps away in `direction`.
    pub fn relative_by(self, direction: Direction, spaces: i32) -> Self {
        let rel = direction.rel();
        Self::new(self.x + rel.x * spaces, self.y + rel.y * spaces)
    }

    /// The four cardinal neighbours in `N, E, S, W` order, unfiltered.
    pub fn relatives(self) -> [Coordinate; 4] {
        Direction::CARDINALS.map(|d| self.relative(d))
    }

    /// All eight neighbours that fall inside `bounds`, in [`Direction::ALL`] order.
    pub fn neighbours_in(self, bounds: Dimension) -> SmallVec<[Coordinate; 8]> {
        Direction::ALL
            .iter()
            .map(|&d| self.relative(d))
            .filter(|&c| bounds.contains(c))
            .collect()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Coordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The direction to travel from `self` toward `other`.
    ///
    /// Each axis of `other - self` is clamped to `{-1, 0, 1}` and matched
    /// against the eight unit vectors. Returns `None` when the coordinates
    /// coincide.
    pub fn direction_to(self, other: Coordinate) -> Option<Direction> {
        let dx = (other.x - self.x).clamp(-1, 1);
        let dy = (other.y - self.y).clamp(-1, 1);
        Direction::from_rel(dx, dy)
    }

    /// Reinterpret this coordinate as a `x` by `y` dimension.
    pub fn to_dimension(self) -> Dimension {
        Dimension::new(self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Offsetting by a dimension yields the far (bottom-right, exclusive) corner.
impl Add<Dimension> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Dimension) -> Coordinate {
        Coordinate::new(self.x + rhs.w, self.y + rhs.h)
    }
}

impl Sub<Dimension> for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Dimension) -> Coordinate {
        Coordinate::new(self.x - rhs.w, self.y - rhs.h)
    }
}

/// A width and height, in tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Width (extent along `x`).
    pub w: i32,
    /// Height (extent along `y`).
    pub h: i32,
}

impl Dimension {
    /// Create a `w` by `h` dimension.
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Create an `n` by `n` dimension.
    pub const fn square(n: i32) -> Self {
        Self { w: n, h: n }
    }

    /// Number of cells covered.
    pub fn area(self) -> i32 {
        self.w * self.h
    }

    /// The center cell, rounding toward the origin.
    pub fn center(self) -> Coordinate {
        Coordinate::new(self.w / 2, self.h / 2)
    }

    /// Side of the largest square that fits inside this dimension.
    pub fn largest_square(self) -> i32 {
        self.w.min(self.h)
    }

    /// `true` if either side is zero or negative.
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// `true` if `0 <= c.x < w` and `0 <= c.y < h`.
    pub fn contains(self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.w && c.y >= 0 && c.y < self.h
    }

    /// A uniformly random coordinate inside this dimension, pulled in from the
    /// edges by `padding`.
    ///
    /// Each axis draws from `[0, side)` and clamps the result to
    /// `[padding, side - padding]`. Negative padding is treated as zero.
    /// Returns `None` when that clamp range is empty, i.e. when the padding
    /// does not fit.
    pub fn random_coordinate<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        padding: i32,
    ) -> Option<Coordinate> {
        let padding = padding.max(0);
        if padding > self.w - padding || padding > self.h - padding {
            return None;
        }
        let x = if self.w > 0 { rng.random_range(0..self.w) } else { 0 };
        let y = if self.h > 0 { rng.random_range(0..self.h) } else { 0 };
        Some(Coordinate::new(
            x.clamp(padding, self.w - padding),
            y.clamp(padding, self.h - padding),
        ))
    }

    /// A dimension drawn uniformly per axis from the inclusive range `[min, max]`.
    ///
    /// Returns `None` if `min` exceeds `max` on either axis.
    pub fn random_between<R: Rng + ?Sized>(
        rng: &mut R,
        min: Dimension,
        max: Dimension,
    ) -> Option<Dimension> {
        if min.w > max.w || min.h > max.h {
            return None;
        }
        Some(Dimension::new(
            rng.random_range(min.w..=max.w),
            rng.random_range(min.h..=max.h),
        ))
    }
}

impl From<(i32, i32)> for Dimension {
    fn from((w, h): (i32, i32)) -> Self {
        Self::new(w, h)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl Add for Dimension {
    type Output = Dimension;

    fn add(self, rhs: Dimension) -> Dimension {
        Dimension::new(self.w + rhs.w, self.h + rhs.h)
    }
}

impl Sub for Dimension {
    type Output = Dimension;

    fn sub(self, rhs: Dimension) -> Dimension {
        Dimension::new(self.w - rhs.w, self.h - rhs.h)
    }
}
