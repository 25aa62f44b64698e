//! Sparse, bounded 2D storage.
//!
//! A [`Grid`] only stores the cells that were explicitly written. Every other
//! in-bounds coordinate reads as the grid's default value. Iteration visits
//! explicit cells only, in insertion order.

use crate::coord::{Coordinate, Dimension};
use crate::error::GridError;
use indexmap::IndexMap;
use rand::Rng;

/// A bounded, sparse map from [`Coordinate`] to `T` with a default value.
///
/// Bounds are `[0, w) x [0, h)`. Reads and writes outside them fail with
/// [`GridError::OutOfBounds`].
///
/// # Examples
///
/// ```
/// use delve_core::{Coordinate, Dimension, Grid};
///
/// let mut grid = Grid::new(Dimension::new(4, 4), 0u8);
/// grid.set(Coordinate::new(1, 2), 7).unwrap();
/// assert_eq!(*grid.get(Coordinate::new(1, 2)).unwrap(), 7);
/// assert_eq!(*grid.get(Coordinate::new(0, 0)).unwrap(), 0);
/// assert!(grid.get(Coordinate::new(4, 0)).is_err());
/// assert_eq!(grid.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    dimension: Dimension,
    default: T,
    cells: IndexMap<Coordinate, T>,
}

impl<T> Grid<T> {
    /// Create an empty grid of the given size.
    pub fn new(dimension: Dimension, default: T) -> Self {
        Self {
            dimension,
            default,
            cells: IndexMap::new(),
        }
    }

    /// Bounds of this grid.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The value unset cells read as.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// `true` if `c` lies inside the grid bounds.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.dimension.contains(c)
    }

    fn check(&self, c: Coordinate) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord: c,
                bounds: self.dimension,
            })
        }
    }

    /// Read the value at `c`, falling back to the default for unset cells.
    pub fn get(&self, c: Coordinate) -> Result<&T, GridError> {
        self.check(c)?;
        Ok(self.cells.get(&c).unwrap_or(&self.default))
    }

    /// Read the value at `c` only if it was explicitly set.
    pub fn get_explicit(&self, c: Coordinate) -> Option<&T> {
        self.cells.get(&c)
    }

    /// Write `value` at `c`, returning the previous explicit value if any.
    pub fn set(&mut self, c: Coordinate, value: T) -> Result<Option<T>, GridError> {
        self.check(c)?;
        Ok(self.cells.insert(c, value))
    }

    /// Writes without a bounds check. Callers must have validated `c`.
    pub(crate) fn insert_unchecked(&mut self, c: Coordinate, value: T) {
        self.cells.insert(c, value);
    }

    /// Forget the explicit value at `c`, so it reads as the default again.
    pub fn remove(&mut self, c: Coordinate) -> Option<T> {
        self.cells.swap_remove(&c)
    }

    /// Number of explicitly set cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cell has been explicitly set.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate explicit `(coordinate, value)` pairs.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Coordinate, T> {
        self.cells.iter()
    }

    /// Iterate explicit coordinates.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Coordinate, T> {
        self.cells.keys()
    }

    /// A uniformly random explicit entry, or `None` on an empty grid.
    pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Coordinate, &T)> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cells.len());
        self.cells.get_index(idx).map(|(c, v)| (*c, v))
    }

    /// Inclusive `(min, max)` corners of the explicit cells, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(Coordinate, Coordinate)> {
        let mut keys = self.cells.keys();
        let first = *keys.next()?;
        let (mut min, mut max) = (first, first);
        for c in keys {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Some((min, max))
    }

    /// Keep only the explicit cells for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(Coordinate, &T) -> bool) {
        self.cells.retain(|c, v| keep(*c, v));
    }

    /// Drop every explicit cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl<T: Clone> Grid<T> {
    /// Copy every explicit cell of `other` into this grid, overwriting.
    ///
    /// Nothing is written unless every key of `other` is in bounds here.
    pub fn merge(&mut self, other: &Grid<T>) -> Result<(), GridError> {
        if let Some(c) = other.keys().find(|c| !self.contains(**c)) {
            return Err(GridError::MergeOutOfBounds {
                coord: *c,
                bounds: self.dimension,
            });
        }
        for (c, v) in other.iter() {
            self.insert_unchecked(*c, v.clone());
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (&'a Coordinate, &'a T);
    type IntoIter = indexmap::map::Iter<'a, Coordinate, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid() -> Grid<char> {
        Grid::new(Dimension::new(10, 8), '#')
    }

    #[test]
    fn unset_reads_default() {
        let g = grid();
        assert_eq!(g.get(Coordinate::new(3, 3)), Ok(&'#'));
        assert!(g.is_empty());
        assert_eq!(g.get_explicit(Coordinate::new(3, 3)), None);
    }

    #[test]
    fn out_of_bounds_fails() {
        let mut g = grid();
        for c in [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(10, 0),
            Coordinate::new(0, 8),
        ] {
            assert_eq!(
                g.get(c),
                Err(GridError::OutOfBounds {
                    coord: c,
                    bounds: Dimension::new(10, 8)
                })
            );
            assert!(g.set(c, '.').is_err());
        }
        assert!(g.is_empty());
    }

    #[test]
    fn set_returns_previous_and_remove_restores_default() {
        let mut g = grid();
        let c = Coordinate::new(2, 2);
        assert_eq!(g.set(c, '.'), Ok(None));
        assert_eq!(g.set(c, '>'), Ok(Some('.')));
        assert_eq!(g.remove(c), Some('>'));
        assert_eq!(g.get(c), Ok(&'#'));
    }

    #[test]
    fn merge_copies_only_when_all_keys_fit() {
        let mut small = Grid::new(Dimension::new(3, 3), '#');
        let mut big = grid();
        big.set(Coordinate::new(1, 1), '.').unwrap();
        big.set(Coordinate::new(5, 5), '.').unwrap();

        let err = small.merge(&big).unwrap_err();
        assert!(matches!(err, GridError::MergeOutOfBounds { .. }));
        assert!(small.is_empty());

        big.remove(Coordinate::new(5, 5));
        small.merge(&big).unwrap();
        assert_eq!(small.get(Coordinate::new(1, 1)), Ok(&'.'));
    }

    #[test]
    fn bounding_box_spans_explicit_cells() {
        let mut g = grid();
        assert_eq!(g.bounding_box(), None);
        g.set(Coordinate::new(4, 1), '.').unwrap();
        g.set(Coordinate::new(2, 6), '.').unwrap();
        g.set(Coordinate::new(7, 3), '.').unwrap();
        assert_eq!(
            g.bounding_box(),
            Some((Coordinate::new(2, 1), Coordinate::new(7, 6)))
        );
    }

    #[test]
    fn random_entry_only_picks_explicit_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut g = grid();
        assert!(g.random_entry(&mut rng).is_none());
        g.set(Coordinate::new(4, 4), '.').unwrap();
        g.set(Coordinate::new(5, 4), '.').unwrap();
        for _ in 0..20 {
            let (c, _) = g.random_entry(&mut rng).unwrap();
            assert!(c == Coordinate::new(4, 4) || c == Coordinate::new(5, 4));
        }
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut g = grid();
        let order = [
            Coordinate::new(9, 0),
            Coordinate::new(0, 7),
            Coordinate::new(3, 3),
        ];
        for c in order {
            g.set(c, '.').unwrap();
        }
        let seen: Vec<_> = g.keys().copied().collect();
        assert_eq!(seen, order);
    }

    proptest! {
        #[test]
        fn set_then_get(x in 0i32..10, y in 0i32..8, v in any::<char>()) {
            let mut g = grid();
            let c = Coordinate::new(x, y);
            g.set(c, v).unwrap();
            prop_assert_eq!(g.get(c), Ok(&v));
        }

        #[test]
        fn outside_bounds_always_errors(x in -50i32..50, y in -50i32..50) {
            prop_assume!(!(0..10).contains(&x) || !(0..8).contains(&y));
            let mut g = grid();
            let c = Coordinate::new(x, y);
            prop_assert!(g.get(c).is_err());
            prop_assert!(g.set(c, '.').is_err());
        }
    }
}
