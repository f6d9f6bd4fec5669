//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are `(row, col)` pairs. Rows grow downward, columns grow to the
//! right, so "up" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on the grid.
///
/// Ordering is row-major (row first, then column), which is also the
/// secondary key used when uniform-cost search breaks cost ties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

/// Candidate moves in priority order: up, right, down, down-right, left,
/// up-left.
///
/// The set is closed under negation, so "b is a neighbour of a" holds exactly
/// when "a is a neighbour of b" for walkable cells. Bidirectional search
/// relies on that.
pub const DIRECTIONS: [Pos; 6] = [
    Pos::new(-1, 0),
    Pos::new(0, 1),
    Pos::new(1, 0),
    Pos::new(1, 1),
    Pos::new(0, -1),
    Pos::new(-1, -1),
];

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The six candidate neighbours in [`DIRECTIONS`] order, without any
    /// bounds or obstacle filtering.
    #[inline]
    pub fn neighbors_6(self) -> [Pos; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Whether `other` is one of the six candidate neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        DIRECTIONS.contains(&(other - self))
    }

    /// Whether the step from `self` to `other` is diagonal.
    #[inline]
    pub fn is_diagonal_to(self, other: Pos) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The `rows × cols` rectangle anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether there are no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies within `0 <= row < rows` and `0 <= col < cols`.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let cols = self.cols.max(1) as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Pos::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Pos,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.bounds.rows || self.bounds.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let w = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn pos_orders_row_then_col() {
        assert!(Pos::new(0, 9) < Pos::new(1, 0));
        assert!(Pos::new(2, 1) < Pos::new(2, 3));
    }

    #[test]
    fn directions_are_closed_under_reversal() {
        for d in DIRECTIONS {
            let back = Pos::ZERO - d;
            assert!(DIRECTIONS.contains(&back), "{d} has no reverse");
        }
        // Up-right and down-left are deliberately missing.
        assert!(!DIRECTIONS.contains(&Pos::new(-1, 1)));
        assert!(!DIRECTIONS.contains(&Pos::new(1, -1)));
    }

    #[test]
    fn neighbors_6_priority_order() {
        let n = Pos::new(5, 5).neighbors_6();
        assert_eq!(
            n,
            [
                Pos::new(4, 5),
                Pos::new(5, 6),
                Pos::new(6, 5),
                Pos::new(6, 6),
                Pos::new(5, 4),
                Pos::new(4, 4),
            ]
        );
    }

    #[test]
    fn adjacency_and_diagonals() {
        let p = Pos::new(2, 2);
        assert!(p.is_adjacent(Pos::new(3, 3)));
        assert!(p.is_adjacent(Pos::new(1, 1)));
        assert!(!p.is_adjacent(Pos::new(1, 3)));
        assert!(!p.is_adjacent(p));
        assert!(p.is_diagonal_to(Pos::new(3, 3)));
        assert!(!p.is_diagonal_to(Pos::new(2, 3)));
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Pos::new(0, 0)));
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, 3)));
        assert!(!b.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn bounds_index_round_trip() {
        let b = Bounds::new(4, 7);
        for p in b {
            let i = b.index(p).unwrap();
            assert_eq!(b.pos(i), p);
        }
        assert_eq!(b.index(Pos::new(4, 0)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[1], Pos::new(0, 1));
        assert_eq!(pts[5], Pos::new(1, 2));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::new(0, 5);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
        assert_eq!(Bounds::new(-3, 2), Bounds::new(0, 2));
    }
}
