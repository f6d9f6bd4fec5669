//! The [`CellKind`] classification of a single grid cell.

use std::fmt;

/// What occupies a cell.
///
/// Only [`CellKind::Obstacle`] blocks movement; the start and target cells
/// are walkable like any empty cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Start,
    Target,
}

impl CellKind {
    /// Whether a search may step onto a cell of this kind.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Single-character glyph, handy for debug dumps and test fixtures.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::Target => 'T',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            'S' => Some(Self::Start),
            'T' => Some(Self::Target),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::Target => "target",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacles_block() {
        assert!(CellKind::Empty.is_walkable());
        assert!(CellKind::Start.is_walkable());
        assert!(CellKind::Target.is_walkable());
        assert!(!CellKind::Obstacle.is_walkable());
    }

    #[test]
    fn glyphs() {
        for k in [
            CellKind::Empty,
            CellKind::Obstacle,
            CellKind::Start,
            CellKind::Target,
        ] {
            assert_eq!(CellKind::from_glyph(k.glyph()), Some(k));
        }
        assert_eq!(CellKind::from_glyph('x'), None);
    }
}
