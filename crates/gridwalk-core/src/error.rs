//! Error types for grid construction and endpoint placement.

use std::error::Error;
use std::fmt;

use crate::geom::{Bounds, Pos};

/// Errors from the checked placement methods on
/// [`GridModel`](crate::GridModel).
///
/// The grid is never mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// The grid size.
        bounds: Bounds,
    },
    /// The position is occupied by an obstacle.
    Obstacle {
        /// The offending position.
        pos: Pos,
    },
    /// The position is already used by the other endpoint.
    Occupied {
        /// The offending position.
        pos: Pos,
    },
    /// A row of a parsed grid has a different width from the first row.
    RaggedRow {
        /// Zero-based index of the row.
        row: i32,
    },
    /// A parsed grid contains a character that is not a cell glyph.
    UnknownGlyph {
        /// The character.
        ch: char,
        /// Where it was found.
        pos: Pos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the {bounds} grid")
            }
            Self::Obstacle { pos } => write!(f, "position {pos} is an obstacle"),
            Self::Occupied { pos } => {
                write!(f, "position {pos} is already used by the other endpoint")
            }
            Self::RaggedRow { row } => write!(f, "row {row} has a different width"),
            Self::UnknownGlyph { ch, pos } => write!(f, "unknown cell glyph {ch:?} at {pos}"),
        }
    }
}

impl Error for GridError {}

/// Errors detected by [`GridConfig::validate`](crate::GridConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Rows or columns is zero.
    EmptyGrid,
    /// `rows * cols` does not fit the grid's index space.
    TooLarge {
        /// Configured rows.
        rows: u32,
        /// Configured columns.
        cols: u32,
    },
    /// Obstacle probability is NaN, infinite, or outside `[0, 1]`.
    InvalidProbability {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells is too large")
            }
            Self::InvalidProbability { value } => {
                write!(f, "obstacle probability must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
