//! **gridwalk-core**: the static obstacle grid explored by `gridwalk-search`.
//!
//! This crate provides the grid vocabulary: positions and bounds, per-cell
//! classification, the six-direction adjacency rule, configuration and the
//! error types for checked endpoint placement.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use config::{DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_DEPTH, GridConfig};
pub use error::{ConfigError, GridError};
pub use geom::{Bounds, BoundsIter, DIRECTIONS, Pos};
pub use grid::GridModel;
