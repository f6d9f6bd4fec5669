//! Grid configuration and validation.

use crate::error::ConfigError;

/// Default grid height.
pub const DEFAULT_ROWS: u32 = 15;
/// Default grid width.
pub const DEFAULT_COLS: u32 = 15;
/// Default chance that any one cell becomes an obstacle.
pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.15;
/// Default depth limit for depth-limited search.
pub const DEFAULT_DEPTH_LIMIT: u32 = 20;
/// Default maximum depth for iterative deepening.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Builder input for [`GridModel::from_config`](crate::GridModel::from_config).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of rows. Default: 15.
    pub rows: u32,
    /// Number of columns. Default: 15.
    pub cols: u32,
    /// Independent per-cell obstacle chance. Default: 0.15.
    pub obstacle_probability: f64,
    /// Seed for the obstacle RNG. `None` draws a seed from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            obstacle_probability: DEFAULT_OBSTACLE_PROBABILITY,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let too_large = self.rows > i32::MAX as u32
            || self.cols > i32::MAX as u32
            || (self.rows as u64) * (self.cols as u64) > i32::MAX as u64;
        if too_large {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let p = self.obstacle_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability { value: p });
        }
        Ok(())
    }
}
