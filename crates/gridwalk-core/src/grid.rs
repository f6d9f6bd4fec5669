//! The static obstacle grid searched by the engine.
//!
//! [`GridModel`] owns the cell classification, the recorded start/target
//! endpoints and the adjacency rule. Obstacles are drawn independently per
//! cell with a fixed probability from an RNG held by the model, so that
//! [`GridModel::reset`] produces a fresh layout each time while a seeded
//! model stays reproducible end to end.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellKind;
use crate::config::GridConfig;
use crate::error::{ConfigError, GridError};
use crate::geom::{Bounds, Pos};

/// A rows × cols grid of [`CellKind`]s with at most one start and at most one
/// target.
#[derive(Clone)]
pub struct GridModel {
    bounds: Bounds,
    cells: Vec<CellKind>,
    start: Option<Pos>,
    target: Option<Pos>,
    obstacle_probability: f64,
    rng: StdRng,
}

impl GridModel {
    /// Create a grid whose obstacles are drawn from the thread RNG.
    ///
    /// `obstacle_probability` is clamped to `[0, 1]`; NaN counts as zero.
    pub fn new(rows: u32, cols: u32, obstacle_probability: f64) -> Self {
        Self::with_rng(rows, cols, obstacle_probability, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a grid whose obstacle layouts (initial and after every
    /// [`reset`](Self::reset)) are determined by `seed`.
    pub fn with_seed(rows: u32, cols: u32, obstacle_probability: f64, seed: u64) -> Self {
        Self::with_rng(rows, cols, obstacle_probability, StdRng::seed_from_u64(seed))
    }

    /// Create an obstacle-free grid.
    ///
    /// Its density is zero, so [`reset`](Self::reset) keeps it obstacle-free.
    pub fn empty(rows: u32, cols: u32) -> Self {
        Self::with_seed(rows, cols, 0.0, 0)
    }

    /// Build a grid from a validated [`GridConfig`].
    pub fn from_config(cfg: &GridConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(match cfg.seed {
            Some(seed) => Self::with_seed(cfg.rows, cfg.cols, cfg.obstacle_probability, seed),
            None => Self::new(cfg.rows, cfg.cols, cfg.obstacle_probability),
        })
    }

    /// Parse a grid from one line per row using the [`CellKind::glyph`]
    /// characters (`.`, `#`, `S`, `T`). Blank lines and surrounding
    /// whitespace are ignored.
    ///
    /// The result has zero obstacle density, so a later
    /// [`reset`](Self::reset) clears the parsed obstacles.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as u32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as u32;
        let mut grid = Self::empty(rows, cols);
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as u32 != cols {
                return Err(GridError::RaggedRow { row: r as i32 });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                match CellKind::from_glyph(ch) {
                    Some(CellKind::Empty) => {}
                    Some(CellKind::Obstacle) => grid.set_obstacle(pos),
                    Some(CellKind::Start) => grid.set_start(pos),
                    Some(CellKind::Target) => grid.set_target(pos),
                    None => return Err(GridError::UnknownGlyph { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    fn with_rng(rows: u32, cols: u32, obstacle_probability: f64, rng: StdRng) -> Self {
        let p = if obstacle_probability.is_nan() {
            0.0
        } else {
            obstacle_probability.clamp(0.0, 1.0)
        };
        if p != obstacle_probability {
            log::warn!("obstacle probability {obstacle_probability} clamped to {p}");
        }
        let bounds = Bounds::new(
            rows.min(i32::MAX as u32) as i32,
            cols.min(i32::MAX as u32) as i32,
        );
        let mut grid = Self {
            bounds,
            cells: vec![CellKind::Empty; bounds.len()],
            start: None,
            target: None,
            obstacle_probability: p,
            rng,
        };
        grid.generate_obstacles();
        grid
    }

    fn generate_obstacles(&mut self) {
        if self.obstacle_probability <= 0.0 {
            return;
        }
        for cell in self.cells.iter_mut() {
            let r: f64 = self.rng.random();
            if r < self.obstacle_probability {
                *cell = CellKind::Obstacle;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The density used for obstacle generation.
    #[inline]
    pub fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    /// The recorded start position.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The recorded target position.
    #[inline]
    pub fn target(&self) -> Option<Pos> {
        self.target
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn is_valid(&self, pos: Pos) -> bool {
        self.bounds.contains(pos)
    }

    /// Whether a search may step onto `pos`: inside the grid and not an
    /// obstacle.
    #[inline]
    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.kind(pos).is_some_and(CellKind::is_walkable)
    }

    /// Classification of `pos`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, pos: Pos) -> Option<CellKind> {
        self.bounds.index(pos).map(|i| self.cells[i])
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&k| k == CellKind::Obstacle)
            .count()
    }

    /// Walkable neighbours of `pos` in adjacency priority order.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(6);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    /// Append the walkable neighbours of `pos` to `buf`, in adjacency
    /// priority order. `buf` is not cleared.
    pub fn neighbors_into(&self, pos: Pos, buf: &mut Vec<Pos>) {
        for n in pos.neighbors_6() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Mark `pos` as the start. Does nothing if out of bounds.
    ///
    /// Overwrites whatever occupies the cell, obstacles included; use
    /// [`place_start`](Self::place_start) for a checked version. A
    /// previously recorded start cell becomes empty.
    pub fn set_start(&mut self, pos: Pos) {
        self.set_endpoint(CellKind::Start, pos);
    }

    /// Mark `pos` as the target. Does nothing if out of bounds.
    ///
    /// Same overwrite rules as [`set_start`](Self::set_start).
    pub fn set_target(&mut self, pos: Pos) {
        self.set_endpoint(CellKind::Target, pos);
    }

    /// Checked [`set_start`](Self::set_start): rejects out-of-bounds,
    /// obstacle and target positions without mutating the grid.
    pub fn place_start(&mut self, pos: Pos) -> Result<(), GridError> {
        self.check_endpoint(pos, self.target)?;
        self.set_start(pos);
        Ok(())
    }

    /// Checked [`set_target`](Self::set_target): rejects out-of-bounds,
    /// obstacle and start positions without mutating the grid.
    pub fn place_target(&mut self, pos: Pos) -> Result<(), GridError> {
        self.check_endpoint(pos, self.start)?;
        self.set_target(pos);
        Ok(())
    }

    /// Make `pos` an obstacle. Does nothing if out of bounds.
    ///
    /// Placing an obstacle on a recorded endpoint forgets that endpoint.
    pub fn set_obstacle(&mut self, pos: Pos) {
        let Some(i) = self.bounds.index(pos) else {
            return;
        };
        self.forget_endpoint(pos);
        self.cells[i] = CellKind::Obstacle;
    }

    /// Reclassify `pos` as empty. Does nothing if out of bounds.
    ///
    /// Clearing a recorded endpoint forgets it, so [`reset`](Self::reset)
    /// does not bring it back.
    pub fn clear_cell(&mut self, pos: Pos) {
        let Some(i) = self.bounds.index(pos) else {
            return;
        };
        self.forget_endpoint(pos);
        self.cells[i] = CellKind::Empty;
    }

    /// Draw a new obstacle layout with the same density and re-apply the
    /// recorded start and target.
    ///
    /// This is "new puzzle, same endpoints", not an undo: the previous
    /// obstacle layout is gone.
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.generate_obstacles();
        let start = self.start.take();
        let target = self.target.take();
        if let Some(s) = start {
            self.set_start(s);
        }
        if let Some(t) = target {
            self.set_target(t);
        }
    }

    fn set_endpoint(&mut self, kind: CellKind, pos: Pos) {
        let Some(i) = self.bounds.index(pos) else {
            return;
        };
        let (own, other) = match kind {
            CellKind::Start => (&mut self.start, &mut self.target),
            _ => (&mut self.target, &mut self.start),
        };
        if *other == Some(pos) {
            *other = None;
        }
        if let Some(old) = own.replace(pos) {
            if old != pos {
                if let Some(j) = self.bounds.index(old) {
                    if self.cells[j] == kind {
                        self.cells[j] = CellKind::Empty;
                    }
                }
            }
        }
        self.cells[i] = kind;
    }

    fn forget_endpoint(&mut self, pos: Pos) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.target == Some(pos) {
            self.target = None;
        }
    }

    fn check_endpoint(&self, pos: Pos, other: Option<Pos>) -> Result<(), GridError> {
        match self.kind(pos) {
            None => Err(GridError::OutOfBounds {
                pos,
                bounds: self.bounds,
            }),
            Some(CellKind::Obstacle) => Err(GridError::Obstacle { pos }),
            Some(_) if other == Some(pos) => Err(GridError::Occupied { pos }),
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Debug for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridModel")
            .field("bounds", &self.bounds)
            .field("start", &self.start)
            .field("target", &self.target)
            .field("obstacle_probability", &self.obstacle_probability)
            .field("obstacles", &self.obstacle_count())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GridModel {
    /// One line per row of [`CellKind::glyph`] characters; the inverse of
    /// [`GridModel::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.bounds.cols.max(1) as usize;
        for row in self.cells.chunks(cols) {
            for k in row {
                write!(f, "{}", k.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
