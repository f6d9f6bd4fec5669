use gridwalk_core::{Bounds, GridModel, Pos};

use crate::cost::step_cost;

/// Minimal search interface: the grid size and neighbour
/// enumeration.
pub trait Pather {
    /// The rectangle every position handed to the search lies in.
    fn bounds(&self) -> Bounds;

    /// Append the walkable neighbours of `p` into `buf`, in the order the
    /// search should consider them. The caller clears `buf` before calling.
    ///
    /// Bidirectional search assumes the relation is symmetric.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Pos, to: Pos) -> f64;
}

impl Pather for GridModel {
    #[inline]
    fn bounds(&self) -> Bounds {
        GridModel::bounds(self)
    }

    #[inline]
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.neighbors_into(p, buf);
    }
}

impl WeightedPather for GridModel {
    #[inline]
    fn cost(&self, from: Pos, to: Pos) -> f64 {
        step_cost(from, to)
    }
}
