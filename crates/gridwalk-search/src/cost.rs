use std::f64::consts::SQRT_2;

use gridwalk_core::Pos;

use crate::traits::Pather;

/// Cost of an up, down, left or right move.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Cost of a single move between adjacent cells.
#[inline]
pub fn step_cost(from: Pos, to: Pos) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Total cost of a path under [`step_cost`]. Zero for paths of fewer than
/// two cells.
pub fn path_cost(path: &[Pos]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

/// Whether `path` is non-empty and every consecutive pair is a legal move
/// on `pather`. The first cell is not checked for walkability.
pub fn is_valid_path<P: Pather + ?Sized>(pather: &P, path: &[Pos]) -> bool {
    let Some(first) = path.first() else {
        return false;
    };
    if !pather.bounds().contains(*first) {
        return false;
    }
    let mut nbuf = Vec::with_capacity(6);
    path.windows(2).all(|w| {
        nbuf.clear();
        pather.neighbors(w[0], &mut nbuf);
        nbuf.contains(&w[1])
    })
}
