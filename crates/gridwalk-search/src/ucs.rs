use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::engine::{STOPPED_INFO, SearchEngine};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::table::{CellTable, ParentMap};
use crate::trace::Trace;
use crate::traits::WeightedPather;

/// Frontier entry, ordered so `BinaryHeap` (a max-heap) pops the lowest
/// cost first and, among equal costs, the lowest `(row, col)`.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    pos: Pos,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl<P: WeightedPather + ?Sized> SearchEngine<'_, P> {
    /// Uniform-cost search from `start` to `target`.
    ///
    /// Returns a minimum-cost path under [`WeightedPather::cost`]. Ties
    /// between frontier entries of equal cost go to the smaller position
    /// (row first, then column).
    pub fn ucs(
        &mut self,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        self.invoke(Algorithm::UniformCost, start, target, sink, |grid, trace, notifier| {
            uniform_cost(grid, start, target, trace, notifier)
        })
    }
}

fn uniform_cost<P: WeightedPather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> SearchResult {
    let bounds = grid.bounds();
    let mut parents = ParentMap::new(bounds);
    let mut best = CellTable::new(bounds, f64::INFINITY);
    // Discovered but not yet finalised.
    let mut open = CellTable::new(bounds, false);
    let mut heap: BinaryHeap<Entry> = BinaryHeap::new();

    parents.insert_root(start);
    best.set(start, 0.0);
    open.set(start, true);
    heap.push(Entry {
        cost: 0.0,
        pos: start,
    });

    let mut nbuf = Vec::with_capacity(6);

    while !heap.is_empty() {
        if notifier.is_cancelled() {
            snapshot(trace, &heap, &open, &best);
            notifier.step(trace, &[], || STOPPED_INFO.into());
            return SearchResult::Cancelled;
        }
        let Some(Entry { cost, pos: current }) = heap.pop() else {
            break;
        };
        // Stale duplicate of an already finalised position.
        if trace.is_finalized(current) {
            continue;
        }
        open.set(current, false);
        trace.finalize(current);

        if current == target {
            let path = parents.path_to(current);
            snapshot(trace, &heap, &open, &best);
            notifier.step(trace, &path, || format!("Path Found! Cost: {cost:.2}"));
            return SearchResult::Found(path);
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &np in nbuf.iter() {
            if trace.is_finalized(np) {
                continue;
            }
            let tentative = cost + grid.cost(current, np);
            if best.get(np).is_some_and(|&known| tentative >= known) {
                continue;
            }
            best.set(np, tentative);
            parents.insert_from(np, current);
            open.set(np, true);
            heap.push(Entry {
                cost: tentative,
                pos: np,
            });
        }

        if notifier.is_active() {
            snapshot(trace, &heap, &open, &best);
            let explored = trace.explored().len();
            notifier.step(trace, &[], || {
                format!("Explored: {explored} | Cost: {cost:.2}")
            });
        }
    }

    trace.set_frontier([]);
    SearchResult::NotFound
}

/// Records the open positions in the order they would be popped. Only the
/// entry carrying a position's best cost is live; older ones are stale.
fn snapshot(
    trace: &mut Trace,
    heap: &BinaryHeap<Entry>,
    open: &CellTable<bool>,
    best: &CellTable<f64>,
) {
    let mut live: Vec<Entry> = heap
        .iter()
        .filter(|e| open.get(e.pos) == Some(&true))
        .filter(|e| best.get(e.pos).is_some_and(|&c| c == e.cost))
        .copied()
        .collect();
    live.sort_unstable_by(|a, b| b.cmp(a));
    trace.set_frontier(live.into_iter().map(|e| e.pos));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::path_cost;
    use crate::sink::{OnStep, Recorder, Step};
    use gridwalk_core::GridModel;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn entry_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(Entry { cost: 2.0, pos: p(0, 0) });
        heap.push(Entry { cost: 1.0, pos: p(3, 3) });
        heap.push(Entry { cost: 1.0, pos: p(1, 5) });
        heap.push(Entry { cost: 1.0, pos: p(1, 2) });
        let order: Vec<Pos> = std::iter::from_fn(|| heap.pop().map(|e| e.pos)).collect();
        assert_eq!(order, vec![p(1, 2), p(1, 5), p(3, 3), p(0, 0)]);
    }

    #[test]
    fn prefers_diagonals() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let result = engine.ucs(p(0, 0), p(2, 2), None);
        let path = result.path().unwrap();
        assert_eq!(path, &[p(0, 0), p(1, 1), p(2, 2)]);
        assert!((path_cost(path) - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn never_costlier_than_bfs() {
        let g = GridModel::with_seed(20, 20, 0.25, 17);
        let mut engine = SearchEngine::new(&g);
        let (start, target) = (p(0, 0), p(19, 19));
        let bfs = engine.bfs(start, target, None);
        let ucs = engine.ucs(start, target, None);
        assert_eq!(bfs.is_found(), ucs.is_found());
        if let (Some(b), Some(u)) = (bfs.path(), ucs.path()) {
            assert!(path_cost(u) <= path_cost(b) + 1e-9);
        }
    }

    #[test]
    fn equal_cost_keeps_first_parent() {
        // (1, 2) costs 1 + sqrt(2) via (0, 1) or via (1, 1). (0, 1) is
        // expanded first and a tie never relinks.
        let g = GridModel::parse(
            "S..
             ...",
        )
        .unwrap();
        let mut engine = SearchEngine::new(&g);
        let result = engine.ucs(p(0, 0), p(1, 2), None);
        let path = result.path().unwrap();
        assert!((path_cost(path) - (1.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert_eq!(path, &[p(0, 0), p(0, 1), p(1, 2)]);
    }

    #[test]
    fn reports_cost_progress() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        engine.ucs(p(0, 0), p(2, 2), Some(&mut rec));
        assert_eq!(rec.steps()[0].info, "Explored: 1 | Cost: 0.00");
        assert_eq!(rec.last().unwrap().info, "Path Found! Cost: 2.83");
    }

    #[test]
    fn unreachable_target() {
        let g = GridModel::parse(
            "S#.
             ##.
             ..T",
        )
        .unwrap();
        let mut engine = SearchEngine::new(&g);
        assert_eq!(engine.ucs(p(0, 0), p(2, 2), None), SearchResult::NotFound);
        assert_eq!(engine.trace().explored(), &[p(0, 0)]);
    }

    #[test]
    fn frontier_lists_open_cells_in_pop_order() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        engine.ucs(p(1, 1), p(2, 0), Some(&mut rec));
        // Orthogonal neighbours first, then the two diagonals.
        assert_eq!(
            rec.steps()[0].frontier,
            vec![p(0, 1), p(1, 0), p(1, 2), p(2, 1), p(0, 0), p(2, 2)]
        );
        for step in rec.steps() {
            for q in &step.frontier {
                assert!(!step.explored.contains(q), "{q} is open and explored");
            }
        }
    }

    #[test]
    fn large_open_grid() {
        let g = GridModel::empty(300, 300);
        let mut engine = SearchEngine::new(&g);
        let result = engine.ucs(p(0, 0), p(299, 299), None);
        assert_eq!(result.path().map(<[Pos]>::len), Some(300));

        let mut steps = 0usize;
        let mut sink = OnStep(|_: &Step<'_>| steps += 1);
        let watched = engine.ucs(p(0, 0), p(39, 39), Some(&mut sink));
        assert_eq!(watched, engine.ucs(p(0, 0), p(39, 39), None));
        assert!(steps > 1);
    }
}
