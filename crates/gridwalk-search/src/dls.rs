use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::engine::{STOPPED_INFO, SearchEngine, found_info};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::table::CellTable;
use crate::trace::Trace;
use crate::traits::Pather;

/// How a depth-limited pass ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DepthOutcome {
    Found(Vec<Pos>),
    /// Some branch was pruned at the limit; a deeper pass may succeed.
    CutOff,
    /// Everything reachable was expanded without hitting the limit.
    Exhausted,
    Cancelled,
}

impl<P: Pather + ?Sized> SearchEngine<'_, P> {
    /// Depth-first search that never goes more than `limit` moves away from
    /// `start`.
    ///
    /// If the target is within `limit` moves, some path of at most `limit`
    /// moves is returned, though not necessarily the shortest one.
    pub fn dls(
        &mut self,
        start: Pos,
        target: Pos,
        limit: u32,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        let algorithm = Algorithm::DepthLimited { limit };
        self.invoke(algorithm, start, target, sink, |grid, trace, notifier| {
            match depth_limited(grid, start, target, limit, trace, notifier) {
                DepthOutcome::Found(path) => {
                    notifier.step(trace, &path, || found_info(&path));
                    SearchResult::Found(path)
                }
                DepthOutcome::CutOff | DepthOutcome::Exhausted => SearchResult::NotFound,
                DepthOutcome::Cancelled => SearchResult::Cancelled,
            }
        })
    }
}

/// One depth-limited pass. Shared with iterative deepening, which reports
/// success in its own words, so a found path is not announced here.
///
/// The stack holds `(position, depth)`. While the limit can still prune, a
/// position is expanded again when it is reached at a strictly smaller depth
/// than any earlier expansion, which keeps the pass complete within the
/// limit. Once the limit is at least the number of cells no simple path can
/// reach it, and every position is expanded at most once. Either way each
/// position is finalised, and reported to the sink, once.
pub(crate) fn depth_limited<P: Pather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    limit: u32,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> DepthOutcome {
    let bounds = grid.bounds();
    let mut shallowest = CellTable::new(bounds, u32::MAX);
    let reexpand = (limit as usize) < bounds.len();
    // Whether reaching a position at `depth` adds nothing to what is known.
    let settled = |known: u32, depth: u32| {
        if reexpand {
            known <= depth
        } else {
            known != u32::MAX
        }
    };
    let mut stack: Vec<(Pos, u32)> = vec![(start, 0)];
    // Positions from `start` to the one being expanded.
    let mut path: Vec<Pos> = Vec::new();
    let mut cut_off = false;

    let mut nbuf = Vec::with_capacity(6);

    while !stack.is_empty() {
        if notifier.is_cancelled() {
            trace.set_frontier(stack.iter().map(|&(p, _)| p));
            notifier.step(trace, &[], || STOPPED_INFO.into());
            return DepthOutcome::Cancelled;
        }
        let Some((current, depth)) = stack.pop() else {
            break;
        };
        if shallowest.get(current).is_some_and(|&d| settled(d, depth)) {
            continue;
        }
        shallowest.set(current, depth);
        path.truncate(depth as usize);
        path.push(current);
        let fresh = trace.finalize(current);

        if current == target {
            trace.set_frontier(stack.iter().map(|&(p, _)| p));
            return DepthOutcome::Found(path);
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &np in nbuf.iter().rev() {
            if shallowest.get(np).is_some_and(|&d| settled(d, depth + 1)) {
                continue;
            }
            if depth >= limit {
                cut_off = true;
                continue;
            }
            stack.push((np, depth + 1));
        }

        if fresh && notifier.is_active() {
            trace.set_frontier(stack.iter().map(|&(p, _)| p));
            notifier.step(trace, &[], || format!("Current Depth: {depth}/{limit}"));
        }
    }

    trace.set_frontier([]);
    if cut_off {
        DepthOutcome::CutOff
    } else {
        DepthOutcome::Exhausted
    }
}
