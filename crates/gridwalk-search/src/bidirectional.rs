use std::collections::VecDeque;

use gridwalk_core::{Bounds, Pos};

use crate::algorithm::Algorithm;
use crate::engine::{STOPPED_INFO, SearchEngine, found_info};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::table::ParentMap;
use crate::trace::Trace;
use crate::traits::Pather;

/// One breadth-first half of a bidirectional search.
struct Half {
    queue: VecDeque<Pos>,
    parents: ParentMap,
}

impl Half {
    fn new(root: Pos, bounds: Bounds) -> Self {
        let mut parents = ParentMap::new(bounds);
        parents.insert_root(root);
        Self {
            queue: VecDeque::from([root]),
            parents,
        }
    }
}

/// Result of advancing one half by a single expansion.
enum Advance {
    Expanded,
    /// The half had nothing left to pop.
    Idle,
    Met(Pos),
    Cancelled,
}

impl<P: Pather + ?Sized> SearchEngine<'_, P> {
    /// Two breadth-first searches, one from each end, advanced one
    /// expansion at a time in turn (forward first).
    ///
    /// Stops as soon as either side pops a cell the other side has already
    /// discovered. Finds a path whenever one exists, but not necessarily a
    /// shortest one. Relies on adjacency being symmetric: the backward half
    /// walks the same neighbour relation as the forward one.
    pub fn bidirectional(
        &mut self,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        self.invoke(Algorithm::Bidirectional, start, target, sink, |grid, trace, notifier| {
            meet_in_the_middle(grid, start, target, trace, notifier)
        })
    }
}

fn meet_in_the_middle<P: Pather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> SearchResult {
    let mut forward = Half::new(start, grid.bounds());
    let mut backward = Half::new(target, grid.bounds());
    let mut nbuf = Vec::with_capacity(6);

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        for forward_turn in [true, false] {
            let (side, other) = if forward_turn {
                (&mut forward, &backward)
            } else {
                (&mut backward, &forward)
            };
            match advance(grid, side, other, trace, notifier, &mut nbuf) {
                Advance::Expanded => {
                    if notifier.is_active() {
                        snapshot(trace, &forward, &backward);
                        let (f, b) = (forward.parents.len(), backward.parents.len());
                        notifier.step(trace, &[], || format!("Forward: {f} | Backward: {b}"));
                    }
                }
                Advance::Idle => {}
                Advance::Cancelled => {
                    snapshot(trace, &forward, &backward);
                    notifier.step(trace, &[], || STOPPED_INFO.into());
                    return SearchResult::Cancelled;
                }
                Advance::Met(meeting) => {
                    // start .. meeting, then meeting's backward parent .. target.
                    let mut path = forward.parents.path_to(meeting);
                    if let Some(next) = backward.parents.parent(meeting) {
                        path.extend(backward.parents.chain_from(next));
                    }
                    log::trace!("bidirectional: halves met at {meeting}");
                    snapshot(trace, &forward, &backward);
                    notifier.step(trace, &path, || found_info(&path));
                    return SearchResult::Found(path);
                }
            }
        }
    }

    trace.set_frontier([]);
    SearchResult::NotFound
}

fn advance<P: Pather + ?Sized>(
    grid: &P,
    side: &mut Half,
    other: &Half,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
    nbuf: &mut Vec<Pos>,
) -> Advance {
    if side.queue.is_empty() {
        return Advance::Idle;
    }
    if notifier.is_cancelled() {
        return Advance::Cancelled;
    }
    let Some(current) = side.queue.pop_front() else {
        return Advance::Idle;
    };
    trace.finalize(current);
    if other.parents.contains(current) {
        return Advance::Met(current);
    }

    nbuf.clear();
    grid.neighbors(current, nbuf);
    for &np in nbuf.iter() {
        if side.parents.contains(np) {
            continue;
        }
        side.parents.insert_from(np, current);
        side.queue.push_back(np);
    }
    Advance::Expanded
}

fn snapshot(trace: &mut Trace, forward: &Half, backward: &Half) {
    trace.set_frontier(forward.queue.iter().chain(backward.queue.iter()).copied());
}
