use std::collections::VecDeque;

use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::engine::{STOPPED_INFO, SearchEngine, found_info};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::table::ParentMap;
use crate::trace::Trace;
use crate::traits::Pather;

impl<P: Pather + ?Sized> SearchEngine<'_, P> {
    /// Breadth-first search from `start` to `target`.
    ///
    /// The path found has the minimum number of moves. Among equally short
    /// paths, the one whose cells were enqueued first (by neighbour priority
    /// of their parents) wins.
    pub fn bfs(
        &mut self,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        self.invoke(Algorithm::BreadthFirst, start, target, sink, |grid, trace, notifier| {
            breadth_first(grid, start, target, trace, notifier)
        })
    }
}

fn breadth_first<P: Pather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> SearchResult {
    let mut parents = ParentMap::new(grid.bounds());
    let mut queue: VecDeque<Pos> = VecDeque::new();
    parents.insert_root(start);
    queue.push_back(start);

    let mut nbuf = Vec::with_capacity(6);

    while !queue.is_empty() {
        if notifier.is_cancelled() {
            trace.set_frontier(queue.iter().copied());
            notifier.step(trace, &[], || STOPPED_INFO.into());
            return SearchResult::Cancelled;
        }
        let Some(current) = queue.pop_front() else {
            break;
        };
        trace.finalize(current);

        if current == target {
            let path = parents.path_to(current);
            trace.set_frontier(queue.iter().copied());
            notifier.step(trace, &path, || found_info(&path));
            return SearchResult::Found(path);
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &np in nbuf.iter() {
            if parents.contains(np) {
                continue;
            }
            parents.insert_from(np, current);
            queue.push_back(np);
        }

        if notifier.is_active() {
            trace.set_frontier(queue.iter().copied());
            let explored = trace.explored().len();
            notifier.step(trace, &[], || format!("Explored: {explored} nodes"));
        }
    }

    trace.set_frontier([]);
    SearchResult::NotFound
}
