use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::engine::{STOPPED_INFO, SearchEngine, found_info};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::table::ParentMap;
use crate::trace::Trace;
use crate::traits::Pather;

impl<P: Pather + ?Sized> SearchEngine<'_, P> {
    /// Depth-first search from `start` to `target` with an explicit stack.
    ///
    /// Neighbours are pushed in reverse priority order so that they pop in
    /// priority order. The path is whatever the stack reaches first; it is
    /// not necessarily short.
    pub fn dfs(
        &mut self,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        self.invoke(Algorithm::DepthFirst, start, target, sink, |grid, trace, notifier| {
            depth_first(grid, start, target, trace, notifier)
        })
    }
}

fn depth_first<P: Pather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> SearchResult {
    // Discovered set and parent links in one.
    let mut parents = ParentMap::new(grid.bounds());
    let mut stack: Vec<Pos> = vec![start];
    parents.insert_root(start);

    let mut nbuf = Vec::with_capacity(6);

    while !stack.is_empty() {
        if notifier.is_cancelled() {
            trace.set_frontier(stack.iter().copied());
            notifier.step(trace, &[], || STOPPED_INFO.into());
            return SearchResult::Cancelled;
        }
        let Some(current) = stack.pop() else {
            break;
        };
        if !trace.finalize(current) {
            continue;
        }

        if current == target {
            let path = parents.path_to(current);
            trace.set_frontier(stack.iter().copied());
            notifier.step(trace, &path, || found_info(&path));
            return SearchResult::Found(path);
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &np in nbuf.iter().rev() {
            if parents.contains(np) {
                continue;
            }
            parents.insert_from(np, current);
            stack.push(np);
        }

        if notifier.is_active() {
            trace.set_frontier(stack.iter().copied());
            let explored = trace.explored().len();
            notifier.step(trace, &[], || format!("Explored: {explored} nodes"));
        }
    }

    trace.set_frontier([]);
    SearchResult::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::is_valid_path;
    use crate::sink::{CancelAfter, Recorder};
    use gridwalk_core::GridModel;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn follows_priority_not_shortest() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        // Right is the first legal move from the corner, so the stack runs
        // along the top row before it ever looks at the diagonal.
        assert_eq!(
            engine.dfs(p(0, 0), p(2, 2), None),
            SearchResult::Found(vec![p(0, 0), p(0, 1), p(1, 2), p(2, 2)])
        );
        assert_eq!(
            engine.trace().explored(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
    }

    #[test]
    fn pops_in_priority_order() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        engine.dfs(p(1, 1), p(9, 9), Some(&mut rec));
        // After expanding the centre the top of the stack is "up".
        let first = &rec.steps()[0];
        assert_eq!(first.frontier.last(), Some(&p(0, 1)));
        assert_eq!(engine.trace().explored()[1], p(0, 1));
        assert_eq!(engine.trace().explored().len(), 9);
    }

    #[test]
    fn long_paths_are_valid() {
        let g = GridModel::with_seed(15, 15, 0.2, 5);
        let mut engine = SearchEngine::new(&g);
        let start = p(0, 0);
        let target = p(14, 14);
        if let SearchResult::Found(path) = engine.dfs(start, target, None) {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&target));
            assert!(is_valid_path(&g, &path));
        }
    }

    #[test]
    fn not_found_explores_component() {
        let g = GridModel::parse(
            "S.#..
             ..#..
             ###..
             ....T",
        )
        .unwrap();
        let mut engine = SearchEngine::new(&g);
        assert_eq!(engine.dfs(p(0, 0), p(3, 4), None), SearchResult::NotFound);
        let mut explored = engine.trace().explored().to_vec();
        explored.sort();
        assert_eq!(explored, vec![p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn cancelled_before_first_expansion() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut sink = CancelAfter::new(0);
        assert_eq!(
            engine.dfs(p(0, 0), p(2, 2), Some(&mut sink)),
            SearchResult::Cancelled
        );
        assert!(engine.trace().explored().is_empty());
        assert_eq!(engine.trace().frontier(), &[p(0, 0)]);
    }
}
