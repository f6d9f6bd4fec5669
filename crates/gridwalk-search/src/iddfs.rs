use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::dls::{DepthOutcome, depth_limited};
use crate::engine::{STOPPED_INFO, SearchEngine};
use crate::outcome::SearchResult;
use crate::sink::{Notifier, ProgressSink};
use crate::trace::Trace;
use crate::traits::Pather;

impl<P: Pather + ?Sized> SearchEngine<'_, P> {
    /// Iterative deepening: depth-limited passes with limits `0`,
    /// `1`, ... `max_depth - 1` until one finds the target.
    ///
    /// The trace is reset before each pass, so afterwards it describes the
    /// last pass only. A successful result has as many cells as a
    /// breadth-first path. Deepening stops early once a pass exhausts every
    /// reachable cell without touching its limit.
    pub fn iddfs(
        &mut self,
        start: Pos,
        target: Pos,
        max_depth: u32,
        sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        let algorithm = Algorithm::IterativeDeepening { max_depth };
        self.invoke(algorithm, start, target, sink, |grid, trace, notifier| {
            iterative_deepening(grid, start, target, max_depth, trace, notifier)
        })
    }
}

fn iterative_deepening<P: Pather + ?Sized>(
    grid: &P,
    start: Pos,
    target: Pos,
    max_depth: u32,
    trace: &mut Trace,
    notifier: &mut Notifier<'_>,
) -> SearchResult {
    for limit in 0..max_depth {
        if notifier.is_cancelled() {
            notifier.step(trace, &[], || STOPPED_INFO.into());
            return SearchResult::Cancelled;
        }
        *trace = Trace::default();
        log::trace!("iterative deepening: limit {limit}");

        match depth_limited(grid, start, target, limit, trace, notifier) {
            DepthOutcome::Found(path) => {
                notifier.step(trace, &path, || {
                    format!("Found at depth {limit}! Path length: {}", path.len())
                });
                return SearchResult::Found(path);
            }
            DepthOutcome::Cancelled => return SearchResult::Cancelled,
            DepthOutcome::Exhausted => {
                log::trace!("iterative deepening: component exhausted at limit {limit}");
                return SearchResult::NotFound;
            }
            DepthOutcome::CutOff => {
                if limit + 1 < max_depth {
                    notifier.step(trace, &[], || format!("Trying depth limit: {}", limit + 1));
                }
            }
        }
    }
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
    fn matches_bfs_length() {
        let g = GridModel::with_seed(15, 15, 0.2, 11);
        let mut engine = SearchEngine::new(&g);
        let (start, target) = (p(0, 0), p(14, 14));
        let bfs = engine.bfs(start, target, None);
        let iddfs = engine.iddfs(start, target, 100, None);
        assert_eq!(bfs.is_found(), iddfs.is_found());
        if let (Some(b), Some(i)) = (bfs.path(), iddfs.path()) {
            assert_eq!(b.len(), i.len());
            assert!(is_valid_path(&g, i));
        }
    }

    #[test]
    fn max_depth_bounds_the_limits() {
        let g = GridModel::empty(5, 5);
        let mut engine = SearchEngine::new(&g);
        // Distance 4 needs the pass with limit 4, which max_depth 4 excludes.
        assert_eq!(engine.iddfs(p(0, 0), p(4, 4), 4, None), SearchResult::NotFound);
        assert_eq!(
            engine.iddfs(p(0, 0), p(4, 4), 5, None).path().map(<[Pos]>::len),
            Some(5)
        );
        assert_eq!(engine.iddfs(p(0, 0), p(0, 0), 0, None), SearchResult::NotFound);
        assert!(engine.trace().explored().is_empty());
    }

    #[test]
    fn trace_describes_last_pass() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        engine.iddfs(p(0, 0), p(2, 2), 10, None);
        // The successful pass at limit 2 finalises each cell once.
        let explored = engine.trace().explored();
        assert_eq!(explored.first(), Some(&p(0, 0)));
        assert_eq!(explored.last(), Some(&p(2, 2)));
        assert_eq!(engine.trace().visit_index(p(0, 0)), Some(1));
    }

    #[test]
    fn stops_when_component_is_exhausted() {
        let g = GridModel::parse(
            "S.#.
             ..#T",
        )
        .unwrap();
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        let result = engine.iddfs(p(0, 0), p(1, 3), 1000, Some(&mut rec));
        assert_eq!(result, SearchResult::NotFound);
        // Limits 0 to 2 cut off; limit 3 reaches every cell of the component.
        let deepenings = rec
            .steps()
            .iter()
            .filter(|s| s.info.starts_with("Trying depth limit"))
            .count();
        assert_eq!(deepenings, 3);
        assert_eq!(engine.trace().explored().len(), 4);
    }

    #[test]
    fn progress_text() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        engine.iddfs(p(0, 0), p(2, 2), 10, Some(&mut rec));
        assert!(rec.steps().iter().any(|s| s.info == "Trying depth limit: 1"));
        assert!(rec.steps().iter().any(|s| s.info == "Trying depth limit: 2"));
        let last = rec.last().unwrap();
        assert_eq!(last.info, "Found at depth 2! Path length: 3");
        assert_eq!(last.algorithm.name(), "Iterative Deepening DFS (IDDFS)");
    }

    #[test]
    fn cancelled_between_passes() {
        let g = GridModel::empty(8, 8);
        let mut engine = SearchEngine::new(&g);
        // One poll for the first pass, one for its only expansion, then the
        // poll before the second pass cancels.
        let mut sink = CancelAfter::wrap(2, Recorder::new());
        assert_eq!(
            engine.iddfs(p(0, 0), p(7, 7), 20, Some(&mut sink)),
            SearchResult::Cancelled
        );
        assert_eq!(engine.trace().explored(), &[p(0, 0)]);
        assert_eq!(sink.inner().last().unwrap().info, "Stopped by user");
    }
}
