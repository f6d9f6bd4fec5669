//! [`SearchEngine`]: binds a grid to the six search strategies.
//!
//! Each strategy lives in its own module as an `impl SearchEngine` block.
//! Every call builds fresh bookkeeping and a fresh [`Trace`]; the trace of
//! the most recent call stays readable through [`SearchEngine::trace`].

use gridwalk_core::{GridModel, Pos};

use crate::algorithm::Algorithm;
use crate::outcome::{SearchResult, Summary};
use crate::sink::{Notifier, ProgressSink};
use crate::trace::Trace;
use crate::traits::WeightedPather;

/// Runs searches over a borrowed grid.
///
/// The grid is never mutated. Calls take `&mut self`, so one engine serves
/// one search at a time; use one engine per thread for concurrent searches.
pub struct SearchEngine<'g, P: ?Sized = GridModel> {
    pub(crate) grid: &'g P,
    trace: Trace,
}

impl<'g, P: ?Sized> SearchEngine<'g, P> {
    /// Bind an engine to `grid`.
    pub fn new(grid: &'g P) -> Self {
        Self {
            grid,
            trace: Trace::default(),
        }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g P {
        self.grid
    }

    /// Instrumentation of the most recent call.
    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Take the instrumentation of the most recent call, leaving an empty
    /// trace behind.
    pub fn take_trace(&mut self) -> Trace {
        std::mem::take(&mut self.trace)
    }

    /// Run one search with fresh per-call state and keep its trace.
    pub(crate) fn invoke(
        &mut self,
        algorithm: Algorithm,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
        search: impl FnOnce(&'g P, &mut Trace, &mut Notifier<'_>) -> SearchResult,
    ) -> SearchResult {
        log::debug!("{algorithm}: searching {start} -> {target}");
        let mut trace = Trace::default();
        let mut notifier = Notifier::new(algorithm, sink);
        let result = search(self.grid, &mut trace, &mut notifier);
        log::debug!(
            "{algorithm}: {result} after {} expansions",
            trace.explored().len()
        );
        self.trace = trace;
        result
    }
}

impl<P: WeightedPather + ?Sized> SearchEngine<'_, P> {
    /// Run `algorithm` and summarise the outcome.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        start: Pos,
        target: Pos,
        sink: Option<&mut dyn ProgressSink>,
    ) -> Summary {
        let result = match algorithm {
            Algorithm::BreadthFirst => self.bfs(start, target, sink),
            Algorithm::DepthFirst => self.dfs(start, target, sink),
            Algorithm::UniformCost => self.ucs(start, target, sink),
            Algorithm::DepthLimited { limit } => self.dls(start, target, limit, sink),
            Algorithm::IterativeDeepening { max_depth } => {
                self.iddfs(start, target, max_depth, sink)
            }
            Algorithm::Bidirectional => self.bidirectional(start, target, sink),
        };
        let path_cost = result.path().map(|path| {
            path.windows(2)
                .map(|w| self.grid.cost(w[0], w[1]))
                .sum::<f64>()
        });
        Summary {
            algorithm,
            explored: self.trace.explored().len(),
            result,
            path_cost,
        }
    }
}

/// Standard progress text for a found path.
pub(crate) fn found_info(path: &[Pos]) -> String {
    format!("Path Found! Length: {}", path.len())
}

/// Progress text for a cancelled search.
pub(crate) const STOPPED_INFO: &str = "Stopped by user";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Recorder;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn run_summarises_every_algorithm() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        for algorithm in Algorithm::ALL {
            let summary = engine.run(algorithm, p(0, 0), p(2, 2), None);
            assert!(summary.result.is_found(), "{algorithm}");
            assert_eq!(summary.algorithm, algorithm);
            assert_eq!(summary.explored, engine.trace().explored().len());
            let cost = summary.path_cost.unwrap();
            assert!(cost >= 2.0 * std::f64::consts::SQRT_2 - 1e-9, "{algorithm}");
        }
    }

    #[test]
    fn trace_is_replaced_per_call() {
        let g = GridModel::empty(4, 4);
        let mut engine = SearchEngine::new(&g);
        engine.bfs(p(0, 0), p(3, 3), None);
        let first = engine.trace().explored().len();
        assert!(first > 1);
        engine.bfs(p(0, 0), p(0, 0), None);
        assert_eq!(engine.trace().explored(), &[p(0, 0)]);
        let taken = engine.take_trace();
        assert_eq!(taken.explored().len(), 1);
        assert!(engine.trace().explored().is_empty());
    }

    #[test]
    fn run_reports_through_sink() {
        let g = GridModel::empty(3, 3);
        let mut engine = SearchEngine::new(&g);
        let mut rec = Recorder::new();
        let summary = engine.run(Algorithm::UniformCost, p(0, 0), p(2, 2), Some(&mut rec));
        assert!(summary.result.is_found());
        let last = rec.last().unwrap();
        assert_eq!(last.algorithm, Algorithm::UniformCost);
        assert_eq!(last.path, summary.result.path().unwrap());
    }
}
