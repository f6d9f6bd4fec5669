//! Uninformed search over a [`GridModel`](gridwalk_core::GridModel).
//!
//! [`SearchEngine`] binds a grid and runs one of six strategies:
//!
//! - **BFS** fewest-moves path ([`SearchEngine::bfs`])
//! - **DFS** stack-driven, priority-ordered descent ([`SearchEngine::dfs`])
//! - **UCS** cheapest path with diagonal moves costing √2 ([`SearchEngine::ucs`])
//! - **DLS** depth-first within a move budget ([`SearchEngine::dls`])
//! - **IDDFS** depth-limited passes of growing budget ([`SearchEngine::iddfs`])
//! - **Bidirectional** two breadth-first halves that meet ([`SearchEngine::bidirectional`])
//!
//! Every call returns a [`SearchResult`] (`Found`, `NotFound` or
//! `Cancelled`) and leaves a [`Trace`] of what it explored. Progress and
//! cancellation go through an optional [`ProgressSink`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, DLS, IDDFS, bidirectional |
//! | [`WeightedPather`] : [`Pather`] | UCS, [`SearchEngine::run`] |
//!
//! # Example
//!
//! ```
//! use gridwalk_search::{GridModel, Pos, SearchEngine, SearchResult};
//!
//! let grid = GridModel::empty(3, 3);
//! let mut engine = SearchEngine::new(&grid);
//! let result = engine.bfs(Pos::new(0, 0), Pos::new(2, 2), None);
//! assert_eq!(
//!     result,
//!     SearchResult::Found(vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)])
//! );
//! ```

mod algorithm;
mod bfs;
mod bidirectional;
mod cost;
mod dfs;
mod dls;
mod engine;
mod iddfs;
mod outcome;
mod sink;
mod table;
mod trace;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use cost::{DIAGONAL_COST, ORTHOGONAL_COST, is_valid_path, path_cost, step_cost};
pub use engine::SearchEngine;
pub use outcome::{SearchResult, Summary};
pub use sink::{CancelAfter, CancelToken, OnStep, ProgressSink, Recorder, Step, StepRecord};
pub use trace::{Trace, VisitOrder};
pub use traits::{Pather, WeightedPather};

pub use gridwalk_core::{Bounds, CellKind, GridModel, Pos};
