//! The six search strategies and their display names.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::{DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_DEPTH};

/// A search strategy, with its parameter where it takes one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    DepthLimited { limit: u32 },
    IterativeDeepening { max_depth: u32 },
    Bidirectional,
}

impl Algorithm {
    /// All six strategies, parameterised with the defaults.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::DepthLimited {
            limit: DEFAULT_DEPTH_LIMIT,
        },
        Algorithm::IterativeDeepening {
            max_depth: DEFAULT_MAX_DEPTH,
        },
        Algorithm::Bidirectional,
    ];

    /// Human-readable name, as shown in progress updates.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search (BFS)",
            Self::DepthFirst => "Depth-First Search (DFS)",
            Self::UniformCost => "Uniform Cost Search (UCS)",
            Self::DepthLimited { .. } => "Depth-Limited Search (DLS)",
            Self::IterativeDeepening { .. } => "Iterative Deepening DFS (IDDFS)",
            Self::Bidirectional => "Bidirectional Search",
        }
    }

    /// Short lowercase identifier, accepted by [`FromStr`].
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::DepthLimited { .. } => "dls",
            Self::IterativeDeepening { .. } => "iddfs",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the six strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse a short name (case-insensitive). Parameterised strategies get
    /// the default depth.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.short_name() == key || (key == "bidi" && *a == Self::Bidirectional))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
