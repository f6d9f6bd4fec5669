//! Search results and run summaries.

use std::fmt;

use gridwalk_core::Pos;

use crate::algorithm::Algorithm;

/// The outcome of one search invocation.
///
/// `NotFound` and `Cancelled` are distinct on purpose: a caller may retry a
/// cancelled search, but a `NotFound` is definitive for that grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A path from start to target, both included.
    Found(Vec<Pos>),
    /// The frontier (or depth range) was exhausted without reaching the
    /// target.
    NotFound,
    /// The progress sink asked the search to stop.
    Cancelled,
}

impl SearchResult {
    /// The path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consume the result, returning the path if one was found.
    #[inline]
    pub fn into_path(self) -> Option<Vec<Pos>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(path) => write!(f, "path of {} cells", path.len()),
            Self::NotFound => f.write_str("no path found"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// What [`SearchEngine::run`](crate::SearchEngine::run) reports.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// Number of finalised positions.
    pub explored: usize,
    /// Total move cost of the path, if one was found.
    pub path_cost: Option<f64>,
}

impl Summary {
    /// Number of cells on the path, if one was found.
    pub fn path_len(&self) -> Option<usize> {
        self.result.path().map(<[Pos]>::len)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.algorithm)?;
        match (&self.result, self.path_cost) {
            (SearchResult::Found(path), Some(cost)) => write!(
                f,
                "path length {}, cost {cost:.2}, {} nodes explored",
                path.len(),
                self.explored
            ),
            (SearchResult::Found(path), None) => write!(
                f,
                "path length {}, {} nodes explored",
                path.len(),
                self.explored
            ),
            (SearchResult::NotFound, _) => {
                write!(f, "no path found, {} nodes explored", self.explored)
            }
            (SearchResult::Cancelled, _) => {
                write!(f, "cancelled after {} nodes explored", self.explored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let found = SearchResult::Found(vec![Pos::new(0, 0), Pos::new(0, 1)]);
        assert!(found.is_found());
        assert_eq!(found.path().map(<[Pos]>::len), Some(2));
        assert!(SearchResult::NotFound.path().is_none());
        assert!(SearchResult::Cancelled.is_cancelled());
        assert!(!SearchResult::Cancelled.is_not_found());
        assert_eq!(SearchResult::Cancelled.into_path(), None);
    }

    #[test]
    fn summary_display() {
        let s = Summary {
            algorithm: Algorithm::BreadthFirst,
            result: SearchResult::Found(vec![Pos::new(0, 0), Pos::new(1, 1)]),
            explored: 4,
            path_cost: Some(std::f64::consts::SQRT_2),
        };
        assert_eq!(
            s.to_string(),
            "Breadth-First Search (BFS): path length 2, cost 1.41, 4 nodes explored"
        );
        assert_eq!(s.path_len(), Some(2));
        let s = Summary {
            algorithm: Algorithm::Bidirectional,
            result: SearchResult::NotFound,
            explored: 9,
            path_cost: None,
        };
        assert_eq!(
            s.to_string(),
            "Bidirectional Search: no path found, 9 nodes explored"
        );
    }
}
