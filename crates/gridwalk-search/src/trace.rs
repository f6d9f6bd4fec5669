//! Per-invocation instrumentation: exploration history, visit order and the
//! frontier snapshot.

use gridwalk_core::Pos;
use indexmap::IndexMap;

/// Position → 1-based finalisation sequence number, in insertion order.
pub type VisitOrder = IndexMap<Pos, u32>;

/// What one search invocation observed.
///
/// A fresh `Trace` is built for every call; after a cancelled search it
/// holds the partial state reached so far, which is diagnostic only and not
/// a completed result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    explored: Vec<Pos>,
    // Positions are not string keys, so serialise as ordered pairs.
    #[cfg_attr(feature = "serde", serde(with = "indexmap::map::serde_seq"))]
    visit_order: VisitOrder,
    frontier: Vec<Pos>,
}

impl Trace {
    /// Positions in the order they were finalised.
    #[inline]
    pub fn explored(&self) -> &[Pos] {
        &self.explored
    }

    /// The visit-order map.
    #[inline]
    pub fn visit_order(&self) -> &VisitOrder {
        &self.visit_order
    }

    /// Sequence number of `p`, if it was finalised.
    #[inline]
    pub fn visit_index(&self, p: Pos) -> Option<u32> {
        self.visit_order.get(&p).copied()
    }

    /// The frontier at the last snapshot.
    #[inline]
    pub fn frontier(&self) -> &[Pos] {
        &self.frontier
    }

    /// Whether `p` has been finalised.
    #[inline]
    pub fn is_finalized(&self, p: Pos) -> bool {
        self.visit_order.contains_key(&p)
    }

    /// Record `p` as finalised. Returns `false`, changing nothing, if it
    /// already was: sequence numbers are never reassigned.
    pub(crate) fn finalize(&mut self, p: Pos) -> bool {
        if self.visit_order.contains_key(&p) {
            return false;
        }
        self.explored.push(p);
        self.visit_order.insert(p, self.explored.len() as u32);
        true
    }

    /// Replace the frontier snapshot.
    pub(crate) fn set_frontier(&mut self, frontier: impl IntoIterator<Item = Pos>) {
        self.frontier.clear();
        self.frontier.extend(frontier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_assigns_once() {
        let mut t = Trace::default();
        assert!(t.finalize(Pos::new(0, 0)));
        assert!(t.finalize(Pos::new(0, 1)));
        assert!(!t.finalize(Pos::new(0, 0)));
        assert_eq!(t.explored(), &[Pos::new(0, 0), Pos::new(0, 1)]);
        assert_eq!(t.visit_index(Pos::new(0, 0)), Some(1));
        assert_eq!(t.visit_index(Pos::new(0, 1)), Some(2));
        assert_eq!(t.visit_index(Pos::new(5, 5)), None);
        let order: Vec<_> = t.visit_order().iter().map(|(p, n)| (*p, *n)).collect();
        assert_eq!(order, vec![(Pos::new(0, 0), 1), (Pos::new(0, 1), 2)]);
    }

    #[test]
    fn frontier_snapshot_replaces() {
        let mut t = Trace::default();
        t.set_frontier([Pos::new(1, 1), Pos::new(2, 2)]);
        t.set_frontier([Pos::new(3, 3)]);
        assert_eq!(t.frontier(), &[Pos::new(3, 3)]);
    }
}
