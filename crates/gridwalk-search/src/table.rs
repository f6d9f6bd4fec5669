//! Flat per-search bookkeeping tables indexed by grid position.
//!
//! Every search builds its own tables on entry, so nothing survives from one
//! invocation to the next.

use gridwalk_core::{Bounds, Pos};

/// A value per grid cell, stored row-major.
#[derive(Clone, Debug)]
pub(crate) struct CellTable<T> {
    bounds: Bounds,
    cells: Vec<T>,
}

impl<T: Clone> CellTable<T> {
    pub(crate) fn new(bounds: Bounds, fill: T) -> Self {
        Self {
            bounds,
            cells: vec![fill; bounds.len()],
        }
    }

    /// The value at `p`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn get(&self, p: Pos) -> Option<&T> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Store `v` at `p`. Out-of-bounds writes are ignored.
    #[inline]
    pub(crate) fn set(&mut self, p: Pos, v: T) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = v;
        }
    }
}

/// How a position was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Unseen,
    Root,
    From(Pos),
}

/// Parent pointers for path reconstruction. A position is "discovered" once
/// it has any link other than [`Link::Unseen`].
#[derive(Clone, Debug)]
pub(crate) struct ParentMap {
    links: CellTable<Link>,
    len: usize,
}

impl ParentMap {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            links: CellTable::new(bounds, Link::Unseen),
            len: 0,
        }
    }

    /// Record `root` as a search origin.
    pub(crate) fn insert_root(&mut self, root: Pos) {
        self.insert(root, Link::Root);
    }

    /// Record that `p` was reached from `parent`, replacing any earlier link.
    pub(crate) fn insert_from(&mut self, p: Pos, parent: Pos) {
        self.insert(p, Link::From(parent));
    }

    fn insert(&mut self, p: Pos, link: Link) {
        if !self.contains(p) && self.links.get(p).is_some() {
            self.len += 1;
        }
        self.links.set(p, link);
    }

    #[inline]
    pub(crate) fn contains(&self, p: Pos) -> bool {
        matches!(self.links.get(p), Some(Link::Root | Link::From(_)))
    }

    /// The parent of `p`, `None` for roots and undiscovered positions.
    #[inline]
    pub(crate) fn parent(&self, p: Pos) -> Option<Pos> {
        match self.links.get(p) {
            Some(Link::From(q)) => Some(*q),
            _ => None,
        }
    }

    /// Number of discovered positions.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Follow parents from `p` back to its root. The result starts at `p`
    /// and ends at the root.
    pub(crate) fn chain_from(&self, p: Pos) -> Vec<Pos> {
        let mut chain = Vec::new();
        if !self.contains(p) {
            return chain;
        }
        let mut cur = Some(p);
        while let Some(c) = cur {
            chain.push(c);
            cur = self.parent(c);
        }
        chain
    }

    /// The path from the root to `p`, both included.
    pub(crate) fn path_to(&self, p: Pos) -> Vec<Pos> {
        let mut path = self.chain_from(p);
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn table_ignores_out_of_bounds() {
        let mut t = CellTable::new(Bounds::new(2, 2), 0u8);
        t.set(p(1, 1), 7);
        t.set(p(5, 5), 9);
        assert_eq!(t.get(p(1, 1)), Some(&7));
        assert_eq!(t.get(p(5, 5)), None);
    }

    #[test]
    fn parent_chain() {
        let mut m = ParentMap::new(Bounds::new(3, 3));
        m.insert_root(p(0, 0));
        m.insert_from(p(1, 1), p(0, 0));
        m.insert_from(p(2, 2), p(1, 1));
        assert_eq!(m.len(), 3);
        assert!(m.contains(p(1, 1)));
        assert!(!m.contains(p(0, 2)));
        assert_eq!(m.parent(p(0, 0)), None);
        assert_eq!(m.path_to(p(2, 2)), vec![p(0, 0), p(1, 1), p(2, 2)]);
        assert_eq!(m.chain_from(p(1, 1)), vec![p(1, 1), p(0, 0)]);
        assert!(m.path_to(p(0, 2)).is_empty());
    }

    #[test]
    fn relinking_does_not_double_count() {
        let mut m = ParentMap::new(Bounds::new(3, 3));
        m.insert_root(p(0, 0));
        m.insert_from(p(0, 1), p(0, 0));
        m.insert_from(p(0, 1), p(1, 1));
        assert_eq!(m.len(), 2);
        assert_eq!(m.parent(p(0, 1)), Some(p(1, 1)));
    }
}
