//! Disjoint sets (union-find) over dense integer elements
//!
//! Union by rank with an iterative, path-halving `find`, so deep parent
//! chains never recurse. `union` reports whether the two sets were distinct,
//! which is the cycle signal the spanning-tree builder relies on.

use std::cmp::Ordering;

/// A partition of `0..len` into disjoint sets.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}
// Invariant: parent chains terminate at a root (parent[r] == r).

impl UnionFind {
    /// Creates a union-find of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// The number of elements in all the sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative element of `element`'s set.
    ///
    /// Path halving: every visited element is re-pointed at its grandparent,
    /// keeping the walk iterative and compressing as it goes.
    pub fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            self.parent[element] = self.parent[self.parent[element]];
            element = self.parent[element];
        }
        element
    }

    /// Joins the sets of the two given elements.
    ///
    /// Returns `false` when the elements were already in the same set, which
    /// means connecting them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);

        if a == b {
            return false;
        }

        match self.rank[a].cmp(&self.rank[b]) {
            Ordering::Greater => self.parent[b] = a,
            Ordering::Less => self.parent[a] = b,
            Ordering::Equal => {
                self.parent[a] = b;
                self.rank[b] = self.rank[b].saturating_add(1);
            }
        }

        true
    }

    /// Determines whether two elements are in the same set.
    pub fn equiv(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
