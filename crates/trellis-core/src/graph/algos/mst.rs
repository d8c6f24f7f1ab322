//! Minimum spanning forest via Kruskal's algorithm
//!
//! Consumes an edge-list graph in one pass: stable sort ascending by weight
//! (ties keep input order), then a union-find cycle check per edge. A
//! disconnected input yields a forest with fewer than `vertices - 1` edges;
//! that is a valid outcome callers detect by edge count, not an error.

use serde::Serialize;

use crate::union_find::UnionFind;

/// One `(src, dest, weight)` triple with dense endpoints in `[0, vertices)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeListEntry {
    pub src: usize,
    pub dest: usize,
    pub weight: u64,
}

/// Edge-list graph representation consumed by the spanning-tree builder.
///
/// Unlike [`crate::graph::WeightedGraph`] there is no adjacency structure;
/// the edge sequence is sorted once and read through once.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeListGraph {
    pub vertices: usize,
    pub edges: Vec<EdgeListEntry>,
}

impl EdgeListGraph {
    pub fn new(vertices: usize) -> Self {
        EdgeListGraph {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Appends an edge. Endpoints must lie in `[0, vertices)`.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: u64) {
        debug_assert!(src < self.vertices && dest < self.vertices);
        self.edges.push(EdgeListEntry { src, dest, weight });
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// True when the edge set has the `vertices - 1` edges of a spanning
    /// tree; a forest over a disconnected input has fewer.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertices.saturating_sub(1)
    }
}

/// Builds the minimum spanning forest of `graph`.
///
/// Returns a new, disjoint graph value holding only the accepted edges, in
/// acceptance order. Stops early once `vertices - 1` edges are in.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertices, edges = graph.edges.len()))]
pub fn minimum_spanning_forest(graph: &EdgeListGraph) -> EdgeListGraph {
    let mut edges = graph.edges.clone();
    // Stable sort: equal weights keep their input order.
    edges.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(graph.vertices);
    let mut forest = EdgeListGraph::new(graph.vertices);

    for edge in edges {
        if forest.edges.len() == graph.vertices.saturating_sub(1) {
            break;
        }
        // `union` returns false when the endpoints already share a set, in
        // which case the edge would close a cycle and is rejected.
        if sets.union(edge.src, edge.dest) {
            forest.edges.push(edge);
        }
    }

    tracing::debug!(
        accepted = forest.edges.len(),
        total_weight = forest.total_weight(),
        spanning = forest.is_spanning(),
        "kruskal complete"
    );
    forest
}
