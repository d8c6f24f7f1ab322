//! Graph algorithms
//!
//! - `shortest_path`: single-source Dijkstra in two strategies
//! - `mst`: Kruskal spanning forest over an edge-list graph

pub mod mst;
pub mod shortest_path;

pub use mst::{minimum_spanning_forest, EdgeListEntry, EdgeListGraph};
pub use shortest_path::{shortest_path_tree, ShortestPathTree, Strategy};
