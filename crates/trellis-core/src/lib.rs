//! Trellis Core Library
//!
//! Weighted undirected graphs with a line-oriented text importer, two
//! interchangeable single-source shortest-path strategies, and Kruskal
//! spanning forests built on a union-find structure.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod union_find;
