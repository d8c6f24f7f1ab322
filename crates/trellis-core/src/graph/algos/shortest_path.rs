//! Single-source shortest paths over a [`WeightedGraph`]
//!
//! Two interchangeable strategies:
//! - [`Strategy::LinearScan`]: selects the next node by a full scan of the
//!   unvisited set, O(V²) selection plus O(E) relaxation. The baseline.
//! - [`Strategy::PriorityQueue`]: binary min-heap with lazy deletion,
//!   O((V+E) log V).
//!
//! Distance ties are broken by the lexicographically smallest label in both
//! strategies, so the computed distances *and* predecessors agree entry for
//! entry and runs are reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};
use crate::graph::WeightedGraph;

/// Node-selection strategy for a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Full scan of the unvisited set per round
    #[serde(rename = "scan")]
    LinearScan,
    /// Binary heap with lazy deletion
    #[default]
    #[serde(rename = "heap")]
    PriorityQueue,
}

impl FromStr for Strategy {
    type Err = TrellisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" | "linear-scan" => Ok(Strategy::LinearScan),
            "heap" | "priority-queue" => Ok(Strategy::PriorityQueue),
            other => Err(TrellisError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LinearScan => write!(f, "scan"),
            Strategy::PriorityQueue => write!(f, "heap"),
        }
    }
}

/// Heap entry ordered by (cost, label) so equal costs pop in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    cost: u64,
    label: String,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors from a single source node.
///
/// Nodes absent from the distance map are unreachable; unreachability is an
/// expected outcome, never an error.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: String,
    dist: HashMap<String, u64>,
    prev: HashMap<String, String>,
}

impl ShortestPathTree {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Total weight of the best path to `target`, `None` when unreachable.
    pub fn distance(&self, target: &str) -> Option<u64> {
        self.dist.get(target).copied()
    }

    /// Labels from the source to `target` inclusive, `None` when unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        self.dist.get(target)?;

        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(predecessor) = self.prev.get(current) {
            path.push(predecessor.clone());
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }

    /// Reachable labels in lexicographic order.
    pub fn reachable(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.dist.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// The full distance map (label -> total weight).
    pub fn distances(&self) -> &HashMap<String, u64> {
        &self.dist
    }
}

/// Computes distances and predecessors from `source` to every reachable node.
///
/// The graph is not mutated; each run owns its own working state. Requires
/// non-negative weights, which the `u64` edge type guarantees.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn shortest_path_tree(
    graph: &WeightedGraph,
    source: &str,
    strategy: Strategy,
) -> Result<ShortestPathTree> {
    if !graph.contains_node(source) {
        return Err(TrellisError::NodeNotFound {
            label: source.to_string(),
        });
    }

    let tree = match strategy {
        Strategy::LinearScan => linear_scan(graph, source),
        Strategy::PriorityQueue => priority_queue(graph, source),
    };

    tracing::debug!(reached = tree.dist.len(), "shortest path run complete");
    Ok(tree)
}

fn linear_scan(graph: &WeightedGraph, source: &str) -> ShortestPathTree {
    let mut dist: HashMap<String, u64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut unvisited: HashSet<String> =
        graph.labels().into_iter().map(str::to_string).collect();

    dist.insert(source.to_string(), 0);

    while !unvisited.is_empty() {
        // Full scan for the minimum finite distance; ties go to the smallest
        // label so results are reproducible.
        let mut selected: Option<(&str, u64)> = None;
        for label in &unvisited {
            let Some(&candidate) = dist.get(label.as_str()) else {
                continue;
            };
            let closer = match selected {
                None => true,
                Some((best_label, best)) => {
                    candidate < best || (candidate == best && label.as_str() < best_label)
                }
            };
            if closer {
                selected = Some((label.as_str(), candidate));
            }
        }

        // Everything left is unreachable from the source.
        let Some((label, settled)) = selected else {
            break;
        };
        let label = label.to_string();

        unvisited.remove(&label);
        relax_neighbors(graph, &label, settled, &mut dist, &mut prev);
    }

    ShortestPathTree {
        source: source.to_string(),
        dist,
        prev,
    }
}

fn priority_queue(graph: &WeightedGraph, source: &str) -> ShortestPathTree {
    let mut dist: HashMap<String, u64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist.insert(source.to_string(), 0);
    heap.push(Reverse(HeapEntry {
        cost: 0,
        label: source.to_string(),
    }));

    while let Some(Reverse(HeapEntry { cost, label })) = heap.pop() {
        // Lazy deletion: improved distances are re-pushed rather than
        // updated in place, so a stale entry for an already-settled node is
        // simply skipped here.
        if !visited.insert(label.clone()) {
            continue;
        }

        for (neighbor, alt) in relax_neighbors(graph, &label, cost, &mut dist, &mut prev) {
            heap.push(Reverse(HeapEntry {
                cost: alt,
                label: neighbor,
            }));
        }
    }

    ShortestPathTree {
        source: source.to_string(),
        dist,
        prev,
    }
}

/// Relaxes every edge out of `label`, returning the neighbors whose distance
/// improved. An absent entry in `dist` stands for an infinite distance.
fn relax_neighbors(
    graph: &WeightedGraph,
    label: &str,
    settled: u64,
    dist: &mut HashMap<String, u64>,
    prev: &mut HashMap<String, String>,
) -> Vec<(String, u64)> {
    let mut improved = Vec::new();

    if let Some(neighbors) = graph.neighbors(label) {
        for (neighbor, &weight) in neighbors {
            let alt = settled.saturating_add(weight);
            if dist.get(neighbor).is_none_or(|&current| alt < current) {
                dist.insert(neighbor.clone(), alt);
                prev.insert(neighbor.clone(), label.to_string());
                improved.push((neighbor.clone(), alt));
            }
        }
    }

    improved
}
