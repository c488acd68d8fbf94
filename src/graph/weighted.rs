//! Sparse weighted adjacency map
//!
//! A [`WeightedGraph`] maps each source node to its outgoing edges and their
//! weights. It is neither required to be square nor symmetric: a node may
//! appear only as a target, and a missing entry means weight 0.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Outgoing edges of one source node: target -> weight
pub type AdjacencyRow<N> = FxHashMap<N, f64>;

/// A directed graph with non-negative real edge weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct WeightedGraph<N> {
    adjacency: FxHashMap<N, AdjacencyRow<N>>,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> WeightedGraph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `capacity` source nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Register a node without adding any edge.
    ///
    /// The node keeps an empty adjacency row, so it takes part in ranking as a
    /// dangling node.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add `weight` to the edge `from -> to`, creating it if needed
    pub fn add_weight(&mut self, from: N, to: N, weight: f64) {
        *self.adjacency.entry(from).or_default().entry(to).or_insert(0.0) += weight;
    }

    /// Overwrite the weight of the edge `from -> to`
    pub fn set_weight(&mut self, from: N, to: N, weight: f64) {
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    /// Weight of the edge `from -> to` (0 when absent)
    pub fn weight(&self, from: &N, to: &N) -> f64 {
        self.adjacency
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Outgoing edges of `node`, if it was ever recorded as a source
    pub fn row(&self, node: &N) -> Option<&AdjacencyRow<N>> {
        self.adjacency.get(node)
    }

    /// Iterate over the outgoing edges of `node`
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|row| row.iter().map(|(n, &w)| (n, w)))
    }

    /// Total outgoing weight of `node`
    pub fn out_weight(&self, node: &N) -> f64 {
        self.neighbors(node).map(|(_, w)| w).sum()
    }

    /// Iterate over every node recorded as a source
    pub fn sources(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of recorded `(from, to)` entries
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|row| row.len()).sum()
    }

    /// Check if the graph has no nodes at all
    pub fn is_empty(&self) -> bool {
        // Targets only exist inside rows, so no rows means no nodes.
        self.adjacency.is_empty()
    }

    /// Add every edge of `other` into this graph, summing weights
    pub fn merge(&mut self, other: WeightedGraph<N>) {
        for (from, row) in other.adjacency {
            let target = self.adjacency.entry(from).or_default();
            for (to, weight) in row {
                *target.entry(to).or_insert(0.0) += weight;
            }
        }
    }

    /// Check that every weight is a finite, non-negative number
    pub fn validate_weights(&self) -> Result<()> {
        for row in self.adjacency.values() {
            for &weight in row.values() {
                if !(weight.is_finite() && weight >= 0.0) {
                    return Err(TextRankError::invalid_graph(format!(
                        "edge weights must be finite and non-negative, got {}",
                        weight
                    )));
                }
            }
        }
        Ok(())
    }

    /// Borrow the underlying adjacency map
    pub fn as_map(&self) -> &FxHashMap<N, AdjacencyRow<N>> {
        &self.adjacency
    }
}

impl<N: Eq + Hash + Clone + Ord> WeightedGraph<N> {
    /// The full node set: every source and every target, sorted ascending
    pub fn nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self
            .adjacency
            .iter()
            .flat_map(|(from, row)| std::iter::once(from).chain(row.keys()))
            .cloned()
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    /// Number of distinct nodes (sources and targets)
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

impl<N: Eq + Hash> PartialEq for WeightedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N> From<FxHashMap<N, AdjacencyRow<N>>> for WeightedGraph<N> {
    fn from(adjacency: FxHashMap<N, AdjacencyRow<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, N, f64)> for WeightedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, f64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in iter {
            graph.add_weight(from, to, weight);
        }
        graph
    }
}
