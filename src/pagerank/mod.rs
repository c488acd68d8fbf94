//! PageRank engine
//!
//! Damped power iteration over a dense transition matrix derived from a
//! [`WeightedGraph`](crate::graph::WeightedGraph). See [`transition`] for how
//! the matrix is built and [`power`] for the iteration itself.

pub mod matrix;
pub mod power;
pub mod transition;

pub use power::{rank, PowerIteration};
pub use transition::TransitionMatrix;

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Node count from which the vector-matrix product runs on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult<N> {
    /// Score of every node, in ascending node order
    pub scores: Vec<(N, f64)>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Euclidean distance between the last two states
    pub delta: f64,
    /// Whether the distance fell below the tolerance
    pub converged: bool,
}

impl<N: Ord + Clone> PageRankResult<N> {
    /// Create a new PageRank result
    pub fn new(scores: Vec<(N, f64)>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: &N) -> Option<f64> {
        self.scores
            .binary_search_by(|(n, _)| n.cmp(node))
            .ok()
            .map(|i| self.scores[i].1)
    }

    /// All nodes sorted by score descending, ties broken by ascending node
    pub fn ranked(&self) -> Vec<(N, f64)> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(N, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Sum of all scores (1 up to rounding)
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().map(|(_, s)| s).sum()
    }

    /// Number of ranked nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no node was ranked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<N: Eq + Hash + Clone> PageRankResult<N> {
    /// Scores keyed by node
    pub fn to_map(&self) -> FxHashMap<N, f64> {
        self.scores.iter().cloned().collect()
    }
}
