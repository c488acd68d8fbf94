//! Transition matrix construction
//!
//! Turns a sparse [`WeightedGraph`] into a dense right-stochastic matrix over
//! the full node set:
//!
//! 1. collect every source and target as a node, sorted ascending
//! 2. square the adjacency map, missing cells are 0
//! 3. replace every all-zero (dangling) row with a uniform row
//! 4. divide each row by its largest entry, then by its sum
//! 5. blend in the random surfer: `p * (1 - rsp) + rsp / n`

use super::matrix::DenseMatrix;
use crate::errors::{Result, TextRankError};
use crate::graph::WeightedGraph;
use crate::types::validate_random_surfer_probability;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Row-stochastic transition probabilities indexed by a stable node order
#[derive(Debug, Clone)]
pub struct TransitionMatrix<N> {
    nodes: Vec<N>,
    matrix: DenseMatrix,
    dangling: Vec<usize>,
}

impl<N: Eq + Hash + Clone + Ord> TransitionMatrix<N> {
    /// Derive the transition matrix of `graph` with random surfer probability `rsp`
    pub fn from_graph(graph: &WeightedGraph<N>, rsp: f64) -> Result<Self> {
        validate_random_surfer_probability(rsp)?;
        graph.validate_weights()?;
        trace_stage!("transition_matrix");

        let nodes = graph.nodes();
        if nodes.is_empty() {
            return Err(TextRankError::invalid_graph(
                "the graph has no nodes; supply at least one token",
            ));
        }
        let n = nodes.len();

        let index: FxHashMap<&N, usize> =
            nodes.iter().enumerate().map(|(i, node)| (node, i)).collect();

        let mut matrix = DenseMatrix::zeros(n);
        for (from, row) in graph.as_map() {
            let Some(&i) = index.get(from) else { continue };
            for (to, &weight) in row {
                if let Some(&j) = index.get(to) {
                    matrix.set(i, j, weight);
                }
            }
        }

        let mut dangling = Vec::new();
        for row in 0..n {
            // Exact comparison: a zero sum only comes from absent weight.
            if matrix.row_sum(row) == 0.0 {
                matrix.fill_row(row, 1.0);
                dangling.push(row);
            }
        }

        for row in 0..n {
            // Bringing every entry into [0, 1] first keeps the sum finite
            // even when the raw weights add up past f64::MAX.
            let max = matrix.row_max(row);
            matrix.divide_row(row, max);
            let sum = matrix.row_sum(row);
            matrix.divide_row(row, sum);
        }

        let alpha = rsp / n as f64;
        matrix.map_in_place(|p| p * (1.0 - rsp) + alpha);

        trace_debug!(nodes = n, dangling = dangling.len(), "built transition matrix");

        Ok(Self {
            nodes,
            matrix,
            dangling,
        })
    }

    /// Probability of stepping from `from` to `to`, if both are nodes
    pub fn probability(&self, from: &N, to: &N) -> Option<f64> {
        let i = self.nodes.binary_search(from).ok()?;
        let j = self.nodes.binary_search(to).ok()?;
        Some(self.matrix.get(i, j))
    }

    /// Nodes whose rows were replaced by the uniform distribution
    pub fn dangling_nodes(&self) -> Vec<&N> {
        self.dangling.iter().map(|&i| &self.nodes[i]).collect()
    }
}

impl<N> TransitionMatrix<N> {
    /// The node order used for rows and columns
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully built matrix
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the matrix, returning the node order
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
