//! Sliding-window co-occurrence graph builder
//!
//! Every token is linked to each token at most `window_size` positions away,
//! in both scan directions. Each co-occurring pair therefore contributes one
//! unit of weight to each direction of the edge. Repeated tokens are not
//! deduplicated first, so a word accumulates weight across all of its
//! occurrences.

use super::weighted::WeightedGraph;
use crate::errors::{Result, TextRankError};
use rayon::prelude::*;
use std::hash::Hash;
use std::ops::Range;

/// Token count from which [`CooccurrenceGraphBuilder::build`] counts in parallel
pub const DEFAULT_PARALLEL_TOKEN_THRESHOLD: usize = 10_000;

/// Builds a [`WeightedGraph`] from an ordered, pre-filtered token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooccurrenceGraphBuilder {
    window_size: usize,
    parallel_threshold: usize,
}

impl Default for CooccurrenceGraphBuilder {
    fn default() -> Self {
        Self::new(2)
    }
}

impl CooccurrenceGraphBuilder {
    /// Create a builder linking tokens at most `window_size` positions apart
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            parallel_threshold: DEFAULT_PARALLEL_TOKEN_THRESHOLD,
        }
    }

    /// Set the token count from which counting is split across the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The configured window size
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Validate the builder settings
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(TextRankError::invalid_config("window_size must be >= 1"));
        }
        Ok(())
    }

    /// Build the co-occurrence graph for `tokens`.
    ///
    /// An empty sequence yields an empty graph; the PageRank engine rejects it.
    pub fn build<N>(&self, tokens: &[N]) -> Result<WeightedGraph<N>>
    where
        N: Eq + Hash + Clone + Send + Sync,
    {
        self.validate()?;
        trace_stage!("cooccurrence_graph");

        let graph = if tokens.len() >= self.parallel_threshold {
            self.build_parallel(tokens)
        } else {
            self.build_sequential(tokens)
        };

        trace_debug!(
            tokens = tokens.len(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );
        Ok(graph)
    }

    /// Count co-occurrences on the calling thread
    pub fn build_sequential<N>(&self, tokens: &[N]) -> WeightedGraph<N>
    where
        N: Eq + Hash + Clone,
    {
        let mut graph = WeightedGraph::with_capacity(tokens.len() / 2);
        count_window(tokens, 0..tokens.len(), self.window_size, &mut graph);
        graph
    }

    /// Count co-occurrences in chunks on the rayon pool, then merge.
    ///
    /// Weights are integer counts, so the merged graph is identical to the
    /// sequential one.
    pub fn build_parallel<N>(&self, tokens: &[N]) -> WeightedGraph<N>
    where
        N: Eq + Hash + Clone + Send + Sync,
    {
        let len = tokens.len();
        let chunk = (len / rayon::current_num_threads().max(1)).max(1);
        let starts: Vec<usize> = (0..len).step_by(chunk).collect();

        starts
            .into_par_iter()
            .map(|start| {
                let mut partial = WeightedGraph::new();
                let end = (start + chunk).min(len);
                count_window(tokens, start..end, self.window_size, &mut partial);
                partial
            })
            .reduce(WeightedGraph::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }
}

/// Scan outward from every center position in `centers`, adding one unit of
/// weight from the center token to each distinct neighbor within `window`.
fn count_window<N>(tokens: &[N], centers: Range<usize>, window: usize, graph: &mut WeightedGraph<N>)
where
    N: Eq + Hash + Clone,
{
    let last = match tokens.len().checked_sub(1) {
        Some(last) => last,
        None => return,
    };

    for center in centers {
        let word = &tokens[center];
        // A word whose only neighbors are copies of itself still needs a node.
        graph.add_node(word.clone());

        let lo = center.saturating_sub(window);
        let hi = center.saturating_add(window).min(last);
        for other in lo..=hi {
            if other == center || tokens[other] == *word {
                continue; // No self-loops
            }
            graph.add_weight(word.clone(), tokens[other].clone(), 1.0);
        }
    }
}
