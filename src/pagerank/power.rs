//! Damped power iteration
//!
//! Starts from the uniform distribution and repeatedly left-multiplies the
//! state by the transition matrix until the Euclidean distance between two
//! successive states drops below the tolerance, or the iteration cap is hit.
//! Hitting the cap is not an error: the last state is returned with
//! `converged = false`.

use super::transition::TransitionMatrix;
use super::{PageRankResult, DEFAULT_PARALLEL_THRESHOLD};
use crate::errors::{Result, TextRankError};
use crate::graph::WeightedGraph;
use crate::types::{validate_random_surfer_probability, TextRankConfig};
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};

/// PageRank power iteration settings
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIteration {
    /// Probability of a uniform random jump per step (typically 0.15)
    pub random_surfer_probability: f64,
    /// Convergence threshold on the Euclidean norm of the state change
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Node count from which the multiply runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            random_surfer_probability: 0.15,
            tolerance: 1e-5,
            max_iterations: 1000,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PowerIteration {
    /// Create a new PowerIteration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the engine settings from a TextRank config
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            random_surfer_probability: config.random_surfer_probability,
            tolerance: config.convergence_tolerance,
            max_iterations: config.max_iterations,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Set the random surfer probability
    pub fn with_random_surfer_probability(mut self, rsp: f64) -> Self {
        self.random_surfer_probability = rsp;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the parallel multiply threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validate the settings.
    ///
    /// A tolerance of 0 is allowed and simply runs to `max_iterations`.
    pub fn validate(&self) -> Result<()> {
        validate_random_surfer_probability(self.random_surfer_probability)?;

        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(TextRankError::invalid_config(format!(
                "tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run<N>(&self, graph: &WeightedGraph<N>) -> Result<PageRankResult<N>>
    where
        N: Eq + Hash + Clone + Ord,
    {
        self.run_inner(graph, None)
    }

    /// Run PageRank, checking `cancel` once before every iteration.
    ///
    /// When the flag is raised the run stops with [`TextRankError::Cancelled`]
    /// and no scores are returned.
    pub fn run_cancellable<N>(
        &self,
        graph: &WeightedGraph<N>,
        cancel: &AtomicBool,
    ) -> Result<PageRankResult<N>>
    where
        N: Eq + Hash + Clone + Ord,
    {
        self.run_inner(graph, Some(cancel))
    }

    /// Iterate on a transition matrix built from `self.random_surfer_probability`.
    ///
    /// Settings are validated by the caller.
    fn iterate<N>(
        &self,
        transition: TransitionMatrix<N>,
        cancel: Option<&AtomicBool>,
    ) -> Result<PageRankResult<N>>
    where
        N: Eq + Hash + Clone + Ord,
    {
        let matrix = transition.matrix();
        let n = transition.len();
        if n == 0 {
            return Err(TextRankError::invalid_graph("the graph has no nodes"));
        }
        let parallel = n >= self.parallel_threshold;

        let mut state = vec![1.0 / n as f64; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(TextRankError::cancelled(iterations));
            }

            // The old state stays untouched until the new one is complete.
            let next = if parallel {
                matrix.left_multiply_parallel(&state)
            } else {
                matrix.left_multiply(&state)
            };
            iterations += 1;

            delta = euclidean_distance(&state, &next);
            state = next;

            if delta < self.tolerance {
                break;
            }
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = state.iter().sum();
        if sum > 0.0 {
            for score in &mut state {
                *score /= sum;
            }
        }

        let converged = delta < self.tolerance;
        trace_debug!(nodes = n, iterations, delta, converged, "power iteration finished");

        let scores = transition.into_nodes().into_iter().zip(state).collect();
        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }

    fn run_inner<N>(
        &self,
        graph: &WeightedGraph<N>,
        cancel: Option<&AtomicBool>,
    ) -> Result<PageRankResult<N>>
    where
        N: Eq + Hash + Clone + Ord,
    {
        self.validate()?;
        trace_stage!("pagerank");

        let transition = TransitionMatrix::from_graph(graph, self.random_surfer_probability)?;
        self.iterate(transition, cancel)
    }
}

/// Rank the nodes of `graph` with the given settings.
///
/// Shorthand for building a [`PowerIteration`] and calling
/// [`run`](PowerIteration::run).
pub fn rank<N>(
    graph: &WeightedGraph<N>,
    random_surfer_probability: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<PageRankResult<N>>
where
    N: Eq + Hash + Clone + Ord,
{
    PowerIteration::new()
        .with_random_surfer_probability(random_surfer_probability)
        .with_tolerance(tolerance)
        .with_max_iterations(max_iterations)
        .run(graph)
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
