//! Graph construction and representation
//!
//! This module provides the sparse weighted adjacency map consumed by the
//! PageRank engine and the sliding-window builder that produces it from a
//! token sequence.

pub mod builder;
pub mod weighted;

pub use builder::CooccurrenceGraphBuilder;
pub use weighted::WeightedGraph;
