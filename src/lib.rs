//! # wordrank
//!
//! PageRank over arbitrary weighted graphs, and TextRank keyword scoring
//! built on top of it.
//!
//! A filtered token sequence becomes a co-occurrence [`WeightedGraph`], the
//! graph becomes a row-stochastic [`TransitionMatrix`] with dangling-node
//! correction and random-surfer blending, and damped power iteration turns
//! that into a probability distribution over the words.
//!
//! ```no_run
//! use wordrank::{TextRank, TextRankConfig};
//!
//! let config = TextRankConfig::default().with_top_n(5);
//! let scores = TextRank::with_config(config)?.extract("Cinderella lost a glass slipper.")?;
//! for keyword in &scores.keywords {
//!     println!("{:>2}. {} {:.4}", keyword.rank, keyword.word, keyword.score);
//! }
//! # Ok::<(), wordrank::TextRankError>(())
//! ```

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("wordrank_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod textrank;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Keyword, PosTag, TextRankConfig, Token};

// Re-export main functionality
pub use graph::{CooccurrenceGraphBuilder, WeightedGraph};
pub use nlp::{PosTagger, TokenFilter, Tokenizer};
pub use pagerank::{rank, PageRankResult, PowerIteration, TransitionMatrix};
pub use textrank::{extract_keywords, KeywordScores, TextRank};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
