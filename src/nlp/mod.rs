//! Natural language processing utilities
//!
//! The ranking core only needs an ordered list of lowercase words. This
//! module defines the narrow interface to whatever produces tagged tokens
//! ([`PosTagger`]), a heuristic tagger so the crate works on raw text out of
//! the box, and the filter that turns tagged tokens into graph input.

pub mod filter;
pub mod tokenizer;

pub use filter::{ascii_only, TokenFilter};
pub use tokenizer::Tokenizer;

use crate::types::Token;

/// Splits text into words and assigns each a part-of-speech tag.
///
/// Implement this to plug in a real tagger; [`Tokenizer`] is a suffix-based
/// fallback.
pub trait PosTagger {
    /// Tokenize and tag `text`, preserving word order
    fn tag(&self, text: &str) -> Vec<Token>;
}
