//! TextRank keyword scoring
//!
//! Words are nodes, co-occurrence counts within a sliding window are edge
//! weights, and the PageRank probability of each word is its significance.
//! See Mihalcea & Tarau, "TextRank: Bringing Order into Texts" (EMNLP 2004).

use crate::errors::Result;
use crate::graph::{CooccurrenceGraphBuilder, WeightedGraph};
use crate::nlp::{PosTagger, TokenFilter, Tokenizer};
use crate::pagerank::{PageRankResult, PowerIteration};
use crate::types::{Keyword, TextRankConfig, Token};
use serde::{Deserialize, Serialize};

/// Ranked keywords with PageRank convergence information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScores {
    /// Keywords sorted by score descending, ties broken by word
    pub keywords: Vec<Keyword>,
    /// Power iterations performed
    pub iterations: usize,
    /// Whether PageRank converged before the iteration cap
    pub converged: bool,
}

impl KeywordScores {
    fn from_result(result: PageRankResult<String>, top_n: Option<usize>) -> Self {
        let mut keywords: Vec<Keyword> = result
            .scores
            .into_iter()
            .map(|(word, score)| Keyword::new(word, score))
            .collect();
        keywords.sort_by(|a, b| a.stable_cmp(b));
        if let Some(n) = top_n {
            keywords.truncate(n);
        }
        for (i, keyword) in keywords.iter_mut().enumerate() {
            keyword.rank = i + 1;
        }

        Self {
            keywords,
            iterations: result.iterations,
            converged: result.converged,
        }
    }

    /// Score of `word`, if it was ranked and kept
    pub fn score(&self, word: &str) -> Option<f64> {
        self.keywords
            .iter()
            .find(|k| k.word == word)
            .map(|k| k.score)
    }

    /// The keyword strings in rank order
    pub fn words(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.word.as_str()).collect()
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if there are no keywords
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// TextRank keyword extractor
#[derive(Debug, Clone)]
pub struct TextRank {
    config: TextRankConfig,
}

impl TextRank {
    /// Create an extractor with the default config
    pub fn new() -> Self {
        Self {
            config: TextRankConfig::default(),
        }
    }

    /// Create with custom config, validating it up front
    pub fn with_config(config: TextRankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Build the co-occurrence graph for already filtered words
    pub fn build_graph(&self, words: &[String]) -> Result<WeightedGraph<String>> {
        CooccurrenceGraphBuilder::new(self.config.window_size).build(words)
    }

    /// Rank already filtered, lowercase words
    pub fn rank_words(&self, words: &[String]) -> Result<KeywordScores> {
        let graph = self.build_graph(words)?;
        let result = PowerIteration::from_config(&self.config).run(&graph)?;
        Ok(KeywordScores::from_result(result, self.config.top_n))
    }

    /// Filter tagged tokens by the configured allow-set, then rank them
    pub fn rank_tokens(&self, tokens: &[Token]) -> Result<KeywordScores> {
        let words = TokenFilter::from_config(&self.config).filter(tokens);
        self.rank_words(&words)
    }

    /// Tag `text` with `tagger`, then rank it
    pub fn extract_with<T: PosTagger + ?Sized>(
        &self,
        tagger: &T,
        text: &str,
    ) -> Result<KeywordScores> {
        self.rank_tokens(&tagger.tag(text))
    }

    /// Tag `text` with the built-in heuristic [`Tokenizer`], then rank it
    pub fn extract(&self, text: &str) -> Result<KeywordScores> {
        self.extract_with(&Tokenizer::new(), text)
    }
}

impl Default for TextRank {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to extract keywords from raw text
pub fn extract_keywords(text: &str, config: &TextRankConfig) -> Result<KeywordScores> {
    TextRank::with_config(config.clone())?.extract(text)
}
