//! Core types for wordrank
//!
//! This module defines the part-of-speech tags and tokens handed over by the
//! tagging collaborator, the ranked keyword output, and the configuration
//! surface shared by the graph builder and the PageRank engine.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    /// Parse a Universal Dependencies tag (`NOUN`, `ADJ`, ...)
    pub fn from_universal(tag: &str) -> Option<Self> {
        let pos = match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" | "CONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "X" => PosTag::Other,
            _ => return None,
        };
        Some(pos)
    }

    /// Parse a Penn Treebank tag (`NN`, `NNS`, `JJ`, `VBD`, ...)
    pub fn from_penn(tag: &str) -> Option<Self> {
        let tag = tag.to_uppercase();
        let pos = match tag.as_str() {
            "NN" | "NNS" => PosTag::Noun,
            "NNP" | "NNPS" => PosTag::ProperNoun,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => PosTag::Adverb,
            "PRP" | "PRP$" | "WP" | "WP$" => PosTag::Pronoun,
            "DT" | "PDT" | "WDT" => PosTag::Determiner,
            "IN" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "UH" => PosTag::Interjection,
            "CD" => PosTag::Numeral,
            "RP" | "TO" | "POS" => PosTag::Particle,
            "SYM" => PosTag::Symbol,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "(" | ")" | "#" | "$" => {
                PosTag::Punctuation
            }
            "FW" | "LS" | "EX" => PosTag::Other,
            t if t.starts_with("VB") || t == "MD" => PosTag::Verb,
            _ => return None,
        };
        Some(pos)
    }

    /// Parse either tag set, preferring Universal Dependencies names.
    ///
    /// Unknown tags map to [`PosTag::Other`].
    pub fn parse(tag: &str) -> Self {
        Self::from_universal(tag)
            .or_else(|| Self::from_penn(tag))
            .unwrap_or(PosTag::Other)
    }

    /// Get the Universal Dependencies tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Other => "X",
        }
    }
}

impl std::str::FromStr for PosTag {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PosTag::parse(value))
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token
// ============================================================================

/// A tagged word as produced by the tokenizer/tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

// ============================================================================
// Keyword
// ============================================================================

/// A ranked word with its TextRank significance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The lowercase word
    pub word: String,
    /// The PageRank probability of the word
    pub score: f64,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
}

impl Keyword {
    /// Create a new, not yet ranked keyword
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
            rank: 0,
        }
    }

    /// Total ordering used for ranking: score descending, then word ascending.
    ///
    /// Equal scores are common for symmetric subgraphs, so the word breaks
    /// ties and the order never depends on hash iteration.
    pub fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default parts of speech kept for the co-occurrence graph: nouns and adjectives
pub fn default_relevant_pos() -> Vec<PosTag> {
    vec![PosTag::Noun, PosTag::ProperNoun, PosTag::Adjective]
}

/// Configuration for TextRank keyword scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Co-occurrence window: positions at most this far apart are linked
    pub window_size: usize,
    /// Probability mass per step reserved for a uniform random jump
    pub random_surfer_probability: f64,
    /// Euclidean distance between successive states that counts as converged
    pub convergence_tolerance: f64,
    /// Upper bound on power-iteration steps
    pub max_iterations: usize,
    /// Parts of speech kept when filtering tokens
    pub relevant_pos: Vec<PosTag>,
    /// Number of keywords to return (`None` returns all)
    pub top_n: Option<usize>,
    /// Node count from which the matrix multiply runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            window_size: 2,
            random_surfer_probability: 0.15,
            convergence_tolerance: 1e-5,
            max_iterations: 1000,
            relevant_pos: default_relevant_pos(),
            top_n: None,
            parallel_threshold: crate::pagerank::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config, filling missing fields with defaults, and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(TextRankError::invalid_config("window_size must be >= 1"));
        }

        validate_random_surfer_probability(self.random_surfer_probability)?;

        if !(self.convergence_tolerance > 0.0 && self.convergence_tolerance.is_finite()) {
            return Err(TextRankError::invalid_config(format!(
                "convergence_tolerance must be a positive finite number, got {}",
                self.convergence_tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if self.relevant_pos.is_empty() {
            return Err(TextRankError::invalid_config(
                "relevant_pos must contain at least one tag",
            ));
        }

        if self.top_n == Some(0) {
            return Err(TextRankError::invalid_config("top_n must be > 0 when set"));
        }

        Ok(())
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set random surfer probability
    pub fn with_random_surfer_probability(mut self, rsp: f64) -> Self {
        self.random_surfer_probability = rsp;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set the part-of-speech allow-set
    pub fn with_relevant_pos(mut self, tags: impl Into<Vec<PosTag>>) -> Self {
        self.relevant_pos = tags.into();
        self
    }

    /// Builder method: limit the number of returned keywords
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Builder method: set the parallel multiply threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Check that a random surfer probability lies strictly inside (0, 1)
pub(crate) fn validate_random_surfer_probability(rsp: f64) -> Result<()> {
    if rsp > 0.0 && rsp < 1.0 {
        Ok(())
    } else {
        Err(TextRankError::invalid_config(format!(
            "random_surfer_probability must be strictly between 0 and 1, got {}",
            rsp
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_parsing() {
        assert_eq!(PosTag::parse("NOUN"), PosTag::Noun);
        assert_eq!(PosTag::parse("NN"), PosTag::Noun);
        assert_eq!(PosTag::parse("nns"), PosTag::Noun);
        assert_eq!(PosTag::parse("NNP"), PosTag::ProperNoun);
        assert_eq!(PosTag::parse("ADJ"), PosTag::Adjective);
        assert_eq!(PosTag::parse("JJS"), PosTag::Adjective);
        assert_eq!(PosTag::parse("VBD"), PosTag::Verb);
        assert_eq!(PosTag::parse("MD"), PosTag::Verb);
        assert_eq!(PosTag::parse(","), PosTag::Punctuation);
        assert_eq!(PosTag::parse("???"), PosTag::Other);
        assert_eq!("DT".parse::<PosTag>().unwrap(), PosTag::Determiner);
    }

    #[test]
    fn test_pos_display_roundtrip() {
        for tag in [PosTag::Noun, PosTag::Adjective, PosTag::Preposition, PosTag::Other] {
            assert_eq!(PosTag::parse(&tag.to_string()), tag);
        }
    }

    #[test]
    fn test_keyword_stable_cmp() {
        let high = Keyword::new("prince", 0.4);
        let low = Keyword::new("glass", 0.1);
        assert_eq!(high.stable_cmp(&low), std::cmp::Ordering::Less);
        assert_eq!(low.stable_cmp(&high), std::cmp::Ordering::Greater);

        // Equal scores fall back to the word
        let a = Keyword::new("alpha", 0.25);
        let b = Keyword::new("beta", 0.25);
        assert_eq!(a.stable_cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(a.stable_cmp(&a.clone()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_config_defaults() {
        let config = TextRankConfig::default();
        assert_eq!(config.window_size, 2);
        assert!((config.random_surfer_probability - 0.15).abs() < 1e-12);
        assert!((config.convergence_tolerance - 1e-5).abs() < 1e-18);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.relevant_pos, default_relevant_pos());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let bad = TextRankConfig::default().with_window_size(0);
        assert!(matches!(bad.validate(), Err(TextRankError::InvalidConfig { .. })));

        for rsp in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let bad = TextRankConfig::default().with_random_surfer_probability(rsp);
            assert!(bad.validate().is_err(), "rsp {} should be rejected", rsp);
        }

        let bad = TextRankConfig::default().with_convergence_tolerance(0.0);
        assert!(bad.validate().is_err());

        let bad = TextRankConfig::default().with_convergence_tolerance(f64::INFINITY);
        assert!(bad.validate().is_err());

        let bad = TextRankConfig::default().with_max_iterations(0);
        assert!(bad.validate().is_err());

        let bad = TextRankConfig::default().with_relevant_pos(Vec::new());
        assert!(bad.validate().is_err());

        let bad = TextRankConfig::default().with_top_n(0);
        assert!(bad.validate().is_err());

        let ok = TextRankConfig::default().with_window_size(1).with_top_n(5);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let cfg = TextRankConfig::from_json(r#"{ "window_size": 4 }"#).unwrap();
        assert_eq!(cfg.window_size, 4);
        assert_eq!(cfg.max_iterations, 1000);
        assert_eq!(cfg.top_n, None);
    }

    #[test]
    fn test_config_from_json_with_tags() {
        let json = r#"{
            "random_surfer_probability": 0.2,
            "relevant_pos": ["Noun", "Verb"],
            "top_n": 3
        }"#;
        let cfg = TextRankConfig::from_json(json).unwrap();
        assert_eq!(cfg.relevant_pos, vec![PosTag::Noun, PosTag::Verb]);
        assert_eq!(cfg.top_n, Some(3));
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = TextRankConfig::from_json(r#"{ "random_surfer_probability": 1.0 }"#);
        assert!(matches!(err, Err(TextRankError::InvalidConfig { .. })));

        let err = TextRankConfig::from_json("{ window_size: }");
        assert!(matches!(err, Err(TextRankError::Serialization { .. })));
    }
}
