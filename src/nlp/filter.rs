//! Token filtering ahead of graph construction

use crate::types::{default_relevant_pos, PosTag, TextRankConfig, Token};
use rustc_hash::FxHashSet;

const PUNCTUATION: &[&str] = &[".", "?", "!", ",", "\"", ":", ";", "'", "-"];

/// Keeps lowercase words whose part of speech is in an allow-set
#[derive(Debug, Clone)]
pub struct TokenFilter {
    relevant_pos: FxHashSet<PosTag>,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(default_relevant_pos())
    }
}

impl TokenFilter {
    /// Create a filter keeping the given tags
    pub fn new(tags: impl IntoIterator<Item = PosTag>) -> Self {
        Self {
            relevant_pos: tags.into_iter().collect(),
        }
    }

    /// Create a filter from the config's allow-set
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self::new(config.relevant_pos.iter().copied())
    }

    /// Check if a word consists of punctuation only
    pub fn is_punctuation(word: &str) -> bool {
        PUNCTUATION.contains(&word) || !word.chars().any(|c| c.is_alphanumeric())
    }

    /// Check if a token survives filtering
    pub fn is_relevant(&self, token: &Token) -> bool {
        !Self::is_punctuation(&token.text) && self.relevant_pos.contains(&token.pos)
    }

    /// Lowercased text of every relevant token, in order
    pub fn filter(&self, tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| self.is_relevant(t))
            .map(|t| t.text.to_lowercase())
            .collect()
    }
}

/// Drop every non-ASCII character from `text`
pub fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("The", PosTag::Determiner),
            Token::new("Glass", PosTag::Adjective),
            Token::new("slipper", PosTag::Noun),
            Token::new(",", PosTag::Punctuation),
            Token::new("shone", PosTag::Verb),
            Token::new("Cinderella", PosTag::ProperNoun),
            Token::new("-", PosTag::Noun),
        ]
    }

    #[test]
    fn test_default_keeps_nouns_and_adjectives() {
        let words = TokenFilter::default().filter(&tokens());
        assert_eq!(words, vec!["glass", "slipper", "cinderella"]);
    }

    #[test]
    fn test_custom_allow_set() {
        let words = TokenFilter::new([PosTag::Verb]).filter(&tokens());
        assert_eq!(words, vec!["shone"]);
    }

    #[test]
    fn test_from_config() {
        let config = TextRankConfig::default().with_relevant_pos(vec![PosTag::Noun]);
        let words = TokenFilter::from_config(&config).filter(&tokens());
        assert_eq!(words, vec!["slipper"]);
    }

    #[test]
    fn test_punctuation() {
        assert!(TokenFilter::is_punctuation("."));
        assert!(TokenFilter::is_punctuation("--"));
        assert!(TokenFilter::is_punctuation("'"));
        assert!(!TokenFilter::is_punctuation("don't"));
        assert!(!TokenFilter::is_punctuation("x"));
    }

    #[test]
    fn test_ascii_only() {
        assert_eq!(ascii_only("naïve café"), "nave caf");
        assert_eq!(ascii_only("plain"), "plain");
    }
}
