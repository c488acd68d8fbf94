//! Unicode-aware tokenization with heuristic tagging
//!
//! Word boundaries follow UAX #29. Tags come from a closed list of function
//! words and common English suffixes, which is enough for keyword scoring
//! but no substitute for a trained tagger.

use super::PosTagger;
use crate::types::{PosTag, Token};
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Minimum token length to consider
    min_token_length: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Split text into word and punctuation tokens.
    ///
    /// Whitespace is dropped; punctuation is kept and tagged
    /// [`PosTag::Punctuation`] so downstream filtering decides what to do with it.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }

            if !segment.chars().any(|c| c.is_alphanumeric()) {
                tokens.push(Token::new(segment, PosTag::Punctuation));
                continue;
            }

            // Skip tokens that are too short
            if segment.chars().count() < self.min_token_length {
                continue;
            }

            tokens.push(Token::new(segment, self.guess_pos(segment)));
        }

        tokens
    }

    /// Basic heuristic POS tagging
    fn guess_pos(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(pos) = self.function_word_pos(&lower) {
            return pos;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
        {
            // Capitalized word (might be proper noun or sentence start)
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        let pos = match lower {
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
                PosTag::Determiner
            }
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "though" | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
            | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
            | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us"
            | "them" | "myself" | "yourself" | "herself" | "himself" | "ourselves"
            | "themselves" | "who" | "what" => PosTag::Pronoun,
            "is" | "are" | "was" | "were" | "be" | "been" | "am" | "has" | "have" | "had"
            | "do" | "does" | "did" | "will" | "would" | "could" | "should" | "can" | "may"
            | "might" | "must" | "shall" => PosTag::Verb,
            "very" | "not" | "then" | "there" | "here" | "also" | "too" => PosTag::Adverb,
            "oh" | "alas" | "hello" => PosTag::Interjection,
            _ => return None,
        };
        Some(pos)
    }
}

impl PosTagger for Tokenizer {
    fn tag(&self, text: &str) -> Vec<Token> {
        self.tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Hello world. This is a test.");

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "world", ".", "This", "is", "a", "test", "."]);
    }

    #[test]
    fn test_punctuation_is_tagged() {
        let tokens = Tokenizer::new().tokenize("glass, slipper!");
        assert_eq!(tokens[1], Token::new(",", PosTag::Punctuation));
        assert_eq!(tokens[3], Token::new("!", PosTag::Punctuation));
    }

    #[test]
    fn test_unicode_handling() {
        let tokens = Tokenizer::new().tokenize("Café résumé naïve.");
        assert!(tokens.iter().any(|t| t.text == "résumé"));
    }

    #[test]
    fn test_pos_guessing() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.guess_pos("beautiful"), PosTag::Adjective);
        assert_eq!(tokenizer.guess_pos("running"), PosTag::Verb);
        assert_eq!(tokenizer.guess_pos("quickly"), PosTag::Adverb);
        assert_eq!(tokenizer.guess_pos("information"), PosTag::Noun);
        assert_eq!(tokenizer.guess_pos("Cinderella"), PosTag::ProperNoun);
        assert_eq!(tokenizer.guess_pos("The"), PosTag::Determiner);
        assert_eq!(tokenizer.guess_pos("1812"), PosTag::Numeral);
    }

    #[test]
    fn test_min_length() {
        let tokens = Tokenizer::new().with_min_length(3).tokenize("an ox ate grass");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ate", "grass"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tag("   \n\t").is_empty());
    }
}
