//! Tokenizer that splits on the space character.

use crate::error::{Result, SieveError};

/// Splits text on `' '` only.
///
/// Tabs, newlines and other whitespace are *not* separators; they stay
/// inside the term and make it invalid (see [`is_valid_term`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    pub fn new() -> Self {
        SpaceTokenizer
    }

    /// Split `text` into terms borrowing from it. Runs of spaces produce
    /// no empty terms.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + use<'a> {
        text.split(' ').filter(|term| !term.is_empty())
    }

    /// Split and validate every term.
    pub fn tokenize<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        self.split(text)
            .map(|term| validate_term(term).map(|_| term))
            .collect()
    }
}

/// A term is valid when it holds no character below U+0020.
pub fn is_valid_term(term: &str) -> bool {
    !term.chars().any(|c| (c as u32) < 0x20)
}

pub fn validate_term(term: &str) -> Result<()> {
    if is_valid_term(term) {
        Ok(())
    } else {
        Err(SieveError::invalid_term(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_repeated_spaces() {
        let tokenizer = SpaceTokenizer::new();
        let terms: Vec<_> = tokenizer.split("  cat   in the  city ").collect();
        assert_eq!(terms, vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn test_split_empty_text() {
        let tokenizer = SpaceTokenizer::new();
        assert_eq!(tokenizer.split("").count(), 0);
        assert_eq!(tokenizer.split("     ").count(), 0);
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        let tokenizer = SpaceTokenizer::new();
        let terms: Vec<_> = tokenizer.split("cat\tdog").collect();
        assert_eq!(terms, vec!["cat\tdog"]);
        assert!(matches!(
            tokenizer.tokenize("cat\tdog"),
            Err(SieveError::InvalidTerm(_))
        ));
    }

    #[test]
    fn test_control_characters_are_invalid() {
        assert!(is_valid_term("кот"));
        assert!(is_valid_term("-dog"));
        assert!(!is_valid_term("d\u{12}og"));
        assert!(!is_valid_term("\u{0}"));
        assert!(is_valid_term(" "));
    }
}
