//! Immutable stop-word set.

use ahash::AHashSet;

use crate::analysis::tokenizer::{SpaceTokenizer, validate_term};
use crate::error::Result;

/// Terms excluded from indexing and from query matching.
///
/// Fixed at engine construction. Empty strings are discarded and every
/// remaining word must be a valid term.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any collection of words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = AHashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            validate_term(word)?;
            set.insert(word.to_string());
        }
        Ok(StopWords { words: set })
    }

    /// Build from space-separated text, e.g. `"in the and"`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(SpaceTokenizer::new().split(text))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stop words in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}
