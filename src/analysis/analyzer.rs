//! Analyzer combining the tokenizer with stop-word removal.

use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::SpaceTokenizer;
use crate::error::Result;

/// Turns document text into the terms that get indexed.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    tokenizer: SpaceTokenizer,
    stop_words: StopWords,
}

impl TextAnalyzer {
    pub fn new(stop_words: StopWords) -> Self {
        TextAnalyzer {
            tokenizer: SpaceTokenizer::new(),
            stop_words,
        }
    }

    pub fn tokenizer(&self) -> &SpaceTokenizer {
        &self.tokenizer
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    /// Split `text`, validate every term (stop words included) and drop
    /// the stop words. Fails on the first invalid term.
    pub fn analyze<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut terms = self.tokenizer.tokenize(text)?;
        terms.retain(|term| !self.stop_words.contains(term));
        Ok(terms)
    }
}
