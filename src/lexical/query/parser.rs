//! Query parser.
//!
//! # Syntax
//!
//! - `cat`: required term
//! - `-city`: excluded term
//! - `-` alone or `--city`: rejected as malformed
//!
//! Stop words are dropped from both sides after the `-` is stripped.

use std::sync::Arc;

use crate::analysis::TextAnalyzer;
use crate::analysis::tokenizer::validate_term;
use crate::error::{Result, SieveError};
use crate::lexical::query::Query;

#[derive(Debug, Clone)]
pub struct QueryParser {
    analyzer: Arc<TextAnalyzer>,
}

enum QueryTerm<'a> {
    Required(&'a str),
    Excluded(&'a str),
    Stop,
}

impl QueryParser {
    pub fn new(analyzer: Arc<TextAnalyzer>) -> Self {
        QueryParser { analyzer }
    }

    pub fn parse<'a>(&self, raw_query: &'a str) -> Result<Query<'a>> {
        let mut query = Query::new();
        for token in self.analyzer.tokenizer().split(raw_query) {
            match self.parse_term(token)? {
                QueryTerm::Required(term) => {
                    query.required.insert(term);
                }
                QueryTerm::Excluded(term) => {
                    query.excluded.insert(term);
                }
                QueryTerm::Stop => {}
            }
        }
        Ok(query)
    }

    fn parse_term<'a>(&self, token: &'a str) -> Result<QueryTerm<'a>> {
        let (term, excluded) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };
        if term.is_empty() || term.starts_with('-') {
            return Err(SieveError::malformed_query(format!(
                "invalid exclusion {token:?}"
            )));
        }
        validate_term(term)?;

        Ok(if self.analyzer.is_stop_word(term) {
            QueryTerm::Stop
        } else if excluded {
            QueryTerm::Excluded(term)
        } else {
            QueryTerm::Required(term)
        })
    }
}
