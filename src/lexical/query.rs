//! Parsed search queries.

pub mod parser;

use std::collections::BTreeSet;

pub use parser::QueryParser;

/// Required and excluded terms of one search call.
///
/// Terms borrow from the raw query string and are deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    pub required: BTreeSet<&'a str>,
    pub excluded: BTreeSet<&'a str>,
}

impl<'a> Query<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty()
    }
}
