//! Error types for Sieve.

use crate::lexical::document::DocId;

/// Main error type for Sieve operations.
///
/// Every variant is recoverable: a failed call leaves the engine exactly
/// as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// Negative or already used document id.
    #[error("Invalid document id {0}")]
    InvalidId(DocId),

    /// A term contains a control character (code point below 0x20).
    #[error("Invalid term: {0:?}")]
    InvalidTerm(String),

    /// A lone `-` or a token starting with `--`.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// The document does not exist (never added or already removed).
    #[error("Unknown document id {0}")]
    UnknownId(DocId),

    /// An argument outside of the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine configuration rejected at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SieveError {
    pub fn invalid_term(term: impl Into<String>) -> Self {
        SieveError::InvalidTerm(term.into())
    }

    pub fn malformed_query(msg: impl Into<String>) -> Self {
        SieveError::MalformedQuery(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SieveError::InvalidArgument(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SieveError::InvalidConfig(msg.into())
    }
}

/// Result type alias using SieveError.
pub type Result<T> = std::result::Result<T, SieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SieveError::InvalidId(-3);
        assert!(err.to_string().contains("-3"));

        let err = SieveError::invalid_term("ca\u{1}t");
        assert!(err.to_string().contains("Invalid term"));

        let err = SieveError::malformed_query("--cat");
        assert!(err.to_string().contains("--cat"));

        let err = SieveError::UnknownId(42);
        assert_eq!(err.to_string(), "Unknown document id 42");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SieveError = parse.unwrap_err().into();
        assert!(matches!(err, SieveError::Json(_)));
    }
}
