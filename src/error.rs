//! Error types for recommendation operations.
//!
//! Provides rich error context for library consumers. Every failure is
//! surfaced to the caller; nothing is downgraded to an empty success.

use thiserror::Error;

/// Main error type for `aprender-recommend`.
///
/// # Examples
///
/// ```
/// use aprender_recommend::error::RecommendError;
///
/// let err = RecommendError::TitleNotFound {
///     title: "Dune".to_string(),
/// };
/// assert!(err.to_string().contains("Dune"));
/// ```
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The catalog handed to the indexer has no items.
    #[error("Cannot build index: catalog is empty")]
    EmptyCorpus,

    /// No catalog item carries the queried title (includes blank queries).
    #[error("Title not found in catalog: {title:?}")]
    TitleNotFound {
        /// Title that was looked up
        title: String,
    },

    /// Vector or matrix dimensions don't match for the operation.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid vectorizer or reader configuration value.
    #[error("Invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A required column is absent from the catalog header row.
    #[error("Missing column '{column}' (available: {available:?})")]
    MissingColumn {
        /// Requested column name
        column: String,
        /// Header names found in the file
        available: Vec<String>,
    },

    /// Malformed delimited input.
    #[error("CSV parse error at line {line}: {message}")]
    Csv {
        /// 1-based line number (header is line 1)
        line: u64,
        /// Underlying parser message
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecommendError {
    /// Create a title-not-found error for `title`.
    #[must_use]
    pub fn title_not_found(title: &str) -> Self {
        Self::TitleNotFound {
            title: title.to_string(),
        }
    }

    /// Create an invalid configuration error with descriptive context.
    #[must_use]
    pub fn invalid_config(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Whether this error means "the query did not match any item".
    ///
    /// Presentation layers use this to pick a user-facing message.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TitleNotFound { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_display() {
        let err = RecommendError::EmptyCorpus;
        assert!(err.to_string().contains("catalog is empty"));
    }

    #[test]
    fn test_title_not_found_display() {
        let err = RecommendError::title_not_found("The Hobbit");
        let msg = err.to_string();
        assert!(msg.contains("Title not found"));
        assert!(msg.contains("The Hobbit"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_blank_title_is_quoted() {
        let err = RecommendError::title_not_found("");
        assert!(err.to_string().contains("\"\""));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = RecommendError::invalid_config("max_df", 1.5, "(0, 1]");
        let msg = err.to_string();
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("max_df"));
        assert!(msg.contains("1.5"));
        assert!(msg.contains("(0, 1]"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RecommendError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Dimension mismatch"));
        assert!(msg.contains("expected 3, got 2"));
    }

    #[test]
    fn test_missing_column_lists_headers() {
        let err = RecommendError::MissingColumn {
            column: "title".to_string(),
            available: vec!["Book".to_string(), "Description".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'title'"));
        assert!(msg.contains("Book"));
    }

    #[test]
    fn test_csv_display() {
        let err = RecommendError::Csv {
            line: 7,
            message: "unequal lengths".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RecommendError = io_err.into();
        assert!(matches!(err, RecommendError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
