//! Index build configuration.

use crate::error::{RecommendError, Result};
use crate::text::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};

/// Settings for the term-weighting transform used by
/// [`IndexedCorpus::build_with`](super::IndexedCorpus::build_with).
///
/// The default is English stop words, lowercasing, raw term counts, and
/// smoothed idf with no document-frequency cutoffs.
///
/// # Examples
///
/// ```
/// use aprender_recommend::recommend::IndexConfig;
///
/// let config = IndexConfig::default().with_sublinear_tf(true).with_max_df(0.8);
/// assert!(config.validate().is_ok());
/// assert!(IndexConfig::default().with_max_df(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Drop English stop words
    pub stop_words: bool,
    /// Lowercase text before tokenizing
    pub lowercase: bool,
    /// Minimum number of documents a term must appear in
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in, in (0, 1]
    pub max_df: f64,
    /// Use 1 + ln(tf) instead of raw counts
    pub sublinear_tf: bool,
    /// Smooth idf as if one extra document contained every term
    pub smooth_idf: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            stop_words: true,
            lowercase: true,
            min_df: 1,
            max_df: 1.0,
            sublinear_tf: false,
            smooth_idf: true,
        }
    }
}

impl IndexConfig {
    /// Enable or disable English stop word removal.
    #[must_use]
    pub fn with_stop_words(mut self, enabled: bool) -> Self {
        self.stop_words = enabled;
        self
    }

    /// Enable or disable lowercasing.
    #[must_use]
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Set the minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the maximum document frequency fraction.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    /// Enable or disable sublinear term frequency.
    #[must_use]
    pub fn with_sublinear_tf(mut self, enabled: bool) -> Self {
        self.sublinear_tf = enabled;
        self
    }

    /// Enable or disable idf smoothing.
    #[must_use]
    pub fn with_smooth_idf(mut self, enabled: bool) -> Self {
        self.smooth_idf = enabled;
        self
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidConfig`] for `min_df == 0` or a
    /// `max_df` outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.min_df == 0 {
            return Err(RecommendError::invalid_config("min_df", self.min_df, ">= 1"));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(RecommendError::invalid_config(
                "max_df",
                self.max_df,
                "(0, 1]",
            ));
        }
        Ok(())
    }

    /// Build an unfitted vectorizer with these settings.
    pub(crate) fn vectorizer(&self) -> TfidfVectorizer {
        let vectorizer = TfidfVectorizer::new()
            .with_lowercase(self.lowercase)
            .with_min_df(self.min_df)
            .with_max_df(self.max_df)
            .with_sublinear_tf(self.sublinear_tf)
            .with_smooth_idf(self.smooth_idf);

        if self.stop_words {
            vectorizer.with_stop_words_english()
        } else {
            vectorizer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(IndexConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_min_df_rejected() {
        let err = IndexConfig::default()
            .with_min_df(0)
            .validate()
            .expect_err("min_df must be positive");
        assert!(err.to_string().contains("min_df"));
    }

    #[test]
    fn test_max_df_bounds() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(
                IndexConfig::default().with_max_df(bad).validate().is_err(),
                "max_df = {bad} should be rejected"
            );
        }
        assert!(IndexConfig::default().with_max_df(1.0).validate().is_ok());
        assert!(IndexConfig::default().with_max_df(0.01).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: IndexConfig =
            serde_json::from_str(r#"{"sublinear_tf": true}"#).expect("valid json");
        assert!(config.sublinear_tf);
        assert!(config.stop_words);
        assert_eq!(config.min_df, 1);
    }

    #[test]
    fn test_vectorizer_respects_stop_words_flag() {
        let docs = ["the saga"];

        let mut with_stop = IndexConfig::default().vectorizer();
        with_stop.fit(&docs).expect("fit should succeed");
        assert_eq!(with_stop.vocabulary_size(), 1);

        let mut without_stop = IndexConfig::default().with_stop_words(false).vectorizer();
        without_stop.fit(&docs).expect("fit should succeed");
        assert_eq!(without_stop.vocabulary_size(), 2);
    }
}
