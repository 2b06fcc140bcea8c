//! Tokenization strategies for description text.
//!
//! - [`WhitespaceTokenizer`] splits on Unicode whitespace, keeping punctuation.
//! - [`TermTokenizer`] extracts runs of word characters, the default used by
//!   the vectorizers.

use crate::error::Result;
use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// # Examples
///
/// ```
/// use aprender_recommend::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello,   world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

/// Word-character tokenizer.
///
/// A token is a maximal run of word characters (Unicode alphanumerics and
/// `_`). Runs shorter than `min_len` characters are dropped, so with the
/// default of 2 single letters like "a" or "I" never reach the vocabulary.
/// Punctuation, including apostrophes and hyphens, separates tokens.
///
/// # Examples
///
/// ```
/// use aprender_recommend::text::{Tokenizer, tokenize::TermTokenizer};
///
/// let tokenizer = TermTokenizer::new();
/// let tokens = tokenizer.tokenize("A sci-fi saga, 2nd ed.").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["sci", "fi", "saga", "2nd", "ed"]);
/// ```
#[derive(Debug, Clone)]
pub struct TermTokenizer {
    min_len: usize,
}

impl TermTokenizer {
    /// Create a tokenizer keeping runs of at least two word characters.
    #[must_use]
    pub fn new() -> Self {
        Self { min_len: 2 }
    }

    /// Set the minimum token length in characters (at least 1).
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Default for TermTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TermTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split(|c: char| !Self::is_word_char(c))
            .filter(|t| t.chars().count() >= self.min_len)
            .map(ToString::to_string)
            .collect())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
