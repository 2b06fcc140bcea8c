//! Text processing for content-based similarity.
//!
//! - [`tokenize`]: splitting raw text into terms
//! - [`stopwords`]: English stop word filtering
//! - [`vectorize`]: count and TF-IDF document vectorizers
//! - [`similarity`]: cosine similarity and pairwise similarity matrices

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same token sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` into owned tokens, in order of appearance.
    ///
    /// # Errors
    ///
    /// Implementations may reject input they cannot process.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
