//! Content-based recommendation over a precomputed similarity matrix.
//!
//! [`IndexedCorpus::build`] vectorizes every description once and stores the
//! full `n × n` cosine similarity matrix. Queries ([`recommend`],
//! [`recommend_scored`]) only read that matrix.
//!
//! Duplicate titles: a query resolves to the first catalog item carrying the
//! title. Later items with the same title are ordinary candidates and can show
//! up in the results. Deduplicating titles before building would change which
//! items are reachable, so it is left to the caller.

use super::{IndexConfig, DEFAULT_TOP_K};
use crate::data::Item;
use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::similarity::pairwise_cosine_similarity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An immutable, fully indexed catalog.
///
/// Holds the catalog, the fitted vocabulary and idf weights, the TF-IDF
/// feature matrix (one row per item) and the pairwise similarity matrix.
#[derive(Debug, Clone)]
pub struct IndexedCorpus {
    items: Vec<Item>,
    vocabulary: BTreeMap<String, usize>,
    idf_values: Vec<f64>,
    features: Matrix<f64>,
    similarities: Matrix<f64>,
}

impl IndexedCorpus {
    /// Build the index with the default [`IndexConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCorpus`] if `catalog` has no items.
    pub fn build(catalog: Vec<Item>) -> Result<Self> {
        Self::build_with(catalog, &IndexConfig::default())
    }

    /// Build the index with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`RecommendError::InvalidConfig`] if `config` fails validation
    /// - [`RecommendError::EmptyCorpus`] if `catalog` has no items
    pub fn build_with(catalog: Vec<Item>, config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let descriptions: Vec<&str> = catalog.iter().map(|i| i.description.as_str()).collect();
        let mut vectorizer = config.vectorizer();
        let features = vectorizer.fit_transform(&descriptions)?;
        let similarities = pairwise_cosine_similarity(&features);

        Ok(Self {
            vocabulary: vectorizer.vocabulary().clone(),
            idf_values: vectorizer.idf_values().to_vec(),
            items: catalog,
            features,
            similarities,
        })
    }

    /// Catalog items in index order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a successfully built corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Learned vocabulary (term -> feature column).
    #[must_use]
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Number of feature columns.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency per feature column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }

    /// TF-IDF feature matrix, `len() × vocabulary_size()`.
    #[must_use]
    pub fn feature_matrix(&self) -> &Matrix<f64> {
        &self.features
    }

    /// Pairwise similarity matrix, `len() × len()`.
    #[must_use]
    pub fn similarity_matrix(&self) -> &Matrix<f64> {
        &self.similarities
    }

    /// Similarity between items `i` and `j`, `None` if either is out of range.
    #[must_use]
    pub fn similarity(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.len();
        (i < n && j < n).then(|| self.similarities.get(i, j))
    }

    /// Index of the first item whose title equals `title` exactly.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }

    /// Top-`k` titles most similar to `query_title`. See [`recommend`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::TitleNotFound`] for blank or unknown titles.
    pub fn recommend(&self, query_title: &str, k: usize) -> Result<Vec<String>> {
        recommend(self, query_title, k)
    }
}

/// A ranked result with its catalog index and similarity to the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog index of the recommended item
    pub index: usize,
    /// Title of the recommended item
    pub title: String,
    /// Cosine similarity to the anchor, in [0, 1]
    pub score: f64,
}

/// Rank every other item against the anchor for `query_title`.
///
/// Results are ordered by descending score; equal scores keep ascending
/// catalog order. The anchor itself is never returned, but other items that
/// share its title are. At most `k` results are returned.
///
/// # Errors
///
/// Returns [`RecommendError::TitleNotFound`] if `query_title` is empty or
/// whitespace-only (no lookup is attempted), or if no item's title equals it
/// exactly.
///
/// # Examples
///
/// ```
/// use aprender_recommend::data::Item;
/// use aprender_recommend::recommend::{recommend_scored, IndexedCorpus};
///
/// let corpus = IndexedCorpus::build(vec![
///     Item::with_description("D", ""),
///     Item::with_description("E", "quiet harbor town"),
///     Item::with_description("F", "busy harbor city"),
/// ]).expect("catalog is not empty");
///
/// let ranked = recommend_scored(&corpus, "D", 10).expect("D exists");
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked.iter().all(|r| r.score == 0.0));
/// assert_eq!(ranked[0].index, 1);
/// ```
pub fn recommend_scored(
    corpus: &IndexedCorpus,
    query_title: &str,
    k: usize,
) -> Result<Vec<Recommendation>> {
    if query_title.trim().is_empty() {
        return Err(RecommendError::title_not_found(query_title));
    }
    let anchor = corpus
        .position(query_title)
        .ok_or_else(|| RecommendError::title_not_found(query_title))?;

    let mut ranked: Vec<(usize, f64)> = corpus
        .similarities
        .row_slice(anchor)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| idx != anchor)
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);

    Ok(ranked
        .into_iter()
        .map(|(index, score)| Recommendation {
            index,
            title: corpus.items[index].title.clone(),
            score,
        })
        .collect())
}

/// Top-`k` titles most similar to `query_title`, best first.
///
/// # Errors
///
/// Same as [`recommend_scored`].
pub fn recommend(corpus: &IndexedCorpus, query_title: &str, k: usize) -> Result<Vec<String>> {
    Ok(recommend_scored(corpus, query_title, k)?
        .into_iter()
        .map(|r| r.title)
        .collect())
}

/// [`recommend`] with `k = DEFAULT_TOP_K`.
///
/// # Errors
///
/// Same as [`recommend_scored`].
pub fn recommend_default(corpus: &IndexedCorpus, query_title: &str) -> Result<Vec<String>> {
    recommend(corpus, query_title, DEFAULT_TOP_K)
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
