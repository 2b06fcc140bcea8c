//! Document vectorizers: bag-of-words counts and TF-IDF weights.
//!
//! Both vectorizers learn a vocabulary from a corpus (`fit`) and map documents
//! onto it (`transform`). The vocabulary is sorted lexicographically, so the
//! column order of every produced matrix depends only on the corpus.
//!
//! # Examples
//!
//! ```
//! use aprender_recommend::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec!["space opera adventure", "space opera saga", "cooking recipes"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//!
//! let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(matrix.shape(), (3, 6));
//! ```

use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::TermTokenizer;
use crate::text::Tokenizer;
use std::collections::{BTreeMap, HashSet};

/// Count vectorizer that converts text documents to a term-count matrix.
///
/// Each row is a document, each column a vocabulary term, each cell the
/// number of occurrences of that term in that document.
///
/// # Examples
///
/// ```
/// use aprender_recommend::text::vectorize::CountVectorizer;
///
/// let docs = vec!["cat dog", "dog bird", "cat bird bird"];
/// let mut vectorizer = CountVectorizer::new();
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.shape(), (3, 3));
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    /// term -> column index, ordered by term
    vocabulary: BTreeMap<String, usize>,
    lowercase: bool,
    /// Minimum number of documents a term must appear in
    min_df: usize,
    /// Maximum fraction of documents a term may appear in
    max_df: f64,
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` with the default [`TermTokenizer`],
    /// lowercasing enabled and no stop words.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(TermTokenizer::new()),
            vocabulary: BTreeMap::new(),
            lowercase: true,
            min_df: 1,
            max_df: 1.0,
            stop_words: None,
        }
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set minimum document frequency (at least 1).
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Set maximum document frequency as a fraction of documents (0.0-1.0).
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use aprender_recommend::text::vectorize::CountVectorizer;
    /// use aprender_recommend::text::tokenize::WhitespaceTokenizer;
    ///
    /// let vectorizer = CountVectorizer::new()
    ///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to convert to lowercase before tokenizing.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize one document and drop stop words.
    fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let tokens = if self.lowercase {
            self.tokenizer.tokenize(&text.to_lowercase())?
        } else {
            self.tokenizer.tokenize(text)?
        };

        // Without lowercasing, stop words only match in their listed (lowercase) form.
        match &self.stop_words {
            Some(filter) if self.lowercase => filter.filter_owned(tokens),
            Some(filter) => Ok(tokens.into_iter().filter(|t| !filter.contains(t)).collect()),
            None => Ok(tokens),
        }
    }

    /// Learn vocabulary from documents and transform to count matrix.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCorpus`] if `documents` is empty.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn vocabulary from documents.
    ///
    /// Documents that contribute no terms are allowed; if no document
    /// contributes any term the vocabulary is empty and `transform` yields a
    /// zero-column matrix.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCorpus`] if `documents` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let n_docs = documents.len();
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique: HashSet<String> = self.analyze(doc.as_ref())?.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_df_count = self.max_df * n_docs as f64;
        self.vocabulary = doc_freq
            .into_iter()
            .filter(|&(_, df)| df >= self.min_df && df as f64 <= max_df_count)
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents to a count matrix using the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokenizer rejects a document.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut matrix = Matrix::zeros(n_docs, vocab_size);

        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.analyze(doc.as_ref())? {
                if let Some(&col) = self.vocabulary.get(&term) {
                    matrix.set(doc_idx, col, matrix.get(doc_idx, col) + 1.0);
                }
            }
        }

        Ok(matrix)
    }

    /// Get the learned vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF vectorizer that converts text to an L2-normalized TF-IDF matrix.
///
/// **TF-IDF Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of t in d            (or 1 + ln(count) when sublinear)
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1   (smoothed, default)
/// idf(t)      = ln(N / df(t)) + 1               (unsmoothed)
/// ```
/// where N is the number of documents and df(t) the number containing t.
/// Every row is then scaled to unit L2 norm; rows without any vocabulary
/// term stay all-zero.
///
/// # Examples
///
/// ```
/// use aprender_recommend::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["the cat sat on the mat", "the dog sat on the log"];
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    /// Count vectorizer for term frequencies
    count_vectorizer: CountVectorizer,
    /// Inverse document frequencies, indexed like the vocabulary
    idf_values: Vec<f64>,
    /// Use sublinear TF scaling: tf = 1 + ln(tf) if tf > 0
    sublinear_tf: bool,
    /// Add one to document frequencies, as if an extra document held every term
    smooth_idf: bool,
}

impl TfidfVectorizer {
    /// Create a new `TfidfVectorizer` (smoothed idf, raw tf, no stop words).
    #[must_use]
    pub fn new() -> Self {
        Self {
            count_vectorizer: CountVectorizer::new(),
            idf_values: Vec::new(),
            sublinear_tf: false,
            smooth_idf: true,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_tokenizer(tokenizer);
        self
    }

    /// Set whether to convert to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_lowercase(lowercase);
        self
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words_english();
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words(words);
        self
    }

    /// Set minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_min_df(min_df);
        self
    }

    /// Set maximum document frequency (0.0-1.0).
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_max_df(max_df);
        self
    }

    /// Enable sublinear TF scaling (1 + ln(tf)).
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Enable or disable idf smoothing.
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Learn vocabulary and IDF from documents, then transform.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCorpus`] if `documents` is empty.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn vocabulary and IDF values from documents.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCorpus`] if `documents` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.count_vectorizer.fit(documents)?;
        let counts = self.count_vectorizer.transform(documents)?;

        let (n_docs, vocab_size) = counts.shape();
        let mut doc_freq = vec![0usize; vocab_size];
        for row in counts.rows() {
            for (df, &count) in doc_freq.iter_mut().zip(row) {
                if count > 0.0 {
                    *df += 1;
                }
            }
        }

        let offset = if self.smooth_idf { 1.0 } else { 0.0 };
        let n = n_docs as f64 + offset;
        self.idf_values = doc_freq
            .into_iter()
            .map(|df| (n / (df as f64 + offset)).ln() + 1.0)
            .collect();

        Ok(())
    }

    /// Transform documents to an L2-normalized TF-IDF matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokenizer rejects a document.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        let counts = self.count_vectorizer.transform(documents)?;
        let (n_docs, vocab_size) = counts.shape();
        let mut weights = Matrix::zeros(n_docs, vocab_size);

        for (doc_idx, row) in counts.rows().enumerate() {
            for (term_idx, (&count, &idf)) in row.iter().zip(&self.idf_values).enumerate() {
                if count > 0.0 {
                    let tf = if self.sublinear_tf {
                        1.0 + count.ln()
                    } else {
                        count
                    };
                    weights.set(doc_idx, term_idx, tf * idf);
                }
            }
        }

        weights.l2_normalize_rows();
        Ok(weights)
    }

    /// Get the learned IDF values, indexed by vocabulary column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }

    /// Get the learned vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.count_vectorizer.vocabulary_size()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
