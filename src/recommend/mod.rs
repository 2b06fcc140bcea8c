//! Recommendation systems.
//!
//! Content-based item-to-item recommendation: descriptions become TF-IDF
//! vectors, every pair of items gets a cosine similarity score, and a query
//! ranks all other items by their score against the anchor item.
//!
//! The index is built once ([`IndexedCorpus::build`]) and is read-only
//! afterwards, so any number of queries may share it.
//!
//! # Quick Start
//!
//! ```
//! use aprender_recommend::data::Item;
//! use aprender_recommend::recommend::{recommend, IndexedCorpus};
//!
//! let catalog = vec![
//!     Item::with_description("A", "space opera adventure"),
//!     Item::with_description("B", "space opera saga"),
//!     Item::with_description("C", "cooking recipes"),
//! ];
//!
//! let corpus = IndexedCorpus::build(catalog).expect("catalog is not empty");
//! let titles = recommend(&corpus, "A", 2).expect("A is in the catalog");
//! assert_eq!(titles, vec!["B", "C"]);
//! ```

mod config;
pub mod content_based;

pub use config::IndexConfig;
pub use content_based::{
    recommend, recommend_default, recommend_scored, IndexedCorpus, Recommendation,
};

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_TOP_K: usize = 10;
