//! aprender-recommend: content-based item recommendation in pure Rust.
//!
//! Items are described by free text. Descriptions are turned into TF-IDF
//! vectors once, every pair of items is scored by cosine similarity, and a
//! query ranks all other items against the item it names.
//!
//! # Quick Start
//!
//! ```
//! use aprender_recommend::prelude::*;
//!
//! let catalog = vec![
//!     Item::with_description("A", "space opera adventure"),
//!     Item::with_description("B", "space opera saga"),
//!     Item::with_description("C", "cooking recipes"),
//! ];
//!
//! let corpus = IndexedCorpus::build(catalog).expect("catalog is not empty");
//! assert_eq!(recommend(&corpus, "A", 2).expect("A exists"), vec!["B", "C"]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization, similarity
//! - [`recommend`]: Corpus indexing and ranking
//! - [`data`]: Catalog items and CSV catalog loading
//! - [`error`]: Error type shared by every module

pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{RecommendError, Result};
