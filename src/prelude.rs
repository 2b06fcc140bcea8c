//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use aprender_recommend::prelude::*;
//! ```

pub use crate::data::{CsvCatalogReader, Item};
pub use crate::error::{RecommendError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{
    recommend, recommend_default, recommend_scored, IndexConfig, IndexedCorpus, Recommendation,
    DEFAULT_TOP_K,
};
