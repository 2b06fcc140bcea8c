//! Catalog records and catalog loading.
//!
//! An [`Item`] is one catalog entry. A catalog is an ordered `Vec<Item>`;
//! an item's position is its identity for the lifetime of an index.
//!
//! [`CsvCatalogReader`] turns delimited files into that sequence.

mod csv_reader;

pub use csv_reader::CsvCatalogReader;

use serde::{Deserialize, Serialize};

/// One catalog entry: a title and a free-text description.
///
/// The description is always present; missing values are normalized to the
/// empty string on construction.
///
/// # Examples
///
/// ```
/// use aprender_recommend::data::Item;
///
/// let item = Item::new("Dune", None::<String>);
/// assert_eq!(item.description, "");
/// assert!(!item.has_description());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display title, not guaranteed unique
    pub title: String,
    /// Free-text description, possibly empty
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Create an item, replacing a missing description with `""`.
    pub fn new(title: impl Into<String>, description: Option<impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            description: description.map(Into::into).unwrap_or_default(),
        }
    }

    /// Create an item with a description.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Whether the description holds any non-whitespace text.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
