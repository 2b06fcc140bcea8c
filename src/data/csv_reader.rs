//! Delimited-file catalog reader.

use super::Item;
use crate::error::{RecommendError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads a catalog from CSV (or any single-byte delimited) data.
///
/// The header row must name a title column and a description column.
/// Names match exactly first, then ASCII case-insensitively. Empty
/// description cells and rows too short to reach the description column
/// become empty descriptions.
///
/// # Examples
///
/// ```
/// use aprender_recommend::data::CsvCatalogReader;
///
/// let csv = "Book,Description\nDune,desert planet saga\nEmma,\n";
/// let items = CsvCatalogReader::new()
///     .with_title_column("Book")
///     .read_from(csv.as_bytes())
///     .expect("valid catalog");
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].description, "");
/// ```
#[derive(Debug, Clone)]
pub struct CsvCatalogReader {
    title_column: String,
    description_column: String,
    delimiter: u8,
}

impl CsvCatalogReader {
    /// Create a reader for `title` / `description` columns, comma-delimited.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title_column: "title".to_string(),
            description_column: "description".to_string(),
            delimiter: b',',
        }
    }

    /// Set the header name of the title column.
    #[must_use]
    pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
        self.title_column = column.into();
        self
    }

    /// Set the header name of the description column.
    #[must_use]
    pub fn with_description_column(mut self, column: impl Into<String>) -> Self {
        self.description_column = column.into();
        self
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a catalog from a file.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Io`] if the file cannot be opened, and any
    /// error of [`CsvCatalogReader::read_from`].
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Item>> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading catalog");
        let file = File::open(path)?;
        self.read_from(file)
    }

    /// Read a catalog from any reader.
    ///
    /// # Errors
    ///
    /// - [`RecommendError::MissingColumn`] if a configured column is absent
    /// - [`RecommendError::Csv`] on malformed records
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Item>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(&e, 1))?
            .iter()
            .map(ToString::to_string)
            .collect();

        let title_idx = find_column(&headers, &self.title_column)?;
        let description_idx = find_column(&headers, &self.description_column)?;
        debug!(title_idx, description_idx, "resolved catalog columns");

        let mut items = Vec::new();
        let mut missing_descriptions = 0usize;

        for (row, record) in reader.records().enumerate() {
            // header is line 1
            let line = row as u64 + 2;
            let record = record.map_err(|e| csv_error(&e, line))?;

            let title = record.get(title_idx).unwrap_or_default();
            let description = record.get(description_idx).filter(|d| !d.is_empty());
            if description.is_none() {
                missing_descriptions += 1;
            }
            items.push(Item::new(title, description));
        }

        if missing_descriptions > 0 {
            warn!(
                missing_descriptions,
                "catalog rows without description, treating as empty text"
            );
        }
        info!(items = items.len(), "catalog loaded");

        Ok(items)
    }
}

impl Default for CsvCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

fn find_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
        .ok_or_else(|| RecommendError::MissingColumn {
            column: name.to_string(),
            available: headers.to_vec(),
        })
}

fn csv_error(err: &csv::Error, fallback_line: u64) -> RecommendError {
    let line = err
        .position()
        .map_or(fallback_line, csv::Position::line);
    RecommendError::Csv {
        line,
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "csv_reader_tests.rs"]
mod tests;
