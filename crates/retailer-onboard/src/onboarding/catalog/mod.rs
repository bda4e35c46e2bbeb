//! Catalog entries and the CSV ingestion path. Items reach the catalog three
//! ways: manual form entry, CSV import, or a staged photo upload.

pub(crate) mod importer;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::retailers::domain::RetailerId;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItemId(pub String);

impl fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a catalog entry entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Manual,
    CsvRow,
    Photo,
}

impl CatalogSource {
    pub const fn label(self) -> &'static str {
        match self {
            CatalogSource::Manual => "manual",
            CatalogSource::CsvRow => "csv_row",
            CatalogSource::Photo => "photo",
        }
    }
}

/// One product entry associated with a retailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub retailer_id: RetailerId,
    pub name: String,
    pub price: Option<f64>,
    pub unit_size: Option<String>,
    pub category: Option<String>,
    pub source: CatalogSource,
    pub media_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Manual SKU form payload. The image, if any, is staged to the object
/// store by the client and referenced here by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualSkuEntry {
    pub name: String,
    pub price: Option<f64>,
    pub unit_size: Option<String>,
    pub category: Option<String>,
    pub image_key: Option<String>,
}

/// Descriptor for a product photo already staged in the object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDescriptor {
    pub file_name: String,
    pub storage_key: String,
}

impl PhotoDescriptor {
    /// Item name derived from the file name, extension stripped.
    pub fn item_name(&self) -> String {
        let trimmed = self.file_name.trim();
        let stem = trimmed
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(trimmed);
        if stem.is_empty() {
            trimmed.to_string()
        } else {
            stem.to_string()
        }
    }
}

/// Outcome of a CSV catalog import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvImportSummary {
    pub accepted: usize,
    pub rejected: Vec<CsvRowIssue>,
    pub archive_key: String,
}

/// A CSV row that could not become a catalog entry, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRowIssue {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug)]
pub enum CatalogImportError {
    Csv(csv::Error),
}

impl fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
