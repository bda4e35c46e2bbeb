use super::domain::{RetailerId, RetailerProfile};
use crate::onboarding::catalog::CatalogItem;

/// Error enumeration for storage-backend failures. An unknown identifier
/// is not an error at this layer: `fetch` returns `Ok(None)` so the
/// service can keep "unknown retailer" and "backend down" apart.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("record already exists")]
    Conflict,
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for retailer profiles so the service module can be
/// exercised with fake collaborators.
pub trait RetailerDirectory: Send + Sync {
    fn insert(&self, profile: RetailerProfile) -> Result<RetailerProfile, StorageError>;
    fn fetch(&self, id: &RetailerId) -> Result<Option<RetailerProfile>, StorageError>;
}

/// Storage abstraction for catalog entries. `count_items` is the live
/// count the eligibility evaluation re-derives on every request; a
/// retailer with no entries counts as zero, not as an error.
pub trait CatalogIndex: Send + Sync {
    fn insert(&self, item: CatalogItem) -> Result<CatalogItem, StorageError>;
    fn count_items(&self, retailer: &RetailerId) -> Result<u64, StorageError>;
    fn items_for(&self, retailer: &RetailerId) -> Result<Vec<CatalogItem>, StorageError>;
}
