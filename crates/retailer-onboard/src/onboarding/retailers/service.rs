use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{RetailerId, RetailerProfile, RetailerSubmission};
use super::eligibility::{EligibilityEngine, EligibilityReport, EligibilityThresholds};
use super::repository::{CatalogIndex, RetailerDirectory, StorageError};
use crate::config::StorageConfig;
use crate::onboarding::catalog::{
    importer, CatalogImportError, CatalogItem, CatalogItemId, CatalogSource, CsvImportSummary,
    ManualSkuEntry, PhotoDescriptor,
};
use crate::onboarding::media::{MediaError, MediaGateway};

/// Service composing the retailer directory, catalog index, media gateway,
/// and eligibility engine behind one facade.
pub struct OnboardingService<R, C, M> {
    retailers: Arc<R>,
    catalog: Arc<C>,
    media: Arc<M>,
    engine: Arc<EligibilityEngine>,
    storage: StorageConfig,
}

static RETAILER_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static CATALOG_ITEM_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static IMPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_retailer_id() -> RetailerId {
    let id = RETAILER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RetailerId(format!("ret-{id:06}"))
}

fn next_catalog_item_id() -> CatalogItemId {
    let id = CATALOG_ITEM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CatalogItemId(format!("sku-{id:06}"))
}

fn next_import_sequence() -> u64 {
    IMPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl<R, C, M> OnboardingService<R, C, M>
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    pub fn new(
        retailers: Arc<R>,
        catalog: Arc<C>,
        media: Arc<M>,
        thresholds: EligibilityThresholds,
        storage: StorageConfig,
    ) -> Self {
        Self {
            retailers,
            catalog,
            media,
            engine: Arc::new(EligibilityEngine::new(thresholds)),
            storage,
        }
    }

    /// Register a retailer from the onboarding form, returning the stored
    /// profile with its assigned identifier.
    pub fn register(
        &self,
        submission: RetailerSubmission,
    ) -> Result<RetailerProfile, OnboardingServiceError> {
        if submission.store_name.trim().is_empty() {
            return Err(ValidationError::MissingStoreName.into());
        }

        let profile = RetailerProfile::from_submission(next_retailer_id(), submission, Utc::now());
        let stored = self.retailers.insert(profile)?;
        Ok(stored)
    }

    /// Fetch a retailer's profile. An unknown identifier is its own
    /// outcome, never folded into storage failures.
    pub fn profile(&self, id: &RetailerId) -> Result<RetailerProfile, OnboardingServiceError> {
        if id.0.trim().is_empty() {
            return Err(ValidationError::MissingRetailerId.into());
        }

        self.retailers
            .fetch(id)?
            .ok_or_else(|| OnboardingServiceError::UnknownRetailer(id.clone()))
    }

    /// Evaluate marketplace eligibility: resolve the profile, take a live
    /// catalog count, and run both through the engine. A fetch or count
    /// failure surfaces as a storage error and is never interpreted as
    /// ineligibility.
    pub fn eligibility(&self, id: &RetailerId) -> Result<EligibilityReport, OnboardingServiceError> {
        let profile = self.profile(id)?;
        let catalog_items = self.catalog.count_items(&profile.id)?;
        Ok(self.engine.evaluate(&profile, catalog_items))
    }

    /// Record one manually entered SKU.
    pub fn add_manual_item(
        &self,
        id: &RetailerId,
        entry: ManualSkuEntry,
    ) -> Result<CatalogItem, OnboardingServiceError> {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingProductName.into());
        }

        let profile = self.profile(id)?;
        let item = CatalogItem {
            id: next_catalog_item_id(),
            retailer_id: profile.id,
            name,
            price: entry.price,
            unit_size: entry.unit_size,
            category: entry.category,
            source: CatalogSource::Manual,
            media_key: entry.image_key,
            created_at: Utc::now(),
        };

        let stored = self.catalog.insert(item)?;
        Ok(stored)
    }

    /// Import a CSV catalog. The raw payload is archived through the media
    /// gateway before rows are applied; unusable rows are reported in the
    /// summary rather than aborting the batch.
    pub fn import_catalog_csv(
        &self,
        id: &RetailerId,
        csv_text: &str,
    ) -> Result<CsvImportSummary, OnboardingServiceError> {
        let profile = self.profile(id)?;
        let parsed = importer::parse_products(csv_text.as_bytes())?;

        let archive_key = format!("{}/import-{:06}.csv", profile.id, next_import_sequence());
        let archived = self.media.store(
            &self.storage.catalog_bucket,
            &archive_key,
            csv_text.as_bytes().to_vec(),
            mime::TEXT_CSV.as_ref(),
        )?;

        let mut accepted = 0;
        for product in parsed.products {
            let item = CatalogItem {
                id: next_catalog_item_id(),
                retailer_id: profile.id.clone(),
                name: product.name,
                price: product.price,
                unit_size: product.unit_size,
                category: product.category,
                source: CatalogSource::CsvRow,
                media_key: None,
                created_at: Utc::now(),
            };
            self.catalog.insert(item)?;
            accepted += 1;
        }

        Ok(CsvImportSummary {
            accepted,
            rejected: parsed.issues,
            archive_key: archived.key,
        })
    }

    /// Record photo-derived catalog entries from descriptors of uploads
    /// already staged in the object store.
    pub fn attach_photos(
        &self,
        id: &RetailerId,
        photos: Vec<PhotoDescriptor>,
    ) -> Result<Vec<CatalogItem>, OnboardingServiceError> {
        if photos.is_empty() {
            return Err(ValidationError::EmptyPhotoBatch.into());
        }

        let profile = self.profile(id)?;
        let mut items = Vec::with_capacity(photos.len());
        for photo in photos {
            let item = CatalogItem {
                id: next_catalog_item_id(),
                retailer_id: profile.id.clone(),
                name: photo.item_name(),
                price: None,
                unit_size: None,
                category: None,
                source: CatalogSource::Photo,
                media_key: Some(photo.storage_key),
                created_at: Utc::now(),
            };
            items.push(self.catalog.insert(item)?);
        }

        Ok(items)
    }
}

/// Error raised by the onboarding service. Validation problems, unknown
/// retailers, and infrastructure failures stay in separate variants so the
/// API surface can report them distinctly.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown retailer {0}")]
    UnknownRetailer(RetailerId),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Import(#[from] CatalogImportError),
}

/// Caller-input problems rejected before any storage call is made.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("store_name is required")]
    MissingStoreName,
    #[error("retailer identifier is required")]
    MissingRetailerId,
    #[error("product name is required")]
    MissingProductName,
    #[error("photo batch is empty")]
    EmptyPhotoBatch,
}
