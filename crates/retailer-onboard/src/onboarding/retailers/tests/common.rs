use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::config::StorageConfig;
use crate::onboarding::catalog::CatalogItem;
use crate::onboarding::media::{MediaError, MediaGateway, StoredObject};
use crate::onboarding::retailers::domain::{RetailerId, RetailerProfile, RetailerSubmission};
use crate::onboarding::retailers::eligibility::{EligibilityEngine, EligibilityThresholds};
use crate::onboarding::retailers::repository::{CatalogIndex, RetailerDirectory, StorageError};
use crate::onboarding::retailers::service::OnboardingService;

pub(super) fn thresholds() -> EligibilityThresholds {
    EligibilityThresholds::default()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(thresholds())
}

pub(super) fn storage_config() -> StorageConfig {
    StorageConfig {
        catalog_bucket: "catalog-archives".to_string(),
    }
}

pub(super) fn bare_submission() -> RetailerSubmission {
    RetailerSubmission {
        store_name: "Prairie Sky Farm Store".to_string(),
        address: None,
        contact_name: None,
        contact_phone: None,
        contact_email: None,
        logo_url: None,
        revenue: None,
        gmv: None,
        store_count: None,
        pos_system: None,
        offers_ecommerce: None,
        offers_delivery: None,
        channel_partner: None,
    }
}

pub(super) fn qualified_submission() -> RetailerSubmission {
    RetailerSubmission {
        address: Some("412 Orchard Rd, Ames, IA".to_string()),
        contact_name: Some("Dana Whitfield".to_string()),
        contact_email: Some("dana@prairiesky.example".to_string()),
        revenue: Some(10_000.0),
        gmv: Some(8_000.0),
        store_count: Some(3),
        pos_system: Some("Square".to_string()),
        offers_delivery: Some(true),
        ..bare_submission()
    }
}

pub(super) fn profile_with(
    revenue: Option<f64>,
    gmv: Option<f64>,
    store_count: Option<u32>,
    pos_system: Option<&str>,
) -> RetailerProfile {
    RetailerProfile::from_submission(
        RetailerId("ret-fixture".to_string()),
        RetailerSubmission {
            revenue,
            gmv,
            store_count,
            pos_system: pos_system.map(str::to_string),
            ..bare_submission()
        },
        Utc::now(),
    )
}

#[derive(Default)]
pub(super) struct MemoryDirectory {
    profiles: Mutex<HashMap<RetailerId, RetailerProfile>>,
}

impl RetailerDirectory for MemoryDirectory {
    fn insert(&self, profile: RetailerProfile) -> Result<RetailerProfile, StorageError> {
        let mut guard = self.profiles.lock().expect("directory mutex poisoned");
        if guard.contains_key(&profile.id) {
            return Err(StorageError::Conflict);
        }
        guard.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    fn fetch(&self, id: &RetailerId) -> Result<Option<RetailerProfile>, StorageError> {
        let guard = self.profiles.lock().expect("directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default)]
pub(super) struct MemoryCatalog {
    items: Mutex<Vec<CatalogItem>>,
}

impl CatalogIndex for MemoryCatalog {
    fn insert(&self, item: CatalogItem) -> Result<CatalogItem, StorageError> {
        let mut guard = self.items.lock().expect("catalog mutex poisoned");
        guard.push(item.clone());
        Ok(item)
    }

    fn count_items(&self, retailer: &RetailerId) -> Result<u64, StorageError> {
        let guard = self.items.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|item| &item.retailer_id == retailer)
            .count() as u64)
    }

    fn items_for(&self, retailer: &RetailerId) -> Result<Vec<CatalogItem>, StorageError> {
        let guard = self.items.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|item| &item.retailer_id == retailer)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryMedia {
    objects: Mutex<Vec<StoredObject>>,
}

impl MediaGateway for MemoryMedia {
    fn store(
        &self,
        bucket: &str,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, MediaError> {
        let object = StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
        };
        self.objects
            .lock()
            .expect("media mutex poisoned")
            .push(object.clone());
        Ok(object)
    }
}

impl MemoryMedia {
    pub(super) fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().expect("media mutex poisoned").clone()
    }
}

pub(super) struct UnavailableDirectory;

impl RetailerDirectory for UnavailableDirectory {
    fn insert(&self, _profile: RetailerProfile) -> Result<RetailerProfile, StorageError> {
        Err(StorageError::Unavailable("directory offline".to_string()))
    }

    fn fetch(&self, _id: &RetailerId) -> Result<Option<RetailerProfile>, StorageError> {
        Err(StorageError::Unavailable("directory offline".to_string()))
    }
}

pub(super) struct UnavailableCatalog;

impl CatalogIndex for UnavailableCatalog {
    fn insert(&self, _item: CatalogItem) -> Result<CatalogItem, StorageError> {
        Err(StorageError::Unavailable("catalog offline".to_string()))
    }

    fn count_items(&self, _retailer: &RetailerId) -> Result<u64, StorageError> {
        Err(StorageError::Unavailable("catalog offline".to_string()))
    }

    fn items_for(&self, _retailer: &RetailerId) -> Result<Vec<CatalogItem>, StorageError> {
        Err(StorageError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) type MemoryService = OnboardingService<MemoryDirectory, MemoryCatalog, MemoryMedia>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryDirectory>,
    Arc<MemoryCatalog>,
    Arc<MemoryMedia>,
) {
    let retailers = Arc::new(MemoryDirectory::default());
    let catalog = Arc::new(MemoryCatalog::default());
    let media = Arc::new(MemoryMedia::default());
    let service = OnboardingService::new(
        retailers.clone(),
        catalog.clone(),
        media.clone(),
        thresholds(),
        storage_config(),
    );
    (service, retailers, catalog, media)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("json body")
}
