use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use retailer_onboard::onboarding::catalog::CatalogItem;
use retailer_onboard::onboarding::media::{MediaError, MediaGateway, StoredObject};
use retailer_onboard::onboarding::retailers::{
    CatalogIndex, RetailerDirectory, RetailerId, RetailerProfile, StorageError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRetailerDirectory {
    profiles: Arc<Mutex<HashMap<RetailerId, RetailerProfile>>>,
}

impl RetailerDirectory for InMemoryRetailerDirectory {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalogIndex {
    items: Arc<Mutex<Vec<CatalogItem>>>,
}

impl CatalogIndex for InMemoryCatalogIndex {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryMediaStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MediaGateway for InMemoryMediaStore {
    fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, MediaError> {
        let mut guard = self.objects.lock().expect("media mutex poisoned");
        guard.insert(format!("{bucket}/{key}"), bytes);
        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl InMemoryMediaStore {
    pub(crate) fn object_count(&self) -> usize {
        self.objects.lock().expect("media mutex poisoned").len()
    }
}
