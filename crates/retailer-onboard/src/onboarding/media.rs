/// Reference to an object persisted in the external store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
}

/// Media backend failure.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media backend failure: {0}")]
    Backend(String),
}

/// Thin seam over the managed object store so flows that archive payloads
/// can be exercised against a fake backend. Signed-URL mechanics for
/// browser-side uploads live entirely outside this contract.
pub trait MediaGateway: Send + Sync {
    fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, MediaError>;
}
