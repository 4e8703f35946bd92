//! The remote record the tracker loads from and writes back to.
//!
//! Exactly one row exists, addressed by a fixed id. Backends only fetch the
//! whole row or apply a partial update to it.

mod file;
#[cfg(test)]
mod memory;
mod rest;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::config::{Config, StoreBackend};
use crate::models::{RecordPatch, TrackerRecord};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i64),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable")]
    Unavailable,
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn fetch_record(&self, id: i64) -> Result<TrackerRecord, StoreError>;

    async fn update_record(&self, id: i64, patch: &RecordPatch) -> Result<(), StoreError>;
}

pub async fn from_config(config: &Config) -> Result<Arc<dyn RemoteStore>, StoreError> {
    match &config.backend {
        StoreBackend::Rest { url, api_key, table } => {
            Ok(Arc::new(RestStore::new(url.clone(), api_key.clone(), table.clone())?))
        }
        StoreBackend::File { path } => Ok(Arc::new(FileStore::open(path, config.record_id).await?)),
    }
}
