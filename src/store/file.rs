use super::{RemoteStore, StoreError};
use crate::models::{RecordPatch, TrackerRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct StoredRow {
    id: i64,
    #[serde(flatten)]
    record: TrackerRecord,
}

/// The single row kept as a JSON file on local disk.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens `path`, seeding it with the default row for `id` if it does not exist.
    pub async fn open(path: &Path, id: i64) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if fs::try_exists(path).await? {
            info!("using record file {}", path.display());
        } else {
            info!("seeding record file {}", path.display());
            let row = StoredRow {
                id,
                record: TrackerRecord::seed(),
            };
            write_row(path, &row).await?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        })
    }

    async fn read_row(&self, id: i64) -> Result<StoredRow, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id));
            }
            Err(err) => return Err(err.into()),
        };
        let row: StoredRow = serde_json::from_slice(&bytes)?;
        if row.id != id {
            return Err(StoreError::NotFound(id));
        }
        Ok(row)
    }
}

#[async_trait]
impl RemoteStore for FileStore {
    async fn fetch_record(&self, id: i64) -> Result<TrackerRecord, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_row(id).await?.record)
    }

    async fn update_record(&self, id: i64, patch: &RecordPatch) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut row = self.read_row(id).await?;
        patch.apply_to(&mut row.record);
        write_row(&self.path, &row).await
    }
}

async fn write_row(path: &Path, row: &StoredRow) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(row)?;
    fs::write(path, payload).await?;
    Ok(())
}
