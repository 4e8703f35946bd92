use super::{RemoteStore, StoreError};
use crate::models::{RecordPatch, TrackerRecord};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-process row with switchable outages and a log of applied writes.
#[derive(Default)]
pub struct MemoryStore {
    id: i64,
    row: Mutex<Option<TrackerRecord>>,
    writes: Mutex<Vec<RecordPatch>>,
    reads_fail: AtomicBool,
    writes_fail: AtomicBool,
}

impl MemoryStore {
    pub fn new(id: i64, record: TrackerRecord) -> Self {
        Self {
            id,
            row: Mutex::new(Some(record)),
            ..Self::default()
        }
    }

    pub fn empty(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn set_reads_fail(&self, fail: bool) {
        self.reads_fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_writes_fail(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::SeqCst);
    }

    pub fn record(&self) -> Option<TrackerRecord> {
        self.row.lock().ok().and_then(|row| row.clone())
    }

    /// Patches applied so far, oldest first.
    pub fn writes(&self) -> Vec<RecordPatch> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn fetch_record(&self, id: i64) -> Result<TrackerRecord, StoreError> {
        if self.reads_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let row = self.row.lock().map_err(|_| StoreError::Unavailable)?;
        match row.as_ref() {
            Some(record) if id == self.id => Ok(record.clone()),
            _ => Err(StoreError::NotFound(id)),
        }
    }

    async fn update_record(&self, id: i64, patch: &RecordPatch) -> Result<(), StoreError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let mut row = self.row.lock().map_err(|_| StoreError::Unavailable)?;
        match row.as_mut() {
            Some(record) if id == self.id => patch.apply_to(record),
            _ => return Err(StoreError::NotFound(id)),
        }
        drop(row);

        if let Ok(mut writes) = self.writes.lock() {
            writes.push(patch.clone());
        }
        Ok(())
    }
}
