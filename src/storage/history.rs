use std::collections::VecDeque;

use crate::constants::MAX_HISTORY;
use crate::models::HistoryRecord;
use crate::storage::{keys, load_json, save_json, SharedStore, StorageError};

/// Persisted request log, newest first, capped at [`MAX_HISTORY`] records
pub struct HistoryStore {
    records: VecDeque<HistoryRecord>,
    store: SharedStore,
}

impl HistoryStore {
    pub fn load(store: SharedStore) -> Self {
        let mut records: VecDeque<HistoryRecord> =
            load_json(store.as_ref(), keys::HISTORY).unwrap_or_default();
        records.truncate(MAX_HISTORY);
        HistoryStore { records, store }
    }

    /// Add a record as the newest entry, dropping the oldest beyond the cap
    pub fn record(&mut self, record: HistoryRecord) -> Result<(), StorageError> {
        self.records.push_front(record);
        self.records.truncate(MAX_HISTORY);
        self.persist()
    }

    /// Records from newest to oldest
    pub fn list(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Get record by index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    /// Remove the record at `index`; out of range leaves the log untouched
    pub fn delete_at(&mut self, index: usize) -> Result<Option<HistoryRecord>, StorageError> {
        let Some(removed) = self.records.remove(index) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), keys::HISTORY, &self.records)
    }
}
