//! In-memory growth history for tests and embedded use.
//!
//! Keeps the full append-only history in a [`tokio::sync::RwLock`]-guarded
//! vector. Appends preserve the uniqueness invariant the durable stores
//! enforce, so the coordinator behaves identically against either backend.

use async_trait::async_trait;
use millipi_types::HistoryRecord;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::GrowthStore;

/// In-process append-only history of growth events.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<HistoryRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the full history in append order (audit reads).
    pub async fn records(&self) -> Vec<HistoryRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl GrowthStore for MemoryStore {
    async fn load_latest(&self) -> Result<Option<HistoryRecord>, StoreError> {
        Ok(self.records.read().await.last().cloned())
    }

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|existing| existing.growth_count == record.growth_count)
        {
            return Err(StoreError::DuplicateCount(record.growth_count));
        }
        records.push(record.clone());
        tracing::debug!(count = %record.growth_count, "appended history record");
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(u64::try_from(self.records.read().await.len()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use millipi_types::{GrowthCount, PiExpansion};

    use super::*;

    fn record(count: u64, digits: &str) -> HistoryRecord {
        HistoryRecord::new(GrowthCount(count), PiExpansion::from_digits(digits))
    }

    #[tokio::test]
    async fn empty_store_has_no_latest() {
        let store = MemoryStore::new();
        assert_eq!(store.load_latest().await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn append_then_load_latest() {
        let store = MemoryStore::new();
        store.append(&record(1, "")).await.unwrap();
        store.append(&record(2, "1")).await.unwrap();

        let latest = store.load_latest().await.unwrap().unwrap();
        assert_eq!(latest.growth_count, GrowthCount(2));
        assert_eq!(latest.expansion.as_str(), "3.1");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_count_is_rejected() {
        let store = MemoryStore::new();
        store.append(&record(1, "")).await.unwrap();

        let result = store.append(&record(1, "")).await;
        assert!(matches!(result, Err(StoreError::DuplicateCount(count)) if count == GrowthCount(1)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn records_snapshot_preserves_order() {
        let store = MemoryStore::new();
        for count in 1..=4_u64 {
            store.append(&record(count, "14")).await.unwrap();
        }
        let counts: Vec<u64> = store
            .records()
            .await
            .iter()
            .map(|r| r.growth_count.value())
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }
}
