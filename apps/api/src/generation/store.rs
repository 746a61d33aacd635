//! In-memory generation store — holds the latest output per form submission so
//! it can be regenerated or downloaded. Nothing survives a restart.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::generation::GenerationRecord;

pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Default)]
struct Inner {
    records: HashMap<Uuid, GenerationRecord>,
    /// Insertion order, oldest first.
    order: VecDeque<Uuid>,
}

#[derive(Clone)]
pub struct GenerationStore {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

impl Default for GenerationStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl GenerationStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    /// Stores a record, evicting the oldest one when full.
    pub async fn insert(&self, record: GenerationRecord) {
        let mut inner = self.inner.write().await;

        if !inner.records.contains_key(&record.id) {
            while inner.order.len() >= self.capacity {
                let Some(oldest) = inner.order.pop_front() else {
                    break;
                };
                inner.records.remove(&oldest);
                debug!("Evicted generation {oldest}");
            }
            inner.order.push_back(record.id);
        }

        inner.records.insert(record.id, record);
    }

    /// Mutates a stored record in place under the write lock and returns the result.
    /// `None` when the id is unknown or was evicted.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Option<GenerationRecord>
    where
        F: FnOnce(&mut GenerationRecord),
    {
        let mut inner = self.inner.write().await;
        let record = inner.records.get_mut(&id)?;
        f(record);
        Some(record.clone())
    }

    pub async fn get(&self, id: Uuid) -> Option<GenerationRecord> {
        self.inner.read().await.records.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::GeneratedCopy;
    use crate::models::product::ProductDetails;

    fn record(content: &str) -> GenerationRecord {
        GenerationRecord::new(
            ProductDetails::sample(),
            GeneratedCopy {
                content: content.to_string(),
                variants: Vec::new(),
                model: "stub-model".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = GenerationStore::default();
        let rec = record("copy");
        let id = rec.id;
        store.insert(rec).await;

        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.content, "copy");
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_oldest_evicted_at_capacity() {
        let store = GenerationStore::with_capacity(2);
        let first = record("one");
        let first_id = first.id;
        store.insert(first).await;
        store.insert(record("two")).await;
        store.insert(record("three")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(first_id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let store = GenerationStore::default();
        let rec = record("one");
        let id = rec.id;
        store.insert(rec).await;

        for _ in 0..2 {
            store
                .update(id, |r| {
                    r.apply_regeneration(GeneratedCopy {
                        content: "again".to_string(),
                        variants: Vec::new(),
                        model: "stub-model".to_string(),
                    })
                })
                .await
                .unwrap();
        }

        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.regenerations, 2);
        assert_eq!(fetched.content, "again");
    }

    #[tokio::test]
    async fn test_update_unknown_or_evicted_is_none() {
        let store = GenerationStore::with_capacity(1);
        let first = record("one");
        let first_id = first.id;
        store.insert(first).await;
        store.insert(record("two")).await;

        assert!(store.update(first_id, |_| {}).await.is_none());
        assert!(store.update(Uuid::new_v4(), |_| {}).await.is_none());
    }

    #[tokio::test]
    async fn test_reinsert_same_id_updates_in_place() {
        let store = GenerationStore::with_capacity(2);
        let mut rec = record("one");
        let id = rec.id;
        store.insert(rec.clone()).await;

        rec.apply_regeneration(GeneratedCopy {
            content: "one again".to_string(),
            variants: Vec::new(),
            model: "stub-model".to_string(),
        });
        store.insert(rec).await;
        store.insert(record("two")).await;

        assert_eq!(store.len().await, 2);
        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.content, "one again");
        assert_eq!(fetched.regenerations, 1);
    }
}
