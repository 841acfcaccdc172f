//! Simple in-memory store implementation using DashMap.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::{KeyValueStore, StoreResult};

/// In-process [`KeyValueStore`] backed by a [`DashMap`].
///
/// Thread-safe and cheap to clone (`Arc` internally). Useful for tests and
/// single-process deployments where an external store is not warranted.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, Bytes>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seeds an entry directly, bypassing the async interface.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.entries.insert(key.into(), value.into());
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
