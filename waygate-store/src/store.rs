use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::StoreError;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// An external key-value service holding cached response bodies.
///
/// Implementations must be safe for concurrent use by many in-flight
/// requests; the caching interceptor shares one instance process-wide behind
/// an `Arc`. No expiry behavior is assumed: a key written with [`set`] stays
/// until the store itself decides otherwise.
///
/// [`set`]: KeyValueStore::set
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns whether `key` currently holds a value.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()>;

    /// Returns the name of this store, used in log records.
    fn name(&self) -> &str {
        "store"
    }
}

#[async_trait]
impl KeyValueStore for &dyn KeyValueStore {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        (*self).exists(key).await
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        (*self).get(key).await
    }

    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()> {
        (*self).set(key, value).await
    }

    fn name(&self) -> &str {
        (*self).name()
    }
}

#[async_trait]
impl KeyValueStore for Box<dyn KeyValueStore> {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key).await
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()> {
        (**self).set(key, value).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl KeyValueStore for Arc<dyn KeyValueStore> {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key).await
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()> {
        (**self).set(key, value).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
