//! Redis store implementation.

use async_trait::async_trait;
use bytes::Bytes;
use redis::{Client, aio::ConnectionManager};
use tokio::sync::OnceCell;
use tracing::trace;
use waygate_store::{KeyValueStore, StoreResult};

use crate::error::Error;

/// Redis [`KeyValueStore`] based on the redis-rs crate.
///
/// Uses a [`ConnectionManager`] for asynchronous network interaction; the
/// manager is created lazily on the first store operation and shared by all
/// clones of this store.
///
/// [`ConnectionManager`]: redis::aio::ConnectionManager
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    name: String,
}

impl RedisStore {
    /// Creates a store connected to a local Redis with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a new builder with default settings.
    #[must_use]
    pub fn builder() -> RedisStoreBuilder {
        RedisStoreBuilder::default()
    }

    /// Returns the lazily initialized connection manager.
    pub async fn connection(&self) -> StoreResult<&ConnectionManager> {
        trace!("get connection manager");
        let manager = self
            .connection
            .get_or_try_init(|| {
                trace!("initialize new redis connection manager");
                self.client.get_connection_manager()
            })
            .await
            .map_err(Error::from)?;
        Ok(manager)
    }
}

/// Builder for [`RedisStore`].
pub struct RedisStoreBuilder {
    connection_info: String,
    name: String,
}

impl Default for RedisStoreBuilder {
    fn default() -> Self {
        Self {
            connection_info: "redis://127.0.0.1/".to_owned(),
            name: "redis".to_owned(),
        }
    }
}

impl RedisStoreBuilder {
    /// Sets connection info (host, port, database, etc.) for the store.
    pub fn server(mut self, connection_info: impl Into<String>) -> Self {
        self.connection_info = connection_info.into();
        self
    }

    /// Sets a custom name for this store, used in log records.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Creates the store with the configured settings.
    pub fn build(self) -> Result<RedisStore, Error> {
        Ok(RedisStore {
            client: Client::open(self.connection_info)?,
            connection: OnceCell::new(),
            name: self.name,
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut con = self.connection().await?.clone();
        let exists: bool = redis::cmd("EXISTS")
            .arg(key)
            .query_async(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(exists)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        let mut con = self.connection().await?.clone();
        let data: Option<Vec<u8>> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(data.map(Bytes::from))
    }

    async fn set(&self, key: &str, value: Bytes) -> StoreResult<()> {
        let mut con = self.connection().await?.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value.as_ref())
            .query_async::<()>(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygate_store::StoreError;

    #[test]
    fn builder_rejects_invalid_url() {
        let result = RedisStore::builder().server("not-a-valid-url").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_sets_name() {
        let store = RedisStore::builder().name("sessions").build().unwrap();
        assert_eq!(KeyValueStore::name(&store), "sessions");
    }

    #[test]
    fn error_converts_to_store_error() {
        let redis_error = Client::open("not-a-valid-url").unwrap_err();
        let store_error: StoreError = Error::from(redis_error).into();
        assert!(matches!(store_error, StoreError::Connection(_)));
    }
}
