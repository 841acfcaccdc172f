//! Caching interceptor configuration.

/// Configuration for [`CachingInterceptor`](crate::CachingInterceptor).
///
/// One recognized option: the key prefix prepended to every derived cache key.
/// The prefix namespaces the gateway's entries inside a shared store.
#[derive(Clone, Debug, Default)]
pub struct CacheConfig {
    key_prefix: String,
}

impl CacheConfig {
    /// Creates a configuration with the given key prefix.
    pub fn new(key_prefix: impl Into<String>) -> Self {
        CacheConfig {
            key_prefix: key_prefix.into(),
        }
    }

    /// Returns the configured key prefix.
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }
}
