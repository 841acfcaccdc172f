//! Cache key derivation from request paths.

use std::fmt;

use smol_str::SmolStr;

/// A string key addressing a cached response body.
///
/// Keys are `prefix + client segment`, where the client segment is the
/// request path minus the gateway's own routing prefix (the first two path
/// segments), with the leading `/` stripped:
///
/// ```
/// use waygate::CacheKey;
///
/// let key = CacheKey::derive("gw:", "/svc/v1/alice/profile");
/// assert_eq!(key.as_str(), "gw:alice/profile");
/// ```
///
/// A path with two or fewer segments leaves no remainder after the routing
/// prefix; it falls back to the whole path (leading `/` stripped) as the
/// segment, so such requests still cache under a stable key instead of being
/// rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CacheKey(SmolStr);

impl CacheKey {
    /// Derives the key for a request path under the configured prefix.
    pub fn derive(prefix: &str, path: &str) -> Self {
        let segment = client_segment(path);
        CacheKey(SmolStr::from(format!("{prefix}{segment}")))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops the first two path segments and the leading separator.
///
/// The leading segments carry the gateway's routing prefix, not
/// client-identifying information.
pub(crate) fn client_segment(path: &str) -> &str {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut rest = trimmed;
    for _ in 0..2 {
        match rest.split_once('/') {
            Some((_, tail)) => rest = tail,
            // No remainder after the routing prefix: keep the whole trimmed
            // path as the segment.
            None => return trimmed,
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_gateway_prefix_segments() {
        assert_eq!(client_segment("/svc/v1/alice/profile"), "alice/profile");
        assert_eq!(client_segment("/svc/v1/alice"), "alice");
    }

    #[test]
    fn short_paths_fall_back_to_whole_path() {
        assert_eq!(client_segment("/svc/v1"), "svc/v1");
        assert_eq!(client_segment("/svc"), "svc");
        assert_eq!(client_segment("/"), "");
    }

    #[test]
    fn derive_prepends_prefix() {
        let key = CacheKey::derive("gw:", "/svc/v1/alice/profile");
        assert_eq!(key.as_str(), "gw:alice/profile");
        assert_eq!(key.to_string(), "gw:alice/profile");
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let key = CacheKey::derive("", "/svc/v1/alice");
        assert_eq!(key.as_str(), "alice");
    }
}
