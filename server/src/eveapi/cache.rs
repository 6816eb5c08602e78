//! Response cache handler.
//!
//! The client consults a [`ResponseCache`] before every GET and stores
//! successful bodies back with a TTL. This module supplies the contract and
//! one in-process implementation; policy beyond TTL expiry belongs to the
//! store, not the client.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Read/write contract the API client consults.
pub trait ResponseCache: Send + Sync {
    /// Fetch a cached response body, if present and not expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a response body under `key` for `ttl`.
    fn put(&self, key: String, body: String, ttl: Duration);
}

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// TTL-bounded in-process response cache.
///
/// Expired entries are dropped on read; there is no background sweeper.
/// Suitable for a single-process portal where the upstream already bounds
/// response staleness.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (possibly expired, not yet collected) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.body.clone());
            }
        }
        // Expired: collect it so the map does not grow unbounded.
        self.entries
            .remove_if(key, |_, entry| entry.expires_at <= Instant::now());
        None
    }

    fn put(&self, key: String, body: String, ttl: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                body,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let cache = MemoryCache::new();
        cache.put("k".into(), "body".into(), Duration::from_secs(60));
        assert_eq!(cache.get("k").as_deref(), Some("body"));
    }

    #[test]
    fn test_missing_key() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("absent"), None);
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = MemoryCache::new();
        cache.put("k".into(), "body".into(), Duration::ZERO);
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty(), "expired entry should be collected on read");
    }

    #[test]
    fn test_overwrite_refreshes_body() {
        let cache = MemoryCache::new();
        cache.put("k".into(), "old".into(), Duration::from_secs(60));
        cache.put("k".into(), "new".into(), Duration::from_secs(60));
        assert_eq!(cache.get("k").as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }
}
