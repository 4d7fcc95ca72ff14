//! TTL cache for feed fetch results
//!
//! An explicit key -> (value, expiry) map: entries invalidate strictly by
//! elapsed time, never by content change. The cache is the only shared
//! mutable state crossing request boundaries besides the preferences
//! file, so it sits behind an async lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use newsdesk_feed::RawEntry;

/// One cached value with its expiry time
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// URL-keyed cache of parsed feed entries
pub struct FeedCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<Vec<RawEntry>>>>,
}

impl FeedCache {
    /// Create a cache with the given freshness window
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached entries for a URL if still fresh
    pub async fn get(&self, url: &str) -> Option<Vec<RawEntry>> {
        let entries = self.entries.read().await;
        match entries.get(url) {
            Some(entry) if !entry.is_expired() => {
                debug!("Feed cache hit for {}", url);
                Some(entry.data.clone())
            }
            _ => None,
        }
    }

    /// Store a fetch result, replacing any stale entry
    pub async fn insert(&self, url: &str, data: Vec<RawEntry>) {
        let mut entries = self.entries.write().await;
        entries.insert(url.to_string(), CacheEntry::new(data, self.ttl));
    }

    /// Drop every entry; the next call per URL refetches
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> RawEntry {
        RawEntry {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fresh_entry_is_returned() {
        let cache = FeedCache::new(Duration::from_secs(600));
        cache.insert("https://feed/a", vec![entry("one")]).await;

        let hit = cache.get("https://feed/a").await.expect("cache hit");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title.as_deref(), Some("one"));
    }

    #[tokio::test]
    async fn expired_entry_is_a_miss() {
        let cache = FeedCache::new(Duration::from_millis(10));
        cache.insert("https://feed/a", vec![entry("one")]).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("https://feed/a").await.is_none());
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let cache = FeedCache::new(Duration::from_secs(600));
        cache.insert("https://feed/a", vec![entry("a")]).await;

        assert!(cache.get("https://feed/b").await.is_none());
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let cache = FeedCache::new(Duration::from_secs(600));
        cache.insert("https://feed/a", vec![entry("a")]).await;
        cache.clear().await;
        assert!(cache.get("https://feed/a").await.is_none());
    }
}
