//! Service configuration
//!
//! Externally configurable values carried in one explicit struct: feed
//! registry, cache TTL, article caps, thumbnail width, network timeout.
//! Environment variables override the defaults; business logic never
//! reads the environment directly.

use std::time::Duration;

use newsdesk_core::prefs::DEFAULT_THUMB_WIDTH;
use newsdesk_feed::{default_feeds, Feed};
use tracing::warn;

/// Default feed-cache freshness window
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
/// Default number of articles rendered per page
pub const DEFAULT_NUM_ARTICLES: usize = 60;

/// Configuration for [`crate::DashboardService`]
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Named feeds available to the dashboard
    pub feeds: Vec<Feed>,
    /// Freshness window for cached fetch results
    pub cache_ttl: Duration,
    /// Default per-page article count
    pub default_num_articles: usize,
    /// Thumbnail width handed to the rendering surface
    pub thumb_width: u32,
    /// Network timeout for a single feed fetch
    pub fetch_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            default_num_articles: DEFAULT_NUM_ARTICLES,
            thumb_width: DEFAULT_THUMB_WIDTH,
            fetch_timeout: Duration::from_secs(newsdesk_feed::fetch::FETCH_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Build a config from `NEWSDESK_*` environment variables, falling
    /// back to defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ttl) = env_parse::<u64>("NEWSDESK_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(ttl);
        }
        if let Some(n) = env_parse::<usize>("NEWSDESK_NUM_ARTICLES") {
            config.default_num_articles = n;
        }
        if let Some(w) = env_parse::<u32>("NEWSDESK_THUMB_WIDTH") {
            config.thumb_width = w;
        }

        // NEWSDESK_FEEDS replaces the default registry:
        // "Name|https://url;Other Name|https://other"
        if let Ok(spec) = std::env::var("NEWSDESK_FEEDS") {
            let feeds: Vec<Feed> = spec
                .split(';')
                .filter_map(|pair| {
                    let (name, url) = pair.split_once('|')?;
                    let (name, url) = (name.trim(), url.trim());
                    if name.is_empty() || url.is_empty() {
                        warn!("Ignoring malformed feed spec {:?}", pair);
                        return None;
                    }
                    Some(Feed::new(name, url))
                })
                .collect();
            if !feeds.is_empty() {
                config.feeds = feeds;
            }
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
