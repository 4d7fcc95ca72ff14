//! Feed fetching
//!
//! Retrieves a syndication document by URL and parses it into an ordered
//! list of raw entries, RSS first with an Atom fallback. Source order is
//! preserved; normalization happens downstream.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::entry::RawEntry;
use crate::error::FeedError;

/// Default network timeout for a single feed fetch
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// A named feed definition
#[derive(Debug, Clone)]
pub struct Feed {
    /// Display name of the feed
    pub name: String,
    /// Feed document URL
    pub url: String,
}

impl Feed {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Feeds configured out of the box
pub fn default_feeds() -> Vec<Feed> {
    vec![
        Feed::new(
            "Top Stories",
            "https://rss.nytimes.com/services/xml/rss/nyt/HomePage.xml",
        ),
        Feed::new(
            "Politics",
            "https://rss.nytimes.com/services/xml/rss/nyt/Politics.xml",
        ),
    ]
}

/// HTTP client for feed documents
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a client with the default 10 s timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
    }

    /// Create a client with a custom network timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch and parse one feed into raw entries, preserving source order
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FeedError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", "Newsdesk/0.1")
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", url),
            });
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        parse_document(&content, url)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a feed document, trying RSS first and then Atom
pub fn parse_document(content: &[u8], url: &str) -> Result<Vec<RawEntry>, FeedError> {
    if let Ok(channel) = rss::Channel::read_from(content) {
        debug!("Parsed {} as RSS with {} items", url, channel.items().len());
        let feed_title = Some(channel.title());
        return Ok(channel
            .items()
            .iter()
            .map(|item| RawEntry::from_rss(item, feed_title))
            .collect());
    }

    if let Ok(atom_feed) = atom_syndication::Feed::read_from(content) {
        debug!(
            "Parsed {} as Atom with {} entries",
            url,
            atom_feed.entries().len()
        );
        let feed_title = atom_feed.title().as_str().to_string();
        return Ok(atom_feed
            .entries()
            .iter()
            .map(|entry| RawEntry::from_atom(entry, Some(&feed_title)))
            .collect());
    }

    Err(FeedError::ParseError(format!(
        "Failed to parse feed: {}",
        url
    )))
}
