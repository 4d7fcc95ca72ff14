//! Canonical article record produced by the ingestion pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Polarity class assigned by the sentiment analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display name used in exports and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Parse a filter/query value; unrecognized names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Some(SentimentLabel::Positive),
            "neutral" => Some(SentimentLabel::Neutral),
            "negative" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

/// Sentiment classification for one article
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Polarity class derived from the score
    pub label: SentimentLabel,
    /// Polarity score in [-1.0, 1.0]
    pub score: f64,
}

/// A normalized news article
///
/// Created once per fetch cycle from a raw feed entry, enriched in place by
/// the analyzer, and never mutated after entering a filtered result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier (hex sha256 prefix of the link)
    pub id: String,
    /// Article headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Canonical article URL; unique key once deduplicated
    pub link: String,
    /// Summary/description text with HTML stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Name of the publishing feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Thumbnail or lead-image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Publish timestamp as it appeared in the feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_raw: Option<String>,
    /// Publish timestamp normalized to UTC; `None` when unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Publish time rendered in the requested display zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_display: Option<String>,
    /// Sentiment classification of the headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// First-match-wins category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Article {
    /// Title text, or the empty string when the feed omitted one
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Summary text, or the empty string when absent
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

/// One page of filtered, sorted articles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePage {
    /// Articles in final display order
    pub items: Vec<Article>,
    /// Number of articles that matched the filters before capping
    pub total_count: usize,
    /// Warnings surfaced by the fetch stage (failed feeds), if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
