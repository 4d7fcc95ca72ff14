//! Filter and sort specifications applied to the deduplicated article set

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::article::SentimentLabel;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending by publish time; unknown-time articles sort last
    #[default]
    Newest,
    /// Ascending by publish time; unknown-time articles sort first
    Oldest,
    /// Ascending case-insensitive by source name; empty source sorts first
    SourceAz,
}

impl SortMode {
    /// Parse a query value; unrecognized names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newest" => Some(SortMode::Newest),
            "oldest" => Some(SortMode::Oldest),
            "source_az" | "source" => Some(SortMode::SourceAz),
            _ => None,
        }
    }
}

/// Filter specification for one query
///
/// Every field is optional; an absent field is a no-op (allow all).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against title or summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Inclusive lower publish-date bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper publish-date bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    /// Allowed category labels; absent allows all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<HashSet<String>>,
    /// Allowed sentiment labels; absent allows all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiments: Option<HashSet<SentimentLabel>>,
}

impl FilterSpec {
    /// True when no predicate is set and the filter passes everything
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.categories.is_none()
            && self.sentiments.is_none()
    }
}
