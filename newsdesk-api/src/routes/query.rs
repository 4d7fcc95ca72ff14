//! Shared query-parameter parsing for article-shaped endpoints

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use newsdesk_core::{FilterSpec, Preferences, SentimentLabel, SortMode};

/// Query parameters accepted by `/articles` and `/export.csv`
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    /// Named feed; defaults to the saved preference
    pub feed: Option<String>,
    /// Keyword substring filter
    pub keyword: Option<String>,
    /// Inclusive date bounds, ISO `YYYY-MM-DD`
    pub from: Option<String>,
    pub to: Option<String>,
    /// Comma-separated category allow-list
    pub category: Option<String>,
    /// Comma-separated sentiment allow-list
    pub sentiment: Option<String>,
    /// Sort mode name
    pub sort: Option<String>,
    /// Page size; defaults to the saved preference
    pub limit: Option<usize>,
    /// Display timezone name; defaults to the saved preference
    pub tz: Option<String>,
}

/// Fully resolved query, defaults filled in from saved preferences
#[derive(Debug)]
pub struct ResolvedQuery {
    pub feed: String,
    pub spec: FilterSpec,
    pub sort: SortMode,
    pub limit: usize,
    pub tz: String,
}

impl ArticlesQuery {
    /// Validate and resolve against the preference snapshot
    pub fn resolve(self, prefs: &Preferences) -> Result<ResolvedQuery, String> {
        let date_from = self
            .from
            .as_deref()
            .map(parse_date)
            .transpose()?;
        let date_to = self.to.as_deref().map(parse_date).transpose()?;

        let sort = match self.sort.as_deref() {
            Some(raw) => {
                SortMode::parse(raw).ok_or_else(|| format!("Unknown sort mode: {}", raw))?
            }
            None => prefs.sort,
        };

        let sentiments = self
            .sentiment
            .as_deref()
            .map(parse_sentiments)
            .transpose()?;

        let categories: Option<HashSet<String>> = self.category.as_deref().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        });

        let keyword = self
            .keyword
            .clone()
            .or_else(|| prefs.keyword.clone())
            .filter(|k| !k.trim().is_empty());

        Ok(ResolvedQuery {
            feed: self.feed.unwrap_or_else(|| prefs.feed_choice.clone()),
            spec: FilterSpec {
                keyword,
                date_from,
                date_to,
                categories,
                sentiments,
            },
            sort,
            limit: self.limit.unwrap_or(prefs.num_articles),
            tz: self.tz.unwrap_or_else(|| prefs.tz_choice.clone()),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date (expected YYYY-MM-DD): {}", raw))
}

fn parse_sentiments(raw: &str) -> Result<HashSet<SentimentLabel>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| SentimentLabel::parse(s).ok_or_else(|| format!("Unknown sentiment: {}", s)))
        .collect()
}
