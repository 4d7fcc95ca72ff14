//! Dashboard service
//!
//! Orchestrates the pipeline: fetch (through the TTL cache) -> extract ->
//! enrich -> dedupe -> filter/sort/cap. Every user interaction re-runs
//! the whole pipeline; per-feed failures degrade to an empty entry list
//! plus a user-visible warning, and only "no feeds configured" surfaces
//! as an error.

use tracing::{debug, info, warn};

use newsdesk_analysis as analysis;
use newsdesk_core::{
    Article, ArticlePage, EntityTables, FilterSpec, KeywordCount, NewsdeskError, NewsdeskResult,
    SortMode, SummaryResult,
};
use newsdesk_feed::{dates::DisplayZone, dedupe_by_link, extract_article, Feed, FeedClient, RawEntry};

use crate::config::ServiceConfig;
use crate::feed_cache::FeedCache;
use crate::filter;

/// The pipeline behind every dashboard interaction
pub struct DashboardService {
    client: FeedClient,
    cache: FeedCache,
    config: ServiceConfig,
}

impl DashboardService {
    /// Create a service from config
    pub fn new(config: ServiceConfig) -> Self {
        info!(
            "Initializing DashboardService with {} feeds, cache TTL {:?}",
            config.feeds.len(),
            config.cache_ttl
        );
        Self {
            client: FeedClient::with_timeout(config.fetch_timeout),
            cache: FeedCache::new(config.cache_ttl),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Names of the configured feeds, in registry order
    pub fn feed_names(&self) -> Vec<String> {
        self.config.feeds.iter().map(|f| f.name.clone()).collect()
    }

    fn feed(&self, name: &str) -> NewsdeskResult<&Feed> {
        if self.config.feeds.is_empty() {
            return Err(NewsdeskError::config("No feeds configured"));
        }
        self.config
            .feeds
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| NewsdeskError::not_found(format!("Unknown feed: {}", name)))
    }

    /// Fetch one feed through the cache; failure yields an empty list and
    /// a warning string instead of an error
    async fn fetch_entries(&self, feed: &Feed) -> (Vec<RawEntry>, Option<String>) {
        if let Some(entries) = self.cache.get(&feed.url).await {
            return (entries, None);
        }

        match self.client.fetch(&feed.url).await {
            Ok(entries) => {
                debug!("Fetched {} entries from {}", entries.len(), feed.name);
                self.cache.insert(&feed.url, entries.clone()).await;
                (entries, None)
            }
            Err(e) => {
                warn!("Failed to fetch feed {}: {}", feed.name, e);
                (
                    Vec::new(),
                    Some(format!("Failed to fetch {}: {}", feed.name, e)),
                )
            }
        }
    }

    /// Run the ingestion half of the pipeline for one named feed
    pub async fn load_articles(
        &self,
        feed_name: &str,
    ) -> NewsdeskResult<(Vec<Article>, Vec<String>)> {
        let feed = self.feed(feed_name)?;
        let (entries, warning) = self.fetch_entries(feed).await;
        let articles = assemble_articles(&entries);
        Ok((articles, warning.into_iter().collect()))
    }

    /// Full pipeline: load, filter, sort, cap, render display times
    pub async fn query(
        &self,
        feed_name: &str,
        spec: &FilterSpec,
        sort: SortMode,
        limit: usize,
        tz_name: &str,
    ) -> NewsdeskResult<ArticlePage> {
        let (articles, warnings) = self.load_articles(feed_name).await?;

        let mut matched = filter::apply_filters(articles, spec);
        let total_count = matched.len();
        filter::sort_articles(&mut matched, sort);
        filter::cap(&mut matched, limit);

        let zone = DisplayZone::resolve(tz_name);
        for article in &mut matched {
            let rendered = zone.format(article.published_at);
            article.published_display = (!rendered.is_empty()).then_some(rendered);
        }

        Ok(ArticlePage {
            items: matched,
            total_count,
            warnings,
        })
    }

    /// Keyword frequency table over the filtered result set
    pub async fn keywords(
        &self,
        feed_name: &str,
        spec: &FilterSpec,
        top_n: usize,
    ) -> NewsdeskResult<Vec<KeywordCount>> {
        let (articles, _) = self.load_articles(feed_name).await?;
        let matched = filter::apply_filters(articles, spec);
        Ok(analysis::extract_keywords(&matched, top_n))
    }

    /// Entity mention tables over the filtered result set
    pub async fn entities(
        &self,
        feed_name: &str,
        spec: &FilterSpec,
    ) -> NewsdeskResult<EntityTables> {
        let (articles, _) = self.load_articles(feed_name).await?;
        let matched = filter::apply_filters(articles, spec);
        Ok(analysis::extract_entities(&matched))
    }

    /// Extractive synopsis of the filtered result set
    pub async fn summary(
        &self,
        feed_name: &str,
        spec: &FilterSpec,
        max_sentences: usize,
    ) -> NewsdeskResult<SummaryResult> {
        let (articles, _) = self.load_articles(feed_name).await?;
        let matched = filter::apply_filters(articles, spec);
        Ok(analysis::summarize(&matched, max_sentences))
    }
}

/// Extract, enrich and dedupe raw entries into canonical articles
pub fn assemble_articles(entries: &[RawEntry]) -> Vec<Article> {
    let articles: Vec<Article> = entries
        .iter()
        .filter_map(extract_article)
        .map(|mut article| {
            article.sentiment = Some(analysis::classify(article.title_text()));
            article.category = Some(analysis::categorize(article.title_text()).to_string());
            article
        })
        .collect();
    dedupe_by_link(articles)
}
