//! Pipeline orchestration and persistence for the Newsdesk dashboard
//!
//! Ties the ingestion and analysis crates together behind a single
//! service: TTL-cached feed fetching, the filter & sort engine, the
//! preferences store, and CSV export.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod feed_cache;
pub mod filter;
pub mod prefs;

pub use config::ServiceConfig;
pub use dashboard::DashboardService;
pub use export::to_csv;
pub use feed_cache::FeedCache;
pub use filter::{apply_filters, sort_articles, HARD_CAP};
pub use prefs::PrefsStore;
