//! Core types for the Newsdesk dashboard
//!
//! This crate defines the shared data structures used across the pipeline:
//! the canonical article record, filter and sort specifications, persisted
//! user preferences, and analysis result tables.

pub mod article;
pub mod error;
pub mod filter;
pub mod prefs;
pub mod stats;

pub use article::{Article, ArticlePage, Sentiment, SentimentLabel};
pub use error::NewsdeskError;
pub use filter::{FilterSpec, SortMode};
pub use prefs::Preferences;
pub use stats::{EntityMentions, EntityTables, KeywordCount, SummaryResult};

/// Result type alias for newsdesk operations
pub type NewsdeskResult<T> = Result<T, NewsdeskError>;
