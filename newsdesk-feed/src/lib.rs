//! Feed ingestion and normalization for the Newsdesk dashboard
//!
//! This crate covers the front half of the pipeline: fetching RSS/Atom
//! documents, lifting heterogeneous entries into [`entry::RawEntry`],
//! extracting canonical [`newsdesk_core::Article`] records (media
//! precedence, field fallbacks), normalizing publish dates, and
//! deduplicating by link.

pub mod dates;
pub mod dedupe;
pub mod entry;
pub mod error;
pub mod extract;
pub mod fetch;

pub use dates::{format_in_zone, parse_published, DisplayZone};
pub use dedupe::dedupe_by_link;
pub use entry::{Enclosure, MediaRef, RawEntry};
pub use error::FeedError;
pub use extract::extract_article;
pub use fetch::{default_feeds, Feed, FeedClient};
