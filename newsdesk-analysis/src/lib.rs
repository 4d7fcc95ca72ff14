//! Text analysis heuristics for the Newsdesk dashboard
//!
//! Bag-of-words sentiment polarity, keyword frequency extraction, named
//! entity mention counts, rule-based categorization, and an extractive
//! summarizer. Everything here is deliberately heuristic: no model, no
//! network, and every failure path degrades to a neutral default.

pub mod category;
pub mod entities;
pub mod keywords;
pub mod sentiment;
pub mod summarize;
pub mod text;

pub use category::categorize;
pub use entities::extract_entities;
pub use keywords::extract_keywords;
pub use sentiment::classify;
pub use summarize::summarize;
