//! Analysis result tables emitted alongside article pages

use serde::{Deserialize, Serialize};

/// One keyword and its frequency across a result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Lower-cased token
    pub token: String,
    /// Occurrence count across article titles
    pub count: usize,
}

/// One named entity and its mention count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMentions {
    /// Entity name as listed in the reference table
    pub name: String,
    /// Case-insensitive whole-word occurrences across titles
    pub mentions: usize,
}

/// Entity mention tables, one per reference list
///
/// Entries with zero mentions are dropped; each table is sorted by
/// descending mention count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityTables {
    pub people: Vec<EntityMentions>,
    pub places: Vec<EntityMentions>,
    pub organizations: Vec<EntityMentions>,
}

/// Output of the extractive summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences joined as a single paragraph
    pub summary_text: String,
    /// Top keyword/weight pairs from the frequency map
    pub top_keywords: Vec<(String, f64)>,
}
