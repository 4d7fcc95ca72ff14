//! Rule-based article categorization
//!
//! An ordered list of category rules tested against the lower-cased
//! title; the first category with any keyword substring match wins, so a
//! title matching several rule sets is always assigned the earliest one.
//! Rule order is part of the observable behavior.

/// Fallback category for titles matching no rule
pub const DEFAULT_CATEGORY: &str = "General";

/// Ordered category rules; evaluation order is significant
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "Legislation",
        &["congress", "senate", "house", "bill", "legislation", "lawmakers", "vote"],
    ),
    (
        "Executive",
        &["president", "white house", "administration", "executive order", "cabinet"],
    ),
    (
        "Judicial",
        &["court", "judge", "justice", "ruling", "lawsuit", "trial"],
    ),
    (
        "Elections",
        &["election", "campaign", "poll", "ballot", "primary", "voters"],
    ),
    (
        "Economy",
        &["economy", "inflation", "market", "jobs", "trade", "tariff", "budget"],
    ),
    (
        "Foreign Affairs",
        &["ukraine", "russia", "china", "israel", "diplomacy", "treaty", "foreign", "war"],
    ),
];

/// Assign the first matching category for a title
pub fn categorize(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// All category labels, in rule order, plus the default
pub fn all_categories() -> Vec<&'static str> {
    CATEGORY_RULES
        .iter()
        .map(|(category, _)| *category)
        .chain(std::iter::once(DEFAULT_CATEGORY))
        .collect()
}
