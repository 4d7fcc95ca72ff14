//! Named-entity mention counting against fixed reference lists

use regex::RegexBuilder;
use tracing::debug;

use newsdesk_core::{Article, EntityMentions, EntityTables};

const PEOPLE: &[&str] = &[
    "Biden", "Trump", "Harris", "Pelosi", "Schumer", "McConnell", "Jeffries", "Putin",
    "Zelensky", "Xi Jinping", "Netanyahu", "Macron", "Starmer",
];

const PLACES: &[&str] = &[
    "Washington", "New York", "California", "Texas", "Florida", "Ukraine", "Russia", "China",
    "Israel", "Gaza", "Taiwan", "Europe", "Mexico",
];

const ORGANIZATIONS: &[&str] = &[
    "Senate", "House", "Congress", "White House", "Pentagon", "Supreme Court", "FBI",
    "NATO", "United Nations", "Federal Reserve", "State Department",
];

/// Count case-insensitive whole-word mentions of each reference entity
/// across all titles
///
/// Zero-mention entries are dropped; each table is sorted by descending
/// mention count.
pub fn extract_entities(articles: &[Article]) -> EntityTables {
    let corpus = articles
        .iter()
        .map(|a| a.title_text())
        .collect::<Vec<_>>()
        .join(" ");

    let tables = EntityTables {
        people: count_mentions(&corpus, PEOPLE),
        places: count_mentions(&corpus, PLACES),
        organizations: count_mentions(&corpus, ORGANIZATIONS),
    };
    debug!(
        "Entity extraction over {} titles: {} people, {} places, {} organizations",
        articles.len(),
        tables.people.len(),
        tables.places.len(),
        tables.organizations.len()
    );
    tables
}

fn count_mentions(corpus: &str, names: &[&str]) -> Vec<EntityMentions> {
    let mut mentions: Vec<EntityMentions> = names
        .iter()
        .filter_map(|name| {
            let pattern = format!(r"\b{}\b", regex::escape(name));
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .ok()?;
            let count = re.find_iter(corpus).count();
            (count > 0).then(|| EntityMentions {
                name: name.to_string(),
                mentions: count,
            })
        })
        .collect();

    mentions.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    mentions
}
