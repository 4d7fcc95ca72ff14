//! Link deduplication
//!
//! A stable, single-pass, order-preserving filter: the first occurrence of
//! each distinct link wins. Not a re-sort.

use std::collections::HashSet;

use newsdesk_core::Article;

/// Retain only the first occurrence of each distinct non-empty link
///
/// Articles with an empty link are always dropped; they cannot be
/// deduplicated safely and have no stable identity for later interactions.
pub fn dedupe_by_link(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::with_capacity(articles.len());
    articles
        .into_iter()
        .filter(|article| {
            if article.link.is_empty() {
                return false;
            }
            seen.insert(article.link.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(link: &str, title: &str) -> Article {
        Article {
            id: link.to_string(),
            title: Some(title.to_string()),
            link: link.to_string(),
            summary: None,
            source: None,
            media_url: None,
            published_raw: None,
            published_at: None,
            published_display: None,
            sentiment: None,
            category: None,
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let input = vec![
            article("https://x/1", "first"),
            article("https://x/2", "second"),
            article("https://x/1", "duplicate with different title"),
        ];
        let out = dedupe_by_link(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title.as_deref(), Some("first"));
        assert_eq!(out[1].link, "https://x/2");
    }

    #[test]
    fn relative_order_is_preserved() {
        let input = vec![
            article("https://x/b", "b"),
            article("https://x/a", "a"),
            article("https://x/c", "c"),
            article("https://x/a", "a2"),
            article("https://x/b", "b2"),
        ];
        let out = dedupe_by_link(input);
        let links: Vec<&str> = out.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["https://x/b", "https://x/a", "https://x/c"]);
    }

    #[test]
    fn empty_links_are_dropped() {
        let input = vec![article("", "no link"), article("https://x/1", "ok")];
        let out = dedupe_by_link(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].link, "https://x/1");
    }

    #[test]
    fn each_distinct_link_appears_at_most_once() {
        let input: Vec<Article> = (0..20)
            .map(|i| article(&format!("https://x/{}", i % 5), "t"))
            .collect();
        let out = dedupe_by_link(input);
        let mut links: Vec<&str> = out.iter().map(|a| a.link.as_str()).collect();
        let before = links.len();
        links.dedup();
        assert_eq!(before, 5);
        assert_eq!(links.len(), 5);
    }
}
