//! Canonical article extraction from raw entries
//!
//! Media extraction follows a strict precedence: structured media lists,
//! then enclosures, then an `<img>` sniffed out of the HTML summary.
//! Richer structured sources win over heuristic HTML scraping, and the
//! order is observable for feeds that expose more than one — keep it.

use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use newsdesk_core::Article;

use crate::dates;
use crate::entry::RawEntry;

/// Ordered media extraction strategies; the first non-empty result wins
const MEDIA_STRATEGIES: &[fn(&RawEntry) -> Option<String>] =
    &[from_media_lists, from_enclosure, from_summary_img];

/// Produce a canonical article from one raw entry
///
/// Entries without a link have no stable identity and yield `None`.
pub fn extract_article(entry: &RawEntry) -> Option<Article> {
    let link = entry.link.as_deref().unwrap_or("").trim();
    if link.is_empty() {
        return None;
    }

    let media_url = MEDIA_STRATEGIES.iter().find_map(|extract| extract(entry));

    // `summary` falls back to `description` when absent
    let summary_html = entry
        .summary
        .as_deref()
        .or(entry.description.as_deref());
    let summary = summary_html
        .map(strip_html)
        .filter(|s| !s.is_empty());

    let published_at =
        dates::resolve_published(entry.published.as_deref(), entry.published_parts);

    Some(Article {
        id: article_id(link),
        title: entry.title.clone(),
        link: link.to_string(),
        summary,
        source: entry.source_title.clone(),
        media_url,
        published_raw: entry.published.clone(),
        published_at,
        published_display: None,
        sentiment: None,
        category: None,
    })
}

/// Stable identifier derived from the link
fn article_id(link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(link.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}

/// Strategy 1: first media-content/media-thumbnail item, `url` or `value`
fn from_media_lists(entry: &RawEntry) -> Option<String> {
    let media = entry
        .media_content
        .first()
        .or_else(|| entry.media_thumbnail.first())?;
    media
        .url
        .clone()
        .or_else(|| media.value.clone())
        .filter(|u| !u.is_empty())
}

/// Strategy 2: first enclosure's href
fn from_enclosure(entry: &RawEntry) -> Option<String> {
    entry
        .enclosure
        .as_ref()
        .map(|e| e.href.clone())
        .filter(|u| !u.is_empty())
}

/// Strategy 3: first `<img src>` in the entry's HTML summary body
fn from_summary_img(entry: &RawEntry) -> Option<String> {
    let html = entry
        .summary
        .as_deref()
        .or(entry.description.as_deref())?;
    extract_image_from_html(html)
}

/// Find the first `<img src="...">` in an HTML fragment
pub fn extract_image_from_html(html: &str) -> Option<String> {
    static IMG_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = IMG_PATTERN
        .get_or_init(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("valid regex"));
    pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strip HTML tags and collapse whitespace
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Enclosure, MediaRef};
    use chrono::{TimeZone, Utc};

    fn entry_with_link() -> RawEntry {
        RawEntry {
            link: Some("https://example.com/story".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn entry_without_link_is_dropped() {
        assert!(extract_article(&RawEntry::default()).is_none());
        let blank = RawEntry {
            link: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(extract_article(&blank).is_none());
    }

    #[test]
    fn media_content_beats_sniffed_img() {
        let mut entry = entry_with_link();
        entry.media_content = vec![MediaRef {
            url: Some("https://cdn.example.com/structured.jpg".to_string()),
            value: None,
        }];
        entry.summary = Some("<img src='http://img/sniffed.jpg'/>Details.".to_string());

        let article = extract_article(&entry).unwrap();
        assert_eq!(
            article.media_url.as_deref(),
            Some("https://cdn.example.com/structured.jpg")
        );
    }

    #[test]
    fn media_value_used_when_url_absent() {
        let mut entry = entry_with_link();
        entry.media_thumbnail = vec![MediaRef {
            url: None,
            value: Some("https://cdn.example.com/thumb.jpg".to_string()),
        }];

        let article = extract_article(&entry).unwrap();
        assert_eq!(
            article.media_url.as_deref(),
            Some("https://cdn.example.com/thumb.jpg")
        );
    }

    #[test]
    fn enclosure_beats_sniffed_img() {
        let mut entry = entry_with_link();
        entry.enclosure = Some(Enclosure {
            href: "https://cdn.example.com/enclosed.jpg".to_string(),
            mime_type: Some("image/jpeg".to_string()),
        });
        entry.summary = Some("<img src='http://img/sniffed.jpg'/>".to_string());

        let article = extract_article(&entry).unwrap();
        assert_eq!(
            article.media_url.as_deref(),
            Some("https://cdn.example.com/enclosed.jpg")
        );
    }

    #[test]
    fn img_sniffed_from_summary_html() {
        let mut entry = entry_with_link();
        entry.summary = Some("<img src='http://img/a.jpg'/>Details here.".to_string());

        let article = extract_article(&entry).unwrap();
        assert_eq!(article.media_url.as_deref(), Some("http://img/a.jpg"));
        assert_eq!(article.summary.as_deref(), Some("Details here."));
    }

    #[test]
    fn no_media_anywhere_is_none() {
        let mut entry = entry_with_link();
        entry.summary = Some("Plain text only.".to_string());
        let article = extract_article(&entry).unwrap();
        assert!(article.media_url.is_none());
    }

    #[test]
    fn summary_falls_back_to_description() {
        let mut entry = entry_with_link();
        entry.description = Some("<p>From description</p>".to_string());
        let article = extract_article(&entry).unwrap();
        assert_eq!(article.summary.as_deref(), Some("From description"));
    }

    #[test]
    fn strip_html_removes_tags_and_entities() {
        assert_eq!(strip_html("<p>Hello <b>world</b>!</p>"), "Hello world!");
        assert_eq!(strip_html("a &amp; b"), "a & b");
    }

    #[test]
    fn example_scenario_senate_budget_bill() {
        let entry = RawEntry {
            title: Some("Senate Passes Budget Bill".to_string()),
            link: Some("https://x/1".to_string()),
            published: Some("Mon, 01 Jan 2024 10:00:00 GMT".to_string()),
            summary: Some("<img src='http://img/a.jpg'/>Details here.".to_string()),
            ..Default::default()
        };

        let article = extract_article(&entry).unwrap();
        assert_eq!(article.title.as_deref(), Some("Senate Passes Budget Bill"));
        assert_eq!(article.link, "https://x/1");
        assert_eq!(article.media_url.as_deref(), Some("http://img/a.jpg"));
        assert_eq!(
            article.published_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn ids_are_stable_per_link() {
        let a = extract_article(&entry_with_link()).unwrap();
        let b = extract_article(&entry_with_link()).unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 16);
    }
}
