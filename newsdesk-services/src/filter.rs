//! Filter & sort engine
//!
//! Applies the filter specification to a deduplicated article sequence,
//! orders the survivors, and caps the output. Unknown-time articles rank
//! as the oldest possible time: they sort last under `Newest` and first
//! under `Oldest`.

use chrono::{DateTime, Utc};

use newsdesk_core::{Article, FilterSpec, SortMode};

/// Safety bound on page size; callers never receive more than this many
/// articles regardless of the requested count
pub const HARD_CAP: usize = 200;

/// True when the article passes every predicate in the filter
pub fn matches(article: &Article, spec: &FilterSpec) -> bool {
    if let Some(keyword) = spec.keyword.as_deref() {
        let needle = keyword.to_lowercase();
        if !needle.is_empty() {
            let in_title = article.title_text().to_lowercase().contains(&needle);
            let in_summary = article.summary_text().to_lowercase().contains(&needle);
            if !in_title && !in_summary {
                return false;
            }
        }
    }

    // Articles with unknown publish time pass the date filter
    // unconditionally, favoring inclusion over silent loss
    if let Some(ts) = article.published_at {
        let date = ts.date_naive();
        if let Some(from) = spec.date_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = spec.date_to {
            if date > to {
                return false;
            }
        }
    }

    if let Some(categories) = &spec.categories {
        match article.category.as_deref() {
            Some(category) if categories.contains(category) => {}
            _ => return false,
        }
    }

    if let Some(sentiments) = &spec.sentiments {
        match article.sentiment {
            Some(s) if sentiments.contains(&s.label) => {}
            _ => return false,
        }
    }

    true
}

/// Retain articles matching the filter, preserving order
pub fn apply_filters(articles: Vec<Article>, spec: &FilterSpec) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|a| matches(a, spec))
        .collect()
}

/// Stable sort in the requested mode
pub fn sort_articles(articles: &mut [Article], mode: SortMode) {
    match mode {
        SortMode::Newest => {
            articles.sort_by(|a, b| time_key(b).cmp(&time_key(a)));
        }
        SortMode::Oldest => {
            articles.sort_by(|a, b| time_key(a).cmp(&time_key(b)));
        }
        SortMode::SourceAz => {
            articles.sort_by(|a, b| source_key(a).cmp(&source_key(b)));
        }
    }
}

/// Truncate to `min(requested, HARD_CAP)`
pub fn cap(articles: &mut Vec<Article>, requested: usize) {
    articles.truncate(requested.min(HARD_CAP));
}

fn time_key(article: &Article) -> DateTime<Utc> {
    article.published_at.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn source_key(article: &Article) -> String {
    article.source.as_deref().unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use newsdesk_core::{Sentiment, SentimentLabel};
    use std::collections::HashSet;

    fn article(link: &str) -> Article {
        Article {
            id: link.to_string(),
            title: None,
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

    fn dated(link: &str, y: i32, m: u32, d: u32) -> Article {
        let mut a = article(link);
        a.published_at = Some(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap());
        a
    }

    #[test]
    fn keyword_matches_title_or_summary_case_insensitive() {
        let mut a = article("1");
        a.title = Some("Senate Passes Budget Bill".to_string());
        let mut b = article("2");
        b.summary = Some("A note about the budget process".to_string());
        let c = article("3");

        let spec = FilterSpec {
            keyword: Some("BUDGET".to_string()),
            ..Default::default()
        };
        assert!(matches(&a, &spec));
        assert!(matches(&b, &spec));
        assert!(!matches(&c, &spec));
    }

    #[test]
    fn unknown_time_passes_date_bounds() {
        let unknown = article("1");
        let spec = FilterSpec {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            ..Default::default()
        };
        assert!(matches(&unknown, &spec));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let a = dated("1", 2024, 1, 2);
        let spec = FilterSpec {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            ..Default::default()
        };
        assert!(matches(&a, &spec));

        let early = dated("2", 2024, 1, 1);
        assert!(!matches(&early, &spec));
    }

    #[test]
    fn category_and_sentiment_require_membership() {
        let mut a = article("1");
        a.category = Some("Legislation".to_string());
        a.sentiment = Some(Sentiment {
            label: SentimentLabel::Positive,
            score: 0.5,
        });

        let spec = FilterSpec {
            categories: Some(HashSet::from(["Legislation".to_string()])),
            sentiments: Some(HashSet::from([SentimentLabel::Positive])),
            ..Default::default()
        };
        assert!(matches(&a, &spec));

        let spec_other = FilterSpec {
            categories: Some(HashSet::from(["Judicial".to_string()])),
            ..Default::default()
        };
        assert!(!matches(&a, &spec_other));

        // Unlabeled articles fail a present set filter
        let bare = article("2");
        assert!(!matches(&bare, &spec));
    }

    #[test]
    fn adding_a_filter_never_grows_the_result() {
        let articles = vec![
            dated("1", 2024, 1, 1),
            dated("2", 2024, 1, 3),
            article("3"),
        ];
        let loose = apply_filters(articles.clone(), &FilterSpec::default());
        let tight = apply_filters(
            articles,
            &FilterSpec {
                date_from: Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
                ..Default::default()
            },
        );
        assert!(tight.len() <= loose.len());
    }

    #[test]
    fn newest_puts_unknown_time_last() {
        let mut articles = vec![article("unknown"), dated("old", 2024, 1, 1), dated("new", 2024, 1, 5)];
        sort_articles(&mut articles, SortMode::Newest);
        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["new", "old", "unknown"]);
    }

    #[test]
    fn oldest_puts_unknown_time_first() {
        let mut articles = vec![dated("new", 2024, 1, 5), article("unknown"), dated("old", 2024, 1, 1)];
        sort_articles(&mut articles, SortMode::Oldest);
        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["unknown", "old", "new"]);
    }

    #[test]
    fn equal_keys_keep_pre_sort_order() {
        let mut articles = vec![
            dated("first", 2024, 1, 1),
            dated("second", 2024, 1, 1),
            dated("third", 2024, 1, 1),
        ];
        sort_articles(&mut articles, SortMode::Newest);
        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["first", "second", "third"]);
    }

    #[test]
    fn source_sort_is_case_insensitive_with_empty_first() {
        let mut a = article("1");
        a.source = Some("zeta wire".to_string());
        let mut b = article("2");
        b.source = Some("Alpha News".to_string());
        let c = article("3");

        let mut articles = vec![a, b, c];
        sort_articles(&mut articles, SortMode::SourceAz);
        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(links, vec!["3", "2", "1"]);
    }

    #[test]
    fn cap_enforces_hard_bound() {
        let mut articles: Vec<Article> =
            (0..500).map(|i| article(&i.to_string())).collect();
        cap(&mut articles, 1000);
        assert_eq!(articles.len(), HARD_CAP);

        let mut articles: Vec<Article> =
            (0..500).map(|i| article(&i.to_string())).collect();
        cap(&mut articles, 10);
        assert_eq!(articles.len(), 10);
    }
}
