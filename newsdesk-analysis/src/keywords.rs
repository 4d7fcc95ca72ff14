//! Keyword frequency extraction over article titles

use indexmap::IndexMap;

use newsdesk_core::{Article, KeywordCount};

use crate::text;

/// Minimum token length for keyword extraction
const MIN_TOKEN_LEN: usize = 4;

/// Top-N keywords by frequency across article titles
///
/// Tokens are lower-cased alphabetic runs of length >= 4 with stopwords
/// discarded. Ties are broken by first-encountered order, which the
/// insertion-ordered map preserves through the stable sort.
pub fn extract_keywords(articles: &[Article], top_n: usize) -> Vec<KeywordCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for article in articles {
        for token in text::alpha_tokens(article.title_text(), MIN_TOKEN_LEN) {
            if text::is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(token, count)| KeywordCount { token, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            id: String::new(),
            title: Some(title.to_string()),
            link: "https://x/1".to_string(),
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
    fn counts_and_ranks_by_frequency() {
        let articles = vec![
            article("Budget talks stall in Senate"),
            article("Senate budget vote delayed"),
            article("Budget deal reached"),
        ];
        let keywords = extract_keywords(&articles, 2);
        assert_eq!(keywords[0].token, "budget");
        assert_eq!(keywords[0].count, 3);
        assert_eq!(keywords[1].token, "senate");
        assert_eq!(keywords[1].count, 2);
    }

    #[test]
    fn short_tokens_and_stopwords_are_dropped() {
        let articles = vec![article("The war and the vote")];
        let keywords = extract_keywords(&articles, 10);
        let tokens: Vec<&str> = keywords.iter().map(|k| k.token.as_str()).collect();
        assert_eq!(tokens, vec!["vote"]);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let articles = vec![article("zebra apple zebra apple mango")];
        let keywords = extract_keywords(&articles, 3);
        assert_eq!(keywords[0].token, "zebra");
        assert_eq!(keywords[1].token, "apple");
        assert_eq!(keywords[2].token, "mango");
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(extract_keywords(&[], 5).is_empty());
    }
}
