//! Shared tokenization and stopwords

/// Stopwords excluded from keyword extraction and term-frequency maps
pub const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "amid", "among", "an", "and", "any", "are",
    "as", "at", "back", "be", "been", "before", "being", "between", "but", "by", "calls", "can",
    "could", "day", "did", "do", "does", "down", "during", "each", "few", "first", "for",
    "from", "get", "had", "has", "have", "he", "her", "here", "him", "his", "how", "if", "in",
    "into", "is", "it", "its", "just", "last", "like", "make", "many", "may", "might", "more",
    "most", "much", "must", "new", "news", "no", "not", "now", "of", "off", "on", "one",
    "only", "or", "other", "our", "out", "over", "own", "said", "same", "say", "says", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "time", "to", "too", "under", "up", "us",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "why",
    "will", "with", "would", "year", "years", "you", "your",
];

/// True when the lower-cased token is a stopword
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lower-cased alphabetic runs of at least `min_len` characters
///
/// Any non-alphabetic character terminates a run, so "U.S.-China" yields
/// `["u", "s", "china"]` before length filtering.
pub fn alpha_tokens(text: &str, min_len: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            if current.chars().count() >= min_len {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() >= min_len {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercased_alphabetic_runs() {
        assert_eq!(
            alpha_tokens("Senate Passes Budget-Bill 2024!", 1),
            vec!["senate", "passes", "budget", "bill"]
        );
    }

    #[test]
    fn min_length_filters_short_runs() {
        assert_eq!(
            alpha_tokens("U.S. economy in flux", 4),
            vec!["economy", "flux"]
        );
    }

    #[test]
    fn stopwords_are_recognized() {
        assert!(is_stopword("the"));
        assert!(is_stopword("with"));
        assert!(!is_stopword("senate"));
    }
}
