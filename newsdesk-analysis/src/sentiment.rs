//! Lexicon-based sentiment polarity
//!
//! A bag-of-words heuristic: polarity is the balance of positive and
//! negative lexicon hits, in [-1.0, 1.0]. Scoring never fails; anything
//! unscorable is (Neutral, 0.0).

use newsdesk_core::{Sentiment, SentimentLabel};

const POSITIVE_WORDS: &[&str] = &[
    "win", "wins", "success", "gain", "gains", "rise", "rises", "surge", "approve", "approves",
    "agree", "agrees", "pass", "passes", "breakthrough", "progress", "strong", "boost",
    "improve", "improves", "record", "optimistic", "confident", "support", "supports",
    "growth", "recovery", "landmark", "victory", "historic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "lose", "loses", "fail", "fails", "drop", "drops", "fall", "falls", "crash", "reject",
    "rejects", "oppose", "opposes", "block", "blocks", "crisis", "collapse", "weak", "decline",
    "declines", "worst", "threat", "threatens", "risk", "pessimistic", "concern", "concerns",
    "fear", "fears", "scandal", "crackdown", "shutdown", "deadlock", "violence",
];

/// Score above which an article is labeled Positive
const POSITIVE_THRESHOLD: f64 = 0.1;
/// Score below which an article is labeled Negative
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Classify text polarity
///
/// Score is `(pos - neg) / (pos + neg)` over lexicon hits; text with no
/// hits (or no words at all) scores 0.0 and is Neutral.
pub fn classify(text: &str) -> Sentiment {
    let score = polarity_score(text);
    let label = if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    Sentiment { label, score }
}

fn polarity_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let pos = words
        .iter()
        .filter(|w| POSITIVE_WORDS.contains(w))
        .count() as f64;
    let neg = words
        .iter()
        .filter(|w| NEGATIVE_WORDS.contains(w))
        .count() as f64;

    let denom = pos + neg;
    if denom == 0.0 {
        return 0.0;
    }

    (pos - neg) / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_headline() {
        let s = classify("Senate approves landmark bill in historic victory");
        assert_eq!(s.label, SentimentLabel::Positive);
        assert!(s.score > 0.1);
    }

    #[test]
    fn negative_headline() {
        let s = classify("Markets crash as shutdown fears deepen amid crisis");
        assert_eq!(s.label, SentimentLabel::Negative);
        assert!(s.score < -0.1);
    }

    #[test]
    fn neutral_headline() {
        let s = classify("Committee meets to discuss the upcoming schedule");
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn empty_text_is_neutral_zero() {
        let s = classify("");
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn mixed_headline_stays_in_bounds() {
        let s = classify("Gains fade as talks fail, but recovery hopes win support");
        assert!(s.score >= -1.0 && s.score <= 1.0);
    }
}
