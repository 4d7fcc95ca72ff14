//! Extractive summarization of a result set
//!
//! Scores candidate sentences against a corpus-wide term-frequency map
//! and greedily picks the best non-overlapping ones. The sub-linear
//! length normalization (`tokens^0.2`) favors informative sentences over
//! merely long ones while still letting longer sentences net a bump over
//! naive averaging.

use std::collections::HashSet;

use indexmap::IndexMap;

use newsdesk_core::{Article, SummaryResult};

use crate::text;

/// Candidates shorter than this many characters are never selected
const MIN_SENTENCE_CHARS: usize = 20;
/// How many leading summary sentences each article contributes
const SENTENCES_PER_ARTICLE: usize = 3;
/// Keyword/weight pairs returned alongside the summary
const TOP_KEYWORD_COUNT: usize = 8;
/// Exponent of the length normalization term
const LENGTH_EXPONENT: f64 = 0.2;

/// Build a short multi-sentence synopsis of a result set
pub fn summarize(articles: &[Article], max_sentences: usize) -> SummaryResult {
    let pool = candidate_pool(articles);
    let frequencies = term_frequencies(&pool);

    let mut candidates = scored_candidates(&pool, &frequencies);
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let mut chosen: Vec<String> = Vec::new();
    let mut chosen_lower: Vec<String> = Vec::new();
    for candidate in candidates {
        if chosen.len() >= max_sentences {
            break;
        }
        let lower = candidate.sentence.to_lowercase();
        // Skip anything that is a substring (either direction) of an
        // already-chosen sentence
        let overlaps = chosen_lower
            .iter()
            .any(|picked| picked.contains(&lower) || lower.contains(picked));
        if overlaps {
            continue;
        }
        chosen.push(candidate.sentence);
        chosen_lower.push(lower);
    }

    // Stopword-only or otherwise empty corpora fall back to titles
    if chosen.is_empty() {
        chosen = articles
            .iter()
            .filter_map(|a| {
                let title = a.title_text().trim();
                (!title.is_empty()).then(|| title.to_string())
            })
            .take(max_sentences)
            .collect();
    }

    SummaryResult {
        summary_text: chosen.join(" "),
        top_keywords: top_keywords(&frequencies),
    }
}

/// Split text into sentences on `.`/`!`/`?` followed by whitespace
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_break = chars.peek().map(|n| n.is_whitespace()).unwrap_or(true);
            if at_break {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Each article's title plus up to the first 3 sentences of its summary
fn candidate_pool(articles: &[Article]) -> Vec<String> {
    let mut pool = Vec::new();
    for article in articles {
        let title = article.title_text().trim();
        if !title.is_empty() {
            pool.push(title.to_string());
        }
        pool.extend(
            split_sentences(article.summary_text())
                .into_iter()
                .take(SENTENCES_PER_ARTICLE),
        );
    }
    pool
}

/// Max-normalized term-frequency map over the whole pool, stopwords
/// excluded, no minimum token length
fn term_frequencies(pool: &[String]) -> IndexMap<String, f64> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for sentence in pool {
        for token in text::alpha_tokens(sentence, 1) {
            if text::is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let max = counts.values().copied().max().unwrap_or(0) as f64;
    if max == 0.0 {
        return IndexMap::new();
    }
    counts
        .into_iter()
        .map(|(token, count)| (token, count as f64 / max))
        .collect()
}

struct Candidate {
    sentence: String,
    score: f64,
}

/// Distinct candidates of sufficient length with their scores
fn scored_candidates(pool: &[String], frequencies: &IndexMap<String, f64>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for sentence in pool {
        if sentence.chars().count() < MIN_SENTENCE_CHARS {
            continue;
        }
        if !seen.insert(sentence.to_lowercase()) {
            continue;
        }
        let tokens = text::alpha_tokens(sentence, 1);
        if tokens.is_empty() {
            continue;
        }
        let weight_sum: f64 = tokens
            .iter()
            .filter_map(|t| frequencies.get(t))
            .sum();
        let score = weight_sum / (tokens.len() as f64).powf(LENGTH_EXPONENT);
        if score > 0.0 {
            candidates.push(Candidate {
                sentence: sentence.clone(),
                score,
            });
        }
    }

    candidates
}

/// Top keyword/weight pairs, descending by weight with first-encountered
/// tie order
fn top_keywords(frequencies: &IndexMap<String, f64>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = frequencies
        .iter()
        .map(|(token, weight)| (token.clone(), *weight))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(TOP_KEYWORD_COUNT);
    ranked
}
