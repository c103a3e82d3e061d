//! Transcript tokenization shared by every analyzer.
//!
//! All matching is done over lowercase word tokens rather than raw
//! substrings, so a pattern like "teacher explain" does not fire inside
//! "teacher explained". Tokens are whitespace-separated runs with
//! punctuation trimmed from the edges; interior apostrophes and hyphens
//! survive ("don't", "well-known").

/// Lowercase word tokens of a transcript, in order.
pub fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

pub fn word_count(text: &str) -> usize {
    tokens(text).len()
}

/// Sentence fragments split on terminal punctuation, trimmed, empties dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Mean number of word tokens per sentence, or 0 for no sentences.
pub fn mean_sentence_length(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| word_count(s)).sum();
    total as f64 / sentences.len() as f64
}

/// Occurrences of a word or multi-word phrase with whole-word semantics.
pub fn phrase_occurrences(tokens: &[String], phrase: &str) -> usize {
    let needle: Vec<String> = phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if needle.is_empty() || needle.len() > tokens.len() {
        return 0;
    }
    tokens
        .windows(needle.len())
        .filter(|window| window.iter().zip(&needle).all(|(a, b)| a == b))
        .count()
}

pub fn phrase_present(tokens: &[String], phrase: &str) -> bool {
    phrase_occurrences(tokens, phrase) > 0
}

/// First `n` characters, lowercased. Char-safe for any Unicode input.
pub fn prefix_window(text: &str, n: usize) -> String {
    text.chars().take(n).collect::<String>().to_lowercase()
}

/// Last `n` characters, lowercased. Char-safe for any Unicode input.
pub fn suffix_window(text: &str, n: usize) -> String {
    let count = text.chars().count();
    text.chars()
        .skip(count.saturating_sub(n))
        .collect::<String>()
        .to_lowercase()
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
