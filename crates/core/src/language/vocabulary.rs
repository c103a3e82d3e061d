use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::shared::constants::REPETITIVE_WORD_LIMIT;
use crate::shared::text::{round1, tokens};

/// Diversity bands in percent of unique words.
pub const RICH_PERCENT: f64 = 70.0;
pub const GOOD_PERCENT: f64 = 50.0;

/// Words longer than this are eligible for the repetition check.
const REPETITION_MIN_LEN: usize = 4;
/// Occurrences above this flag a word as repetitive.
const REPETITION_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyReport {
    pub diversity_percent: f64,
    pub quality: String,
    /// Most-repeated words, highest count first, ties lexicographic.
    pub repetitive_words: Vec<String>,
    pub recommendation: String,
}

pub fn analyze(transcript: &str) -> VocabularyReport {
    let words = tokens(transcript);
    let unique: BTreeSet<&String> = words.iter().collect();

    let diversity_percent = if words.is_empty() {
        0.0
    } else {
        round1(unique.len() as f64 / words.len() as f64 * 100.0)
    };

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in &words {
        if word.chars().count() >= REPETITION_MIN_LEN {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
    }
    let mut repetitive: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > REPETITION_THRESHOLD)
        .collect();
    repetitive.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let repetitive_words: Vec<String> = repetitive
        .into_iter()
        .take(REPETITIVE_WORD_LIMIT)
        .map(|(word, _)| word.to_string())
        .collect();

    let quality = if diversity_percent > RICH_PERCENT {
        "Rich and varied vocabulary"
    } else if diversity_percent > GOOD_PERCENT {
        "Good vocabulary range"
    } else {
        "Limited vocabulary - could be more varied"
    };

    let recommendation = if repetitive_words.is_empty() {
        "Good vocabulary variety"
    } else {
        "Use more synonyms and varied expressions"
    };

    VocabularyReport {
        diversity_percent,
        quality: quality.to_string(),
        repetitive_words,
        recommendation: recommendation.to_string(),
    }
}
