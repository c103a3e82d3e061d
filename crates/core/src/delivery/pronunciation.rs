use serde::Serialize;

use crate::lexicon::word_lists::{DIFFICULT_WORDS, REPEATED_SOUND_PATTERNS, SHORT_WORD_ALLOWLIST};
use crate::shared::text::{mean_sentence_length, phrase_present, sentences, tokens};

pub const BASE_CLARITY: i32 = 90;
pub const MIN_CLARITY: i32 = 60;
pub const MAX_CLARITY: i32 = 100;

const DIFFICULT_WORD_PENALTY: i32 = 3;
const REPEATED_PATTERN_PENALTY: i32 = 5;
const SHORT_FRAGMENT_PENALTY: i32 = 2;
const GRAMMAR_PENALTY_CAP: i32 = 15;
const SENTENCE_LENGTH_BONUS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PronunciationFactors {
    pub difficult_words: usize,
    pub repeated_patterns: usize,
    pub short_fragments: usize,
    pub grammar_influence: usize,
}

/// Clarity estimate in [60,100] inferred from transcript structure.
///
/// A proxy: real pronunciation scoring needs audio. The transcript only
/// hints at trouble through hard vocabulary, stutter-like letter runs,
/// chopped-off fragments, and grammar confusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PronunciationReport {
    pub clarity_percent: i32,
    pub difficult_words_found: Vec<String>,
    pub assessment: String,
    /// Human-readable observations joined with "; ".
    pub notes: String,
    pub factors: PronunciationFactors,
}

pub fn analyze(transcript: &str, grammar_error_count: usize) -> PronunciationReport {
    let words = tokens(transcript);
    let lower = transcript.to_lowercase();

    let difficult_found: Vec<String> = DIFFICULT_WORDS
        .iter()
        .filter(|w| phrase_present(&words, w))
        .map(|w| (*w).to_string())
        .collect();

    let repeated_patterns = REPEATED_SOUND_PATTERNS
        .iter()
        .filter(|p| lower.contains(*p))
        .count();

    let short_fragments = words
        .iter()
        .filter(|w| w.chars().count() <= 2 && !SHORT_WORD_ALLOWLIST.contains(&w.as_str()))
        .count();

    let sentence_list = sentences(transcript);
    let avg_len = mean_sentence_length(&sentence_list);

    let mut clarity = BASE_CLARITY
        - difficult_found.len() as i32 * DIFFICULT_WORD_PENALTY
        - repeated_patterns as i32 * REPEATED_PATTERN_PENALTY
        - short_fragments as i32 * SHORT_FRAGMENT_PENALTY
        - (grammar_error_count as i32 * 2).min(GRAMMAR_PENALTY_CAP);
    if avg_len > 10.0 {
        clarity += SENTENCE_LENGTH_BONUS;
    } else if avg_len < 5.0 {
        clarity -= SENTENCE_LENGTH_BONUS;
    }
    let clarity = clarity.clamp(MIN_CLARITY, MAX_CLARITY);

    PronunciationReport {
        clarity_percent: clarity,
        assessment: assess(clarity),
        notes: notes(&difficult_found, repeated_patterns, grammar_error_count),
        factors: PronunciationFactors {
            difficult_words: difficult_found.len(),
            repeated_patterns,
            short_fragments,
            grammar_influence: grammar_error_count,
        },
        difficult_words_found: difficult_found,
    }
}

/// Errors above this count get a pronunciation-confusion note.
const GRAMMAR_NOTE_THRESHOLD: usize = 3;
/// At most this many difficult words are named in the note.
const DIFFICULT_WORDS_IN_NOTE: usize = 3;

fn notes(difficult_found: &[String], repeated_patterns: usize, grammar_errors: usize) -> String {
    let mut notes = Vec::new();
    if !difficult_found.is_empty() {
        let named = difficult_found
            .iter()
            .take(DIFFICULT_WORDS_IN_NOTE)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        notes.push(format!("Difficult words detected: {named}"));
    }
    if repeated_patterns > 0 {
        notes.push("Some repeated sound patterns detected".to_string());
    }
    if grammar_errors > GRAMMAR_NOTE_THRESHOLD {
        notes.push("Grammar errors may indicate pronunciation confusion".to_string());
    }
    if notes.is_empty() {
        notes.push("Clear and well-articulated speech".to_string());
    }
    notes.join("; ")
}

fn assess(clarity: i32) -> String {
    if clarity >= 95 {
        "Excellent pronunciation throughout".to_string()
    } else if clarity >= 85 {
        format!("{clarity}% clear pronunciation")
    } else if clarity >= 75 {
        format!("{clarity}% clear with minor pronunciation issues")
    } else {
        format!("{clarity}% clear with noticeable pronunciation challenges")
    }
}
