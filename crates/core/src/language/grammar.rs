use serde::Serialize;

use crate::lexicon::grammar_rules::GRAMMAR_RULES;
use crate::shared::constants::ERROR_DETAIL_LIMIT;
use crate::shared::text::{phrase_occurrences, round1, tokens};

pub const MIN_SCORE: i32 = 25;
pub const MAX_SCORE: i32 = 95;

/// (max error rate %, score) bands, evaluated in order.
const SCORE_BANDS: &[(f64, i32)] = &[
    (0.0, 95),
    (2.0, 85),
    (5.0, 70),
    (10.0, 55),
    (15.0, 40),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarReport {
    pub score: i32,
    pub assessment: String,
    pub errors_found: usize,
    pub error_rate_percent: f64,
    /// Up to five "X should be Y" strings, in catalog order.
    pub error_details: Vec<String>,
}

/// Runs the fixed rule catalog over the transcript.
///
/// Patterns match whole-word token sequences, so "teacher explain" does
/// not fire inside "teacher explained". False negatives on error types
/// outside the catalog are expected.
pub fn analyze(transcript: &str) -> GrammarReport {
    let words = tokens(transcript);

    let mut errors_found = 0;
    let mut error_details = Vec::new();
    for rule in GRAMMAR_RULES {
        let occurrences = phrase_occurrences(&words, rule.pattern);
        if occurrences == 0 {
            continue;
        }
        errors_found += if rule.family.counts_per_occurrence() {
            occurrences
        } else {
            1
        };
        if error_details.len() < ERROR_DETAIL_LIMIT {
            error_details.push(format!(
                "{}: '{}' should be '{}'",
                rule.family.label(),
                rule.pattern,
                rule.correction
            ));
        }
    }

    let error_rate_percent = if words.is_empty() {
        0.0
    } else {
        round1(errors_found as f64 / words.len() as f64 * 100.0)
    };

    let (score, assessment) = score_for_rate(error_rate_percent);

    GrammarReport {
        score,
        assessment: assessment.to_string(),
        errors_found,
        error_rate_percent,
        error_details,
    }
}

fn score_for_rate(rate: f64) -> (i32, &'static str) {
    for (max_rate, score) in SCORE_BANDS {
        if rate <= *max_rate {
            return (*score, assessment_for(*score));
        }
    }
    (MIN_SCORE, assessment_for(MIN_SCORE))
}

fn assessment_for(score: i32) -> &'static str {
    match score {
        95 => "Excellent grammar throughout",
        85 => "Very good grammar with minor issues",
        70 => "Good grammar with some noticeable errors",
        55 => "Fair grammar with several errors that affect clarity",
        40 => "Poor grammar with many errors",
        _ => "Very poor grammar with frequent errors",
    }
}
