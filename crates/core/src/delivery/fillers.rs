use std::collections::BTreeMap;

use serde::Serialize;

use crate::lexicon::word_lists::FILLER_WORDS;
use crate::shared::text::{phrase_occurrences, round1, tokens};

/// Filler percentage bands, in percent of total words.
pub const EXCESSIVE_PERCENT: f64 = 8.0;
pub const HIGH_PERCENT: f64 = 5.0;
pub const MODERATE_PERCENT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillerReport {
    pub total_count: usize,
    /// Per-term counts, only terms that occurred. BTreeMap keeps the
    /// serialized order stable across runs.
    pub breakdown: BTreeMap<String, usize>,
    pub percentage_of_words: f64,
    pub assessment: String,
}

/// Case-insensitive whole-word filler counting, including the two-word
/// term "you know".
pub fn analyze(transcript: &str) -> FillerReport {
    let words = tokens(transcript);

    let mut breakdown = BTreeMap::new();
    let mut total_count = 0;
    for filler in FILLER_WORDS {
        let count = phrase_occurrences(&words, filler);
        if count > 0 {
            breakdown.insert((*filler).to_string(), count);
            total_count += count;
        }
    }

    let percentage_of_words = if words.is_empty() {
        0.0
    } else {
        round1(total_count as f64 / words.len() as f64 * 100.0)
    };

    FillerReport {
        total_count,
        breakdown,
        percentage_of_words,
        assessment: assess(percentage_of_words).to_string(),
    }
}

fn assess(percentage: f64) -> &'static str {
    if percentage > EXCESSIVE_PERCENT {
        "Excessive filler word usage - significantly impacts clarity"
    } else if percentage > HIGH_PERCENT {
        "High filler word usage - noticeable distraction"
    } else if percentage > MODERATE_PERCENT {
        "Moderate filler word usage - room for improvement"
    } else {
        "Minimal filler word usage - excellent control"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_counts_single_word_fillers() {
        let report = analyze("Um, I was like thinking, um, about it");
        assert_eq!(report.breakdown.get("um"), Some(&2));
        assert_eq!(report.breakdown.get("like"), Some(&1));
        assert_eq!(report.total_count, 3);
    }

    #[test]
    fn test_counts_two_word_filler() {
        let report = analyze("you know it was you know fine");
        assert_eq!(report.breakdown.get("you know"), Some(&2));
    }

    #[test]
    fn test_whole_word_matching_only() {
        // "liked" and "sofa" must not count as "like"/"so".
        let report = analyze("she liked the sofa");
        assert_eq!(report.total_count, 0);
        assert!(report.breakdown.is_empty());
    }

    #[test]
    fn test_empty_transcript_is_zero_percent() {
        let report = analyze("");
        assert_eq!(report.total_count, 0);
        assert_relative_eq!(report.percentage_of_words, 0.0);
        assert!(report.assessment.contains("Minimal"));
    }

    #[test]
    fn test_ten_fillers_in_fifty_words_is_twenty_percent() {
        let mut text = String::new();
        for _ in 0..10 {
            text.push_str("um ");
        }
        for i in 0..40 {
            text.push_str(&format!("word{i} "));
        }
        let report = analyze(&text);
        assert_eq!(report.total_count, 10);
        assert_relative_eq!(report.percentage_of_words, 20.0);
        assert!(report.assessment.contains("Excessive"));
    }

    #[rstest]
    #[case(0, "Minimal")]
    #[case(2, "Minimal")]
    #[case(3, "Moderate")]
    #[case(6, "High")]
    #[case(9, "Excessive")]
    fn test_assessment_bands(#[case] fillers: usize, #[case] expected: &str) {
        // 100 words total, `fillers` of them are "um".
        let mut text = String::new();
        for _ in 0..fillers {
            text.push_str("um ");
        }
        for i in 0..(100 - fillers) {
            text.push_str(&format!("word{i} "));
        }
        let report = analyze(&text);
        assert!(
            report.assessment.contains(expected),
            "{}% -> {}",
            report.percentage_of_words,
            report.assessment
        );
    }
}
