use serde::Serialize;

use crate::lexicon::word_lists::{ENERGY_ADVERBS, HIGH_INTENSITY_WORDS, MEDIUM_INTENSITY_WORDS};
use crate::shared::text::{mean_sentence_length, phrase_present, sentences, tokens};

const HIGH_INTENSITY_WEIGHT: f64 = 15.0;
const MEDIUM_INTENSITY_WEIGHT: f64 = 8.0;
const ENERGY_WEIGHT: f64 = 5.0;
const LONG_SENTENCE_BONUS: f64 = 10.0;
const SHORT_SENTENCE_PENALTY: f64 = 5.0;
const QUESTION_WEIGHT: f64 = 8.0;
const EXCLAMATION_WEIGHT: f64 = 6.0;

/// Bucketed engagement label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngagementLevel {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 40.0 {
            EngagementLevel::High
        } else if score >= 20.0 {
            EngagementLevel::Medium
        } else if score >= 10.0 {
            EngagementLevel::LowMedium
        } else {
            EngagementLevel::Low
        }
    }
}

/// Weighted intensity-word score. Unbounded above; the level buckets and
/// the enthusiasm formula absorb the scale.
pub fn engagement_score(transcript: &str) -> f64 {
    let words = tokens(transcript);
    let present = |cues: &[&str]| -> usize {
        cues.iter().filter(|cue| phrase_present(&words, cue)).count()
    };

    let mut score = present(HIGH_INTENSITY_WORDS) as f64 * HIGH_INTENSITY_WEIGHT
        + present(MEDIUM_INTENSITY_WORDS) as f64 * MEDIUM_INTENSITY_WEIGHT
        + present(ENERGY_ADVERBS) as f64 * ENERGY_WEIGHT;

    let sentence_list = sentences(transcript);
    let avg_len = mean_sentence_length(&sentence_list);
    if avg_len > 12.0 {
        score += LONG_SENTENCE_BONUS;
    } else if avg_len < 6.0 {
        score -= SHORT_SENTENCE_PENALTY;
    }

    score += transcript.matches('?').count() as f64 * QUESTION_WEIGHT;
    score += transcript.matches('!').count() as f64 * EXCLAMATION_WEIGHT;
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_intensity_words_weighted() {
        // high: amazing, fantastic (+30); medium: useful (+8); energy: really (+5)
        let text = "The amazing demo was really useful and the fantastic team delivered it";
        // 12 words, one sentence: no length bonus (needs > 12)
        assert_relative_eq!(engagement_score(text), 43.0);
    }

    #[test]
    fn test_questions_and_exclamations_add_energy() {
        let flat = "We shipped the release and the pipeline stayed green";
        let punchy = "We shipped the release! Did the pipeline stay green?";
        assert!(engagement_score(punchy) > engagement_score(flat));
    }

    #[test]
    fn test_short_sentences_penalized() {
        // avg length < 6 words
        assert_relative_eq!(engagement_score("We met. We spoke. We left."), -5.0);
    }

    #[test]
    fn test_empty_transcript() {
        assert_relative_eq!(engagement_score(""), -5.0);
    }

    #[rstest]
    #[case(45.0, EngagementLevel::High)]
    #[case(40.0, EngagementLevel::High)]
    #[case(25.0, EngagementLevel::Medium)]
    #[case(12.0, EngagementLevel::LowMedium)]
    #[case(3.0, EngagementLevel::Low)]
    #[case(-5.0, EngagementLevel::Low)]
    fn test_level_buckets(#[case] score: f64, #[case] expected: EngagementLevel) {
        assert_eq!(EngagementLevel::from_score(score), expected);
    }

    #[test]
    fn test_level_serializes_with_hyphen() {
        let json = serde_json::to_string(&EngagementLevel::LowMedium).unwrap();
        assert_eq!(json, "\"Low-Medium\"");
    }
}
