use serde::Serialize;

use crate::lexicon::word_lists::{CONFIDENCE_CUES, UNCERTAINTY_CUES, WEAK_LANGUAGE};
use crate::shared::text::{phrase_present, round1, sentences, tokens, word_count};

pub const BASE_CONFIDENCE: f64 = 50.0;
pub const MIN_CONFIDENCE: f64 = 20.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

const CONFIDENCE_CUE_BOOST: f64 = 8.0;
const UNCERTAINTY_CUE_PENALTY: f64 = 12.0;
const WEAK_LANGUAGE_PENALTY: f64 = 3.0;
const INCOMPLETE_SENTENCE_PENALTY: f64 = 20.0;
/// A sentence with fewer words than this counts as incomplete.
const INCOMPLETE_SENTENCE_WORDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceFactors {
    pub confidence_words: usize,
    pub uncertainty_words: usize,
    pub weak_language_count: usize,
    pub grammar_influence: f64,
}

/// Lexical-cue estimate of how assertive the speaker sounds, in [20,100].
///
/// Cues count by presence of each distinct term, so repeating one hedge
/// does not compound the penalty; the filler analyzer already tracks raw
/// occurrence volume.
pub fn score(transcript: &str, grammar_score: i32) -> (f64, ConfidenceFactors) {
    let words = tokens(transcript);

    let present = |cues: &[&str]| -> usize {
        cues.iter()
            .filter(|cue| phrase_present(&words, cue))
            .count()
    };
    let confidence_words = present(CONFIDENCE_CUES);
    let uncertainty_words = present(UNCERTAINTY_CUES);
    let weak_language_count = present(WEAK_LANGUAGE);

    let sentence_list = sentences(transcript);
    let incomplete = sentence_list
        .iter()
        .filter(|s| word_count(s) < INCOMPLETE_SENTENCE_WORDS)
        .count();
    let incomplete_penalty = if sentence_list.is_empty() {
        0.0
    } else {
        INCOMPLETE_SENTENCE_PENALTY * incomplete as f64 / sentence_list.len() as f64
    };

    let grammar_influence = round1((grammar_score as f64 - 50.0) / 10.0);

    let raw = BASE_CONFIDENCE + confidence_words as f64 * CONFIDENCE_CUE_BOOST
        - uncertainty_words as f64 * UNCERTAINTY_CUE_PENALTY
        - weak_language_count as f64 * WEAK_LANGUAGE_PENALTY
        - incomplete_penalty
        + grammar_influence;

    (
        round1(raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)),
        ConfidenceFactors {
            confidence_words,
            uncertainty_words,
            weak_language_count,
            grammar_influence,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_text_with_average_grammar() {
        let (score, factors) = score("The quarterly report covers the region results.", 50);
        assert_relative_eq!(score, 50.0);
        assert_eq!(factors.confidence_words, 0);
        assert_eq!(factors.uncertainty_words, 0);
    }

    #[test]
    fn test_confidence_cues_raise_score() {
        let (with_cues, _) =
            score("I am certain this works. I definitely believe the plan holds.", 50);
        let (without, _) = score("This works. The plan holds together for now today.", 50);
        assert!(with_cues > without);
    }

    #[test]
    fn test_uncertainty_cues_lower_score() {
        let (hedged, factors) = score("Maybe it works. Perhaps we try. I think it might be fine.", 50);
        let (plain, _) = score("It works. We try. It will be fine for everyone.", 50);
        assert!(hedged < plain);
        assert!(factors.uncertainty_words >= 4);
    }

    #[test]
    fn test_weak_language_penalized_once_per_term() {
        let (one, _) = score("um the plan works and holds up well overall", 50);
        let (many, _) = score("um um um the plan works and holds up well overall um", 50);
        // Presence-based: repeating the same hedge does not compound.
        assert_relative_eq!(one, many);
    }

    #[test]
    fn test_incomplete_sentences_penalized() {
        let (choppy, _) = score("Yes. No. Maybe so. It was fine.", 85);
        let (flowing, _) = score("The presentation went well from start to finish today.", 85);
        assert!(choppy < flowing);
    }

    #[test]
    fn test_grammar_influence_term() {
        let (high, _) = score("The plan works and holds up well overall today.", 95);
        let (low, _) = score("The plan works and holds up well overall today.", 25);
        assert_relative_eq!(high - low, 7.0);
    }

    #[test]
    fn test_clamped_to_floor() {
        let (score, _) = score(
            "maybe perhaps might possibly unsure, i think i guess, probably kind of sort of. um. uh.",
            25,
        );
        assert_relative_eq!(score, MIN_CONFIDENCE);
    }

    #[test]
    fn test_empty_transcript() {
        let (score, _) = score("", 95);
        assert_relative_eq!(score, 54.5);
    }
}
