use serde::Serialize;

use crate::lexicon::word_lists::{
    EDUCATIONAL_WORDS, EXAMPLE_MARKERS, EXPLANATION_MARKERS, SPECIFICITY_MARKERS, VAGUE_MARKERS,
};
use crate::shared::text::{mean_sentence_length, round1, sentences};

pub const BASE_VALUE: i32 = 30;
pub const MIN_VALUE: i32 = 20;
pub const MAX_VALUE: i32 = 100;

const EXAMPLE_WEIGHT: i32 = 15;
const EXPLANATION_WEIGHT: i32 = 10;
const EDUCATIONAL_WEIGHT: i32 = 8;
const SPECIFICITY_WEIGHT: i32 = 12;
const QUESTION_WEIGHT: i32 = 10;
const VAGUE_PENALTY: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentValueFactors {
    pub examples: usize,
    pub explanations: usize,
    pub educational_words: usize,
    /// Specific-language markers minus vague-language markers.
    pub specificity_delta: i64,
    pub questions: usize,
    pub avg_sentence_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentValueReport {
    pub value_score: i32,
    pub assessment: String,
    pub factors: ContentValueFactors,
}

/// Content-value estimate from concreteness markers.
///
/// Marker matching is substring-based on purpose: "examples", "learning",
/// and "explained" should all count toward their stems.
pub fn analyze(transcript: &str) -> ContentValueReport {
    let lower = transcript.to_lowercase();

    let examples: usize = EXAMPLE_MARKERS
        .iter()
        .map(|m| lower.matches(m).count())
        .sum();
    let explanations: usize = EXPLANATION_MARKERS
        .iter()
        .map(|m| lower.matches(m).count())
        .sum();
    let educational_words = EDUCATIONAL_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let specific = SPECIFICITY_MARKERS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let vague = VAGUE_MARKERS.iter().filter(|w| lower.contains(*w)).count();
    let questions = transcript.matches('?').count();

    let sentence_list = sentences(transcript);
    let avg_sentence_length = mean_sentence_length(&sentence_list);
    let complexity_bonus = if avg_sentence_length > 12.0 {
        15
    } else if avg_sentence_length > 8.0 {
        10
    } else if avg_sentence_length < 5.0 {
        -10
    } else {
        0
    };

    let value_score = (BASE_VALUE
        + examples as i32 * EXAMPLE_WEIGHT
        + explanations as i32 * EXPLANATION_WEIGHT
        + educational_words as i32 * EDUCATIONAL_WEIGHT
        + specific as i32 * SPECIFICITY_WEIGHT
        + questions as i32 * QUESTION_WEIGHT
        - vague as i32 * VAGUE_PENALTY
        + complexity_bonus)
        .clamp(MIN_VALUE, MAX_VALUE);

    ContentValueReport {
        value_score,
        assessment: assess(value_score).to_string(),
        factors: ContentValueFactors {
            examples,
            explanations,
            educational_words,
            specificity_delta: specific as i64 - vague as i64,
            questions,
            avg_sentence_length: round1(avg_sentence_length),
        },
    }
}

fn assess(score: i32) -> &'static str {
    if score >= 80 {
        "Highly valuable content with excellent examples and explanations"
    } else if score >= 65 {
        "Good content value with solid supporting details"
    } else if score >= 50 {
        "Moderate content value, could use more examples"
    } else if score >= 35 {
        "Limited content value, needs more specific details"
    } else {
        "Low content value, very general statements"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_examples_and_explanations_raise_score() {
        let plain = analyze("we met and we talked and we left quickly after");
        let rich = analyze(
            "for example we met because the schedule required it, another instance was later",
        );
        assert!(rich.value_score > plain.value_score);
        assert_eq!(rich.factors.examples, 2);
        assert_eq!(rich.factors.explanations, 1);
    }

    #[test]
    fn test_stemmed_matches_count() {
        let report = analyze("several examples helped students keep learning");
        assert_eq!(report.factors.examples, 1);
        assert_eq!(report.factors.educational_words, 1);
    }

    #[test]
    fn test_vague_language_lowers_score() {
        let vague = analyze("stuff and things and something happened somehow whatever");
        let concrete = analyze("precisely three systems failed during the detailed audit");
        assert!(vague.value_score < concrete.value_score);
        assert!(vague.factors.specificity_delta < 0);
        assert!(concrete.factors.specificity_delta > 0);
    }

    #[test]
    fn test_score_floor() {
        let report = analyze("stuff thing something somehow whatever");
        assert_eq!(report.value_score, MIN_VALUE);
    }

    #[test]
    fn test_score_ceiling() {
        let text = "for example, an example of an instance. for instance? because the reason, \
                    therefore since. learn understand explain teach knowledge concept idea \
                    theory practice specifically exactly precisely clearly detailed particular?";
        let report = analyze(text);
        assert_eq!(report.value_score, MAX_VALUE);
    }

    #[test]
    fn test_empty_transcript() {
        let report = analyze("");
        // base 30 minus the short-sentence penalty
        assert_eq!(report.value_score, BASE_VALUE - 10);
        assert_relative_eq!(report.factors.avg_sentence_length, 0.0);
    }

    #[test]
    fn test_long_sentences_get_complexity_bonus() {
        let short = analyze("We met. We talked. We left.");
        let long = analyze(
            "We met at the agreed location near the northern station entrance and \
             talked through every remaining item on the shared agenda before leaving.",
        );
        assert!(long.value_score > short.value_score);
    }
}
