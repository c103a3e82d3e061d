use serde::Serialize;

use crate::shared::text::sentences;

const QUESTION_WEIGHT: usize = 10;
const EXCLAMATION_WEIGHT: usize = 15;
const SENTENCE_WEIGHT: usize = 2;
const MAX_SCORE: usize = 100;

/// Intonation estimate inferred from question marks, exclamation marks,
/// and sentence count. A proxy for pitch variety, not a pitch track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchVariationReport {
    pub variation_score: usize,
    pub assessment: String,
    pub recommendation: String,
}

pub fn analyze(transcript: &str) -> PitchVariationReport {
    let questions = transcript.matches('?').count();
    let exclamations = transcript.matches('!').count();
    let sentence_count = sentences(transcript).len();

    let variation_score = (questions * QUESTION_WEIGHT
        + exclamations * EXCLAMATION_WEIGHT
        + sentence_count * SENTENCE_WEIGHT)
        .min(MAX_SCORE);

    let (assessment, recommendation) = if variation_score < 30 {
        (
            "Mostly flat/monotone delivery",
            "Add more pitch variation for engagement",
        )
    } else if variation_score < 60 {
        (
            "Some pitch variation present",
            "Increase vocal variety at key points",
        )
    } else {
        (
            "Good pitch variation and intonation",
            "Maintain this engaging vocal variety",
        )
    };

    PitchVariationReport {
        variation_score,
        assessment: assessment.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_score_formula() {
        // 2 questions, 1 exclamation, 4 sentences = 20 + 15 + 8 = 43
        let report = analyze("Ready? Sure? Go! And then we finished.");
        assert_eq!(report.variation_score, 43);
    }

    #[test]
    fn test_score_capped_at_100() {
        let text = "Wow! ".repeat(20);
        let report = analyze(&text);
        assert_eq!(report.variation_score, 100);
    }

    #[rstest]
    #[case("Plain statement here.", "flat")]
    #[case("One. Two. Three? Four! Five.", "Some pitch variation")]
    #[case("Go! Go! Go! Really? Yes! Now.", "Good pitch variation")]
    fn test_bands(#[case] text: &str, #[case] expected: &str) {
        let report = analyze(text);
        assert!(
            report.assessment.contains(expected),
            "{} -> {}",
            report.variation_score,
            report.assessment
        );
    }

    #[test]
    fn test_empty_transcript_is_flat() {
        let report = analyze("");
        assert_eq!(report.variation_score, 0);
        assert!(report.assessment.contains("flat"));
    }
}
