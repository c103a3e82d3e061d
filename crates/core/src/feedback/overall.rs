use serde::Serialize;

use crate::shared::text::round1;

use super::rules::FeedbackMetrics;

/// WPM divisor for the vocal component: 150 WPM maps to a full 100.
const VOCAL_WPM_DIVISOR: f64 = 1.5;
/// Each filler percentage point costs this much of the filler component.
const FILLER_PENALTY_FACTOR: f64 = 2.0;

/// Component weights for the overall score.
///
/// Reference defaults reverse-engineered from the heuristic source; they
/// produce plausible rankings rather than encode any documented rationale,
/// so hosts may tune them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallWeights {
    pub vocal: f64,
    pub grammar: f64,
    pub confidence: f64,
    pub filler: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            vocal: 0.3,
            grammar: 0.2,
            confidence: 0.3,
            filler: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Beginner,
    #[serde(rename = "Beginner+")]
    BeginnerPlus,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            SkillLevel::Advanced
        } else if score >= 70.0 {
            SkillLevel::Intermediate
        } else if score >= 55.0 {
            SkillLevel::BeginnerPlus
        } else {
            SkillLevel::Beginner
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallResult {
    pub score: f64,
    pub skill_level: SkillLevel,
    pub general_impression: String,
}

pub fn aggregate(metrics: &FeedbackMetrics, weights: OverallWeights) -> OverallResult {
    let vocal_proxy = (metrics.words_per_minute / VOCAL_WPM_DIVISOR).min(100.0);
    let filler_component = 100.0 - metrics.filler_percent * FILLER_PENALTY_FACTOR;

    let score = round1(
        (vocal_proxy * weights.vocal
            + metrics.grammar_score as f64 * weights.grammar
            + metrics.confidence_score * weights.confidence
            + filler_component * weights.filler)
            .clamp(0.0, 100.0),
    );

    OverallResult {
        score,
        skill_level: SkillLevel::from_score(score),
        general_impression: general_impression(metrics),
    }
}

fn general_impression(metrics: &FeedbackMetrics) -> String {
    let mut impressions = Vec::with_capacity(3);

    if (120.0..=160.0).contains(&metrics.words_per_minute) {
        impressions.push("good pace");
    } else if metrics.words_per_minute < 120.0 {
        impressions.push("clear but slow delivery");
    } else {
        impressions.push("fast-paced delivery");
    }

    if metrics.filler_total <= 5 {
        impressions.push("minimal filler words");
    } else if metrics.filler_total <= 15 {
        impressions.push("some filler words");
    } else {
        impressions.push("needs to reduce filler words");
    }

    if metrics.confidence_score >= 75.0 {
        impressions.push("confident tone");
    } else {
        impressions.push("could sound more confident");
    }

    format!("Clear delivery with {}.", impressions.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn metrics(wpm: f64, filler_percent: f64, grammar: i32, confidence: f64) -> FeedbackMetrics {
        FeedbackMetrics {
            words_per_minute: wpm,
            filler_percent,
            filler_total: 0,
            grammar_score: grammar,
            confidence_score: confidence,
            structure_score: 50,
            variation_score: 50,
            diversity_percent: 60.0,
        }
    }

    #[test]
    fn test_weighted_aggregate() {
        let m = metrics(150.0, 5.0, 80, 70.0);
        let result = aggregate(&m, OverallWeights::default());
        // 0.3*100 + 0.2*80 + 0.3*70 + 0.2*90 = 85
        assert_relative_eq!(result.score, 85.0);
        assert_eq!(result.skill_level, SkillLevel::Advanced);
    }

    #[test]
    fn test_vocal_proxy_capped_at_100() {
        let slow = aggregate(&metrics(150.0, 0.0, 50, 50.0), OverallWeights::default());
        let fast = aggregate(&metrics(400.0, 0.0, 50, 50.0), OverallWeights::default());
        assert_relative_eq!(slow.score, fast.score);
    }

    #[test]
    fn test_zero_input_floors_at_zero() {
        let result = aggregate(&metrics(0.0, 50.0, 25, 20.0), OverallWeights::default());
        assert!(result.score >= 0.0);
        assert_eq!(result.skill_level, SkillLevel::Beginner);
    }

    #[rstest]
    #[case(90.0, SkillLevel::Advanced)]
    #[case(85.0, SkillLevel::Advanced)]
    #[case(75.0, SkillLevel::Intermediate)]
    #[case(60.0, SkillLevel::BeginnerPlus)]
    #[case(30.0, SkillLevel::Beginner)]
    fn test_skill_bands(#[case] score: f64, #[case] expected: SkillLevel) {
        assert_eq!(SkillLevel::from_score(score), expected);
    }

    #[test]
    fn test_skill_level_serialization() {
        assert_eq!(
            serde_json::to_string(&SkillLevel::BeginnerPlus).unwrap(),
            "\"Beginner+\""
        );
    }

    #[test]
    fn test_general_impression_buckets() {
        let mut m = metrics(140.0, 1.0, 90, 80.0);
        m.filler_total = 2;
        let result = aggregate(&m, OverallWeights::default());
        assert_eq!(
            result.general_impression,
            "Clear delivery with good pace, minimal filler words, confident tone."
        );

        let mut m = metrics(90.0, 10.0, 40, 40.0);
        m.filler_total = 20;
        let result = aggregate(&m, OverallWeights::default());
        assert!(result.general_impression.contains("clear but slow delivery"));
        assert!(result
            .general_impression
            .contains("needs to reduce filler words"));
        assert!(result.general_impression.contains("could sound more confident"));
    }
}
