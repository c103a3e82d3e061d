use serde::Serialize;

/// Flattened metric snapshot the feedback guards evaluate against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackMetrics {
    pub words_per_minute: f64,
    pub filler_percent: f64,
    pub filler_total: usize,
    pub grammar_score: i32,
    pub confidence_score: f64,
    pub structure_score: usize,
    pub variation_score: usize,
    pub diversity_percent: f64,
}

/// A guard-conditioned feedback message. Guards are plain functions so the
/// catalogs below stay declarative data; adding a rule never touches the
/// generator's control flow.
pub struct FeedbackRule {
    pub message: &'static str,
    pub applies: fn(&FeedbackMetrics) -> bool,
}

pub struct TipRule {
    pub title: &'static str,
    pub technique: &'static str,
    pub description: &'static str,
    pub applies: fn(&FeedbackMetrics) -> bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionableTip {
    pub title: String,
    pub technique: String,
    pub description: String,
}

impl From<&TipRule> for ActionableTip {
    fn from(rule: &TipRule) -> Self {
        Self {
            title: rule.title.to_string(),
            technique: rule.technique.to_string(),
            description: rule.description.to_string(),
        }
    }
}

/// Strength candidates, highest priority first.
pub const STRENGTH_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        message: "Excellent speaking pace",
        applies: |m| (120.0..=160.0).contains(&m.words_per_minute),
    },
    FeedbackRule {
        message: "Minimal use of filler words",
        applies: |m| m.filler_percent <= 3.0,
    },
    FeedbackRule {
        message: "Strong grammar and sentence structure",
        applies: |m| m.grammar_score >= 80,
    },
    FeedbackRule {
        message: "Confident delivery",
        applies: |m| m.confidence_score >= 70.0,
    },
    FeedbackRule {
        message: "Well-organized content",
        applies: |m| m.structure_score >= 60,
    },
];

/// Improvement candidates, highest priority first.
pub const IMPROVEMENT_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        message: "Reduce filler word usage",
        applies: |m| m.filler_percent > 5.0,
    },
    FeedbackRule {
        message: "Increase vocal variety and pitch variation",
        applies: |m| m.variation_score < 50,
    },
    FeedbackRule {
        message: "Improve content organization and transitions",
        applies: |m| m.structure_score < 60,
    },
    FeedbackRule {
        message: "Build more confident delivery",
        applies: |m| m.confidence_score < 70.0,
    },
    FeedbackRule {
        message: "Use more varied vocabulary",
        applies: |m| m.diversity_percent < 50.0,
    },
];

/// Actionable tip candidates, highest priority first.
pub const TIP_RULES: &[TipRule] = &[
    TipRule {
        title: "Reduce filler words",
        technique: "Try the \"1-second pause technique\"",
        description: "Pause silently instead of saying \"um\" or \"uh\". Practice with a timer.",
        applies: |m| m.filler_percent > 3.0,
    },
    TipRule {
        title: "Improve vocal variety",
        technique: "Practice pitch patterns",
        description:
            "Read aloud using high-low pitch patterns. Emphasize key words with pitch changes.",
        applies: |m| m.variation_score < 60,
    },
    TipRule {
        title: "Strengthen structure",
        technique: "Use the PEES format",
        description: "Point, Example, Explanation, Summary for each main idea.",
        applies: |m| m.structure_score < 60,
    },
    TipRule {
        title: "Build confidence",
        technique: "Power posture and preparation",
        description:
            "Stand tall, practice key phrases, and prepare thoroughly to boost confidence.",
        applies: |m| m.confidence_score < 70.0,
    },
    TipRule {
        title: "Increase speaking pace",
        technique: "Metronome practice",
        description: "Practice speaking with a metronome set to 140 BPM to build natural rhythm.",
        applies: |m| m.words_per_minute < 120.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> FeedbackMetrics {
        FeedbackMetrics {
            words_per_minute: 140.0,
            filler_percent: 1.0,
            filler_total: 1,
            grammar_score: 90,
            confidence_score: 80.0,
            structure_score: 80,
            variation_score: 70,
            diversity_percent: 75.0,
        }
    }

    #[test]
    fn test_all_strengths_fire_on_strong_metrics() {
        let m = baseline();
        let fired = STRENGTH_RULES.iter().filter(|r| (r.applies)(&m)).count();
        assert_eq!(fired, STRENGTH_RULES.len());
    }

    #[test]
    fn test_no_improvements_fire_on_strong_metrics() {
        let m = baseline();
        assert!(IMPROVEMENT_RULES.iter().all(|r| !(r.applies)(&m)));
        assert!(TIP_RULES.iter().all(|r| !(r.applies)(&m)));
    }

    #[test]
    fn test_filler_guard_boundaries() {
        let mut m = baseline();
        m.filler_percent = 5.0;
        assert!(!(IMPROVEMENT_RULES[0].applies)(&m));
        m.filler_percent = 5.1;
        assert!((IMPROVEMENT_RULES[0].applies)(&m));
        m.filler_percent = 3.1;
        assert!((TIP_RULES[0].applies)(&m));
    }

    #[test]
    fn test_pace_strength_is_a_closed_range() {
        let mut m = baseline();
        for (wpm, expected) in [(119.9, false), (120.0, true), (160.0, true), (160.1, false)] {
            m.words_per_minute = wpm;
            assert_eq!((STRENGTH_RULES[0].applies)(&m), expected, "wpm {wpm}");
        }
    }
}
