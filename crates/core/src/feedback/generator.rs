use serde::Serialize;

use crate::shared::constants::{IMPROVEMENT_LIMIT, STRENGTH_LIMIT, TIP_LIMIT};

use super::rules::{
    ActionableTip, FeedbackMetrics, IMPROVEMENT_RULES, STRENGTH_RULES, TIP_RULES,
};

/// Fallbacks for the two extremes: a speaker who trips every improvement
/// guard still gets one strength, and a flawless one still gets a
/// direction to grow in.
const FALLBACK_STRENGTH: &str = "Completed a full speaking attempt to build on";
const FALLBACK_IMPROVEMENT: &str = "Keep practicing to maintain this level of delivery";
const FALLBACK_TIP: (&str, &str, &str) = (
    "Keep up regular practice",
    "Record and review",
    "Record a short talk each week and listen back for one thing to refine.",
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackBundle {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub actionable_tips: Vec<ActionableTip>,
}

/// Evaluates the rule catalogs in their fixed priority order, truncates to
/// the per-category caps, and guarantees at least one entry per category.
pub fn generate(metrics: &FeedbackMetrics) -> FeedbackBundle {
    let mut strengths: Vec<String> = STRENGTH_RULES
        .iter()
        .filter(|r| (r.applies)(metrics))
        .take(STRENGTH_LIMIT)
        .map(|r| r.message.to_string())
        .collect();
    if strengths.is_empty() {
        strengths.push(FALLBACK_STRENGTH.to_string());
    }

    let mut improvements: Vec<String> = IMPROVEMENT_RULES
        .iter()
        .filter(|r| (r.applies)(metrics))
        .take(IMPROVEMENT_LIMIT)
        .map(|r| r.message.to_string())
        .collect();
    if improvements.is_empty() {
        improvements.push(FALLBACK_IMPROVEMENT.to_string());
    }

    let mut actionable_tips: Vec<ActionableTip> = TIP_RULES
        .iter()
        .filter(|r| (r.applies)(metrics))
        .take(TIP_LIMIT)
        .map(ActionableTip::from)
        .collect();
    if actionable_tips.is_empty() {
        let (title, technique, description) = FALLBACK_TIP;
        actionable_tips.push(ActionableTip {
            title: title.to_string(),
            technique: technique.to_string(),
            description: description.to_string(),
        });
    }

    FeedbackBundle {
        strengths,
        improvements,
        actionable_tips,
    }
}
