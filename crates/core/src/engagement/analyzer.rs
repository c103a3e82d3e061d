use serde::Serialize;

use super::confidence::{self, ConfidenceFactors};
use super::intensity::{engagement_score, EngagementLevel};
use super::sentiment::Sentiment;
use crate::shared::text::{round1, round2};

pub const ENTHUSIASM_BASE: f64 = 40.0;
pub const MIN_ENTHUSIASM: f64 = 20.0;
pub const MAX_ENTHUSIASM: f64 = 100.0;

const POLARITY_WEIGHT: f64 = 30.0;
const SUBJECTIVITY_WEIGHT: f64 = 20.0;
const ENGAGEMENT_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementReport {
    pub confidence_score: f64,
    pub enthusiasm_score: f64,
    pub engagement_level: EngagementLevel,
    pub engagement_score: f64,
    pub sentiment_polarity: f64,
    pub tone: String,
    pub confidence_factors: ConfidenceFactors,
}

/// Full engagement/confidence profile.
///
/// `grammar_score` comes from the language analyzer; `sentiment` from the
/// external primitive (already degraded to neutral by the orchestrator if
/// the provider failed).
pub fn analyze(transcript: &str, grammar_score: i32, sentiment: Sentiment) -> EngagementReport {
    let (confidence_score, confidence_factors) = confidence::score(transcript, grammar_score);
    let engagement = engagement_score(transcript);
    let enthusiasm = enthusiasm_score(sentiment, engagement);

    EngagementReport {
        confidence_score,
        enthusiasm_score: enthusiasm,
        engagement_level: EngagementLevel::from_score(engagement),
        engagement_score: round1(engagement),
        sentiment_polarity: round2(sentiment.polarity),
        tone: tone_label(sentiment.polarity, enthusiasm).to_string(),
        confidence_factors,
    }
}

pub fn enthusiasm_score(sentiment: Sentiment, engagement_score: f64) -> f64 {
    let raw = ENTHUSIASM_BASE
        + sentiment.polarity * POLARITY_WEIGHT
        + sentiment.subjectivity * SUBJECTIVITY_WEIGHT
        + engagement_score * ENGAGEMENT_WEIGHT;
    round1(raw.clamp(MIN_ENTHUSIASM, MAX_ENTHUSIASM))
}

pub fn tone_label(polarity: f64, enthusiasm: f64) -> &'static str {
    if polarity > 0.3 && enthusiasm > 70.0 {
        "Enthusiastic and positive"
    } else if polarity > 0.1 {
        "Positive and engaging"
    } else if polarity > -0.1 {
        "Neutral tone - could be more expressive"
    } else {
        "Somewhat negative tone - needs more positivity"
    }
}
