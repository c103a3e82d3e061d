use serde::Serialize;

use crate::shared::text::{round2, word_count};

/// Below this WPM the delivery reads as slow.
pub const SLOW_WPM: f64 = 120.0;
/// Above this WPM the delivery reads as rushed.
pub const FAST_WPM: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakingPaceReport {
    pub words_per_minute: f64,
    pub assessment: String,
    pub recommendation: String,
}

/// Words per minute with banded assessment. A zero duration yields 0 WPM
/// rather than an error; negative durations are rejected upstream.
pub fn analyze(transcript: &str, duration_seconds: f64) -> SpeakingPaceReport {
    let wpm = if duration_seconds > 0.0 {
        round2(word_count(transcript) as f64 / (duration_seconds / 60.0))
    } else {
        0.0
    };

    let (assessment, recommendation) = if wpm < SLOW_WPM {
        (
            "Pace is slow but clear and easy to follow.",
            "Consider increasing pace slightly for better engagement.",
        )
    } else if wpm > FAST_WPM {
        (
            "Pace is quite fast, may be hard to follow.",
            "Slow down to ensure clarity and comprehension.",
        )
    } else {
        (
            "Pace is well-balanced and appropriate.",
            "Maintain this good speaking pace.",
        )
    };

    SpeakingPaceReport {
        words_per_minute: wpm,
        assessment: assessment.to_string(),
        recommendation: recommendation.to_string(),
    }
}
