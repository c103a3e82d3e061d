use serde::Serialize;

use crate::shared::text::sentences;

/// Pause estimate derived from sentence and comma counts.
///
/// This is a punctuation proxy, not silence detection: callers must not
/// present these figures as acoustic measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PauseReport {
    pub meaningful_pauses: usize,
    pub awkward_pauses: usize,
    pub assessment: String,
}

pub fn analyze(transcript: &str) -> PauseReport {
    let meaningful_pauses = sentences(transcript).len() + transcript.matches(',').count();
    let awkward_pauses = meaningful_pauses / 3;

    let assessment = if meaningful_pauses > awkward_pauses {
        "Good use of pauses for emphasis"
    } else {
        "Some awkward pausing"
    };

    PauseReport {
        meaningful_pauses,
        awkward_pauses,
        assessment: assessment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sentences_and_commas() {
        let report = analyze("First point, with detail. Second point, more detail. Third.");
        // 3 sentences + 2 commas
        assert_eq!(report.meaningful_pauses, 5);
        assert_eq!(report.awkward_pauses, 1);
    }

    #[test]
    fn test_empty_transcript() {
        let report = analyze("");
        assert_eq!(report.meaningful_pauses, 0);
        assert_eq!(report.awkward_pauses, 0);
        assert!(report.assessment.contains("awkward"));
    }

    #[test]
    fn test_awkward_is_third_of_meaningful() {
        let report = analyze("a, b, c, d, e, f, g, h, i, j.");
        // 1 sentence + 9 commas = 10 meaningful, 3 awkward
        assert_eq!(report.meaningful_pauses, 10);
        assert_eq!(report.awkward_pauses, 3);
    }
}
