use serde::Serialize;

use crate::lexicon::word_lists::{CLOSING_CUES, OPENING_CUES, TRANSITION_WORDS};
use crate::shared::text::{phrase_present, prefix_window, suffix_window, tokens};

/// Characters inspected at each end of the transcript for opening and
/// closing cues.
const EDGE_WINDOW_CHARS: usize = 100;

const TRANSITION_WEIGHT: usize = 10;
const INTRO_WEIGHT: usize = 20;
const CONCLUSION_WEIGHT: usize = 20;
const MAX_SCORE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoherenceReport {
    pub structure_score: usize,
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub transition_word_count: usize,
    pub assessment: String,
}

/// Structure estimate from transition cues and opening/closing markers.
pub fn analyze(transcript: &str) -> CoherenceReport {
    let words = tokens(transcript);

    let transition_word_count = TRANSITION_WORDS
        .iter()
        .filter(|t| phrase_present(&words, t))
        .count();

    let head = prefix_window(transcript, EDGE_WINDOW_CHARS);
    let tail = suffix_window(transcript, EDGE_WINDOW_CHARS);
    let has_introduction = OPENING_CUES.iter().any(|cue| head.contains(cue));
    let has_conclusion = CLOSING_CUES.iter().any(|cue| tail.contains(cue));

    let structure_score = (transition_word_count * TRANSITION_WEIGHT
        + usize::from(has_introduction) * INTRO_WEIGHT
        + usize::from(has_conclusion) * CONCLUSION_WEIGHT)
        .min(MAX_SCORE);

    let assessment = if structure_score > 60 {
        "Well-structured presentation"
    } else {
        "Could benefit from better organization"
    };

    CoherenceReport {
        structure_score,
        has_introduction,
        has_conclusion,
        transition_word_count,
        assessment: assessment.to_string(),
    }
}
