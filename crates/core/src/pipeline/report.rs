use serde::Serialize;

use crate::delivery::fillers::FillerReport;
use crate::delivery::pace::SpeakingPaceReport;
use crate::delivery::pauses::PauseReport;
use crate::delivery::pitch::PitchVariationReport;
use crate::delivery::pronunciation::PronunciationReport;
use crate::engagement::analyzer::EngagementReport;
use crate::feedback::generator::FeedbackBundle;
use crate::feedback::overall::OverallResult;
use crate::language::coherence::CoherenceReport;
use crate::language::content_value::ContentValueReport;
use crate::language::grammar::GrammarReport;
use crate::language::vocabulary::VocabularyReport;

/// One analysis request: a transcript plus the audio duration.
///
/// The transcript may be empty (speech-to-text can fail upstream) and the
/// duration may be zero; both produce low-but-valid results. A missing
/// duration must be defaulted by the caller before reaching the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisInput {
    pub transcript: String,
    pub duration_seconds: f64,
}

impl AnalysisInput {
    pub fn new(transcript: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            transcript: transcript.into(),
            duration_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocalDeliveryReport {
    pub speaking_pace: SpeakingPaceReport,
    pub filler_words: FillerReport,
    pub pauses: PauseReport,
    pub pronunciation: PronunciationReport,
    pub pitch_variation: PitchVariationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageContentReport {
    pub grammar: GrammarReport,
    pub vocabulary: VocabularyReport,
    pub coherence: CoherenceReport,
    pub content_value: ContentValueReport,
}

/// The complete analysis. Immutable once produced; field names and nesting
/// are the wire contract consumed downstream, so renames are breaking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub input: AnalysisInput,
    pub word_count: usize,
    pub sentence_count: usize,
    pub vocal_delivery: VocalDeliveryReport,
    pub language_content: LanguageContentReport,
    pub engagement: EngagementReport,
    pub overall: OverallResult,
    pub feedback: FeedbackBundle,
}
