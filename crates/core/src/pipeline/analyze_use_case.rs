use thiserror::Error;

use crate::delivery::{fillers, pace, pauses, pitch, pronunciation};
use crate::engagement::analyzer as engagement_analyzer;
use crate::engagement::sentiment::{NeutralSentimentProvider, Sentiment, SentimentProvider};
use crate::feedback::generator;
use crate::feedback::overall::{self, OverallWeights};
use crate::feedback::rules::FeedbackMetrics;
use crate::language::{coherence, content_value, grammar, vocabulary};
use crate::shared::text::{sentences, word_count};

use super::report::{
    AnalysisInput, AnalysisResult, LanguageContentReport, VocalDeliveryReport,
};

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Negative or non-finite durations are programmer errors rejected at
    /// the boundary; zero is valid and yields guarded defaults.
    #[error("invalid duration {0}: must be finite and non-negative")]
    InvalidDuration(f64),
}

/// Runs every analyzer over one transcript and assembles the result.
///
/// Owns the sentiment seam so the cross-dependency chain stays linear:
/// language analysis runs first, its grammar score feeds engagement as a
/// plain parameter, and the aggregator consumes everything at the end.
/// Stateless between calls; safe to share behind an `Arc` across threads.
pub struct AnalyzeTranscriptUseCase {
    sentiment: Box<dyn SentimentProvider>,
    weights: OverallWeights,
}

impl AnalyzeTranscriptUseCase {
    pub fn new(sentiment: Box<dyn SentimentProvider>) -> Self {
        Self {
            sentiment,
            weights: OverallWeights::default(),
        }
    }

    /// Engine without a sentiment service: polarity and subjectivity stay 0.
    pub fn with_neutral_sentiment() -> Self {
        Self::new(Box::new(NeutralSentimentProvider))
    }

    pub fn with_weights(mut self, weights: OverallWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Either returns a complete result or fails; never a partial report.
    pub fn run(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        if !input.duration_seconds.is_finite() || input.duration_seconds < 0.0 {
            return Err(AnalysisError::InvalidDuration(input.duration_seconds));
        }

        let transcript = input.transcript.as_str();

        // Language analysis first: the grammar report feeds both the
        // pronunciation proxy and the confidence score.
        let grammar = grammar::analyze(transcript);
        let language_content = LanguageContentReport {
            vocabulary: vocabulary::analyze(transcript),
            coherence: coherence::analyze(transcript),
            content_value: content_value::analyze(transcript),
            grammar,
        };

        let vocal_delivery = VocalDeliveryReport {
            speaking_pace: pace::analyze(transcript, input.duration_seconds),
            filler_words: fillers::analyze(transcript),
            pauses: pauses::analyze(transcript),
            pronunciation: pronunciation::analyze(
                transcript,
                language_content.grammar.errors_found,
            ),
            pitch_variation: pitch::analyze(transcript),
        };

        let sentiment = self.sentiment.sentiment(transcript).unwrap_or_else(|e| {
            log::warn!("sentiment provider failed, degrading to neutral: {e}");
            Sentiment::neutral()
        });
        let engagement = engagement_analyzer::analyze(
            transcript,
            language_content.grammar.score,
            sentiment,
        );

        let metrics = FeedbackMetrics {
            words_per_minute: vocal_delivery.speaking_pace.words_per_minute,
            filler_percent: vocal_delivery.filler_words.percentage_of_words,
            filler_total: vocal_delivery.filler_words.total_count,
            grammar_score: language_content.grammar.score,
            confidence_score: engagement.confidence_score,
            structure_score: language_content.coherence.structure_score,
            variation_score: vocal_delivery.pitch_variation.variation_score,
            diversity_percent: language_content.vocabulary.diversity_percent,
        };
        let overall = overall::aggregate(&metrics, self.weights);
        let feedback = generator::generate(&metrics);

        Ok(AnalysisResult {
            word_count: word_count(transcript),
            sentence_count: sentences(transcript).len(),
            input: input.clone(),
            vocal_delivery,
            language_content,
            engagement,
            overall,
            feedback,
        })
    }
}
