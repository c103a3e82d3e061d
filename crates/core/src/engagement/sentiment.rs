use std::error::Error;

/// Polarity/subjectivity pair from an external sentiment primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// [-1, 1]; negative to positive.
    pub polarity: f64,
    /// [0, 1]; objective to subjective.
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Seam for the external sentiment dependency.
///
/// The engine never computes sentiment itself. When a provider is missing
/// or fails, the orchestrator degrades to [`Sentiment::neutral`] instead
/// of failing the pipeline.
pub trait SentimentProvider: Send + Sync {
    fn sentiment(&self, text: &str) -> Result<Sentiment, Box<dyn Error>>;
}

/// Provider that always reports neutral sentiment.
///
/// Used when no real sentiment service is wired in, and by tests.
pub struct NeutralSentimentProvider;

impl SentimentProvider for NeutralSentimentProvider {
    fn sentiment(&self, _text: &str) -> Result<Sentiment, Box<dyn Error>> {
        Ok(Sentiment::neutral())
    }
}
