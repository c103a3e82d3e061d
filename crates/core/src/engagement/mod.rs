//! Confidence, engagement, enthusiasm, and tone analysis.
//!
//! Consumes the external sentiment primitive through the
//! [`sentiment::SentimentProvider`] seam and the grammar score computed by
//! the language analyzer (passed in as a plain parameter; components never
//! call each other).

pub mod analyzer;
pub mod confidence;
pub mod intensity;
pub mod sentiment;
