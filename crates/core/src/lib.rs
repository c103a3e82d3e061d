//! Deterministic scoring engine for spoken-word transcripts.
//!
//! Given a plain-text transcript and the audio duration in seconds, the
//! engine produces a multi-dimensional performance assessment: speaking
//! pace, filler-word usage, grammar-error density, vocabulary richness,
//! structural coherence, a confidence/engagement profile, an aggregate
//! score, and rule-driven feedback.
//!
//! Pause, pronunciation, and pitch figures are *proxies* derived from
//! transcript punctuation and structure. Nothing here inspects a waveform;
//! audio acquisition and speech-to-text live upstream of this crate.
//!
//! Every analysis is a pure function of its input plus static lexicon
//! tables, so concurrent callers can share the engine without locks.

pub mod delivery;
pub mod engagement;
pub mod feedback;
pub mod language;
pub mod lexicon;
pub mod pipeline;
pub mod shared;
