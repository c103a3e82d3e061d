//! Language and content analysis: grammar errors, vocabulary diversity,
//! structural coherence, and content value.

pub mod coherence;
pub mod content_value;
pub mod grammar;
pub mod vocabulary;
