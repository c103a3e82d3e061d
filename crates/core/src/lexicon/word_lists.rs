//! Word and phrase lists consumed by the analyzers.
//!
//! Multi-word entries ("you know", "i think") are matched as whole-word
//! token sequences, never as raw substrings.

/// Conversational hedge tokens counted against pacing and confidence.
pub const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "so",
    "actually",
    "basically",
    "literally",
    "well",
    "right",
    "okay",
    "yeah",
];

/// Words whose presence suggests harder articulation.
pub const DIFFICULT_WORDS: &[&str] = &[
    "entrepreneur",
    "analysis",
    "particularly",
    "specifically",
    "development",
    "implementation",
    "organization",
    "communication",
];

/// Letter runs that indicate stuttering or drawn-out sounds in a transcript.
pub const REPEATED_SOUND_PATTERNS: &[&str] = &["aaa", "eee", "ooo", "mmm", "nnn"];

/// Legitimate short words that must not count as speech fragments.
pub const SHORT_WORD_ALLOWLIST: &[&str] = &[
    "i", "a", "to", "of", "in", "on", "at", "is", "it", "we", "me", "my", "be", "do", "go", "no",
    "so", "up",
];

pub const CONFIDENCE_CUES: &[&str] = &[
    "confident",
    "certain",
    "believe",
    "know",
    "sure",
    "definitely",
    "absolutely",
    "clearly",
];

pub const UNCERTAINTY_CUES: &[&str] = &[
    "maybe",
    "perhaps",
    "might",
    "possibly",
    "unsure",
    "i think",
    "i guess",
    "probably",
    "kind of",
    "sort of",
];

pub const WEAK_LANGUAGE: &[&str] = &["um", "uh", "like", "you know", "i mean", "well"];

pub const HIGH_INTENSITY_WORDS: &[&str] = &[
    "exciting",
    "amazing",
    "incredible",
    "fantastic",
    "wonderful",
    "awesome",
    "great",
    "excellent",
    "brilliant",
];

pub const MEDIUM_INTENSITY_WORDS: &[&str] = &[
    "good",
    "nice",
    "interesting",
    "important",
    "useful",
    "helpful",
    "valuable",
];

pub const ENERGY_ADVERBS: &[&str] = &[
    "really",
    "very",
    "extremely",
    "absolutely",
    "definitely",
    "totally",
];

pub const TRANSITION_WORDS: &[&str] = &[
    "first",
    "second",
    "next",
    "then",
    "finally",
    "however",
    "therefore",
    "moreover",
];

/// Opening cues looked for near the start of a talk.
pub const OPENING_CUES: &[&str] = &["today", "welcome", "hello", "good"];

/// Closing cues looked for near the end of a talk.
pub const CLOSING_CUES: &[&str] = &["conclusion", "finally", "thank", "questions"];

pub const EXAMPLE_MARKERS: &[&str] = &["example", "instance"];

pub const EXPLANATION_MARKERS: &[&str] = &["because", "reason", "therefore", "since"];

pub const EDUCATIONAL_WORDS: &[&str] = &[
    "learn",
    "understand",
    "explain",
    "teach",
    "knowledge",
    "concept",
    "idea",
    "theory",
    "practice",
];

pub const SPECIFICITY_MARKERS: &[&str] = &[
    "specifically",
    "exactly",
    "precisely",
    "clearly",
    "detailed",
    "particular",
];

pub const VAGUE_MARKERS: &[&str] = &[
    "thing",
    "stuff",
    "something",
    "somehow",
    "whatever",
    "kind of",
    "sort of",
];
