/// Duration a caller should substitute when the audio duration is unknown.
/// Applied by hosts (CLI, HTTP handler) before the engine runs; the engine
/// itself never invents a duration.
pub const DEFAULT_FALLBACK_DURATION_SECS: f64 = 60.0;

/// Caps on report list lengths. These are part of the wire contract.
pub const ERROR_DETAIL_LIMIT: usize = 5;
pub const REPETITIVE_WORD_LIMIT: usize = 5;
pub const STRENGTH_LIMIT: usize = 4;
pub const IMPROVEMENT_LIMIT: usize = 5;
pub const TIP_LIMIT: usize = 5;
