//! Vocal delivery analysis: pace, fillers, and the punctuation-derived
//! pause/pronunciation/pitch proxies.

pub mod fillers;
pub mod pace;
pub mod pauses;
pub mod pitch;
pub mod pronunciation;
