//! Score aggregation and rule-driven feedback selection.

pub mod generator;
pub mod overall;
pub mod rules;
