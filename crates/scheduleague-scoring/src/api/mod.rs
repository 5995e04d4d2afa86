//! Caller-facing scoring API: weight overrides and score explanations.

pub mod analysis;
pub mod weight_overrides;
