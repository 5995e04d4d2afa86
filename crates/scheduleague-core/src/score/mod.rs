//! Score type for representing schedule quality
//!
//! A schedule is judged on two levels: hard (feasibility) and soft
//! (fairness preferences). Scores are penalties, so a higher score is better
//! and `0hard/0soft` is perfect.

mod hard_soft_decimal;

pub use hard_soft_decimal::{scaled_from_decimal, HardSoftDecimalScore, SCALE};

use thiserror::Error;

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Score parse error: {message}")]
pub struct ScoreParseError {
    pub message: String,
}

impl ScoreParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
