//! Incremental constraint scoring for scheduleague.
//!
//! This crate provides:
//! - The league rules as pure functions ([`constraint::rules`])
//! - LoadBalance unfairness ([`LoadBalance`])
//! - Runtime weight configuration ([`ConstraintWeightOverrides`], [`ConstraintWeights`])
//! - Score directors: full recalculation, incremental and recording
//! - Score explanations for inspecting violations

pub mod api;
pub mod constraint;
pub mod director;

// ============================================================================
// Constraints
// ============================================================================

pub use constraint::load_balance::{unfairness, LoadBalance};
pub use constraint::rules::{calculate_score, calculate_score_with, RuleOutcome};
pub use constraint::{ConstraintWeights, LeagueConstraint};

// ============================================================================
// Weights and analysis
// ============================================================================

pub use api::analysis::{ConstraintAnalysis, ScoreExplanation};
pub use api::weight_overrides::ConstraintWeightOverrides;

// ============================================================================
// Score Directors
// ============================================================================

pub use director::{
    IncrementalScoreDirector, RecordingScoreDirector, ScoreDirector, SimpleScoreDirector,
};
