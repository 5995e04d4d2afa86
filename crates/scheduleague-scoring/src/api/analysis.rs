//! Score analysis types for per-constraint breakdowns.
//!
//! A [`ScoreExplanation`] tells a caller which rules a schedule violates and
//! by how much, which is what they need when the solver returns a nonzero
//! hard score.

use std::fmt;

use scheduleague_core::{HardSoftDecimalScore, Schedule};

use crate::constraint::{rules, ConstraintWeights, LeagueConstraint};

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintAnalysis {
    pub constraint: LeagueConstraint,
    /// Constraint weight (score per unit of violation).
    pub weight: HardSoftDecimalScore,
    /// Total score from this constraint.
    pub score: HardSoftDecimalScore,
    /// Violating pairs, matches or teams, depending on the rule.
    pub match_count: usize,
}

impl ConstraintAnalysis {
    pub fn name(&self) -> &'static str {
        self.constraint.name()
    }

    pub fn is_hard(&self) -> bool {
        self.constraint.is_hard()
    }
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExplanation {
    /// The total score.
    pub score: HardSoftDecimalScore,
    pub constraint_analyses: Vec<ConstraintAnalysis>,
}

impl ScoreExplanation {
    /// Explains `schedule` with the weights its constraints imply.
    pub fn of(schedule: &Schedule) -> Self {
        Self::with_weights(
            schedule,
            &ConstraintWeights::for_constraints(&schedule.constraints),
        )
    }

    pub fn with_weights(schedule: &Schedule, weights: &ConstraintWeights) -> Self {
        let constraint_analyses: Vec<ConstraintAnalysis> = LeagueConstraint::ALL
            .into_iter()
            .map(|constraint| {
                let outcome = rules::evaluate(constraint, schedule, weights);
                ConstraintAnalysis {
                    constraint,
                    weight: weights.get(constraint),
                    score: outcome.score,
                    match_count: outcome.match_count,
                }
            })
            .collect();
        let score = constraint_analyses.iter().map(|a| a.score).sum();
        Self {
            score,
            constraint_analyses,
        }
    }

    pub fn get(&self, constraint: LeagueConstraint) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .find(|a| a.constraint == constraint)
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != HardSoftDecimalScore::ZERO)
            .collect()
    }

    /// Violated hard rules, worst first.
    pub fn hard_violations(&self) -> Vec<&ConstraintAnalysis> {
        let mut violations: Vec<_> = self
            .non_zero_constraints()
            .into_iter()
            .filter(|a| a.is_hard())
            .collect();
        violations.sort_by_key(|a| a.score);
        violations
    }
}

impl fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        for analysis in self.non_zero_constraints() {
            writeln!(
                f,
                "  {}: {} ({} matches)",
                analysis.name(),
                analysis.score,
                analysis.match_count
            )?;
        }
        Ok(())
    }
}
