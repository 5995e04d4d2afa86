//! Simple score director with full recalculation.

use scheduleague_core::{HardSoftDecimalScore, Schedule};

use super::traits::ScoreDirector;
use crate::constraint::{rules, ConstraintWeights};

/// A score director that recalculates the full score each time.
///
/// This is slow but trivially correct; it is the reference the incremental
/// director is tested against.
#[derive(Debug, Clone)]
pub struct SimpleScoreDirector {
    working_solution: Schedule,
    weights: ConstraintWeights,
    score_dirty: bool,
    cached_score: Option<HardSoftDecimalScore>,
}

impl SimpleScoreDirector {
    /// Creates a director using the weights implied by the schedule's constraints.
    pub fn new(solution: Schedule) -> Self {
        let weights = ConstraintWeights::for_constraints(&solution.constraints);
        Self::with_weights(solution, weights)
    }

    pub fn with_weights(solution: Schedule, weights: ConstraintWeights) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            weights,
            score_dirty: true,
            cached_score: None,
        }
    }

    pub fn weights(&self) -> &ConstraintWeights {
        &self.weights
    }

    pub fn into_working_solution(self) -> Schedule {
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl ScoreDirector for SimpleScoreDirector {
    fn working_solution(&self) -> &Schedule {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut Schedule {
        self.mark_dirty();
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> HardSoftDecimalScore {
        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = rules::calculate_score_with(&self.working_solution, &self.weights);
        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn before_match_changed(&mut self, _index: usize) {
        self.mark_dirty();
    }

    fn after_match_changed(&mut self, _index: usize) {
        self.mark_dirty();
    }

    fn reset(&mut self) {
        self.mark_dirty();
    }
}
