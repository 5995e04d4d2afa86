//! Step-level scope.

use scheduleague_core::HardSoftDecimalScore;
use scheduleague_scoring::ScoreDirector;

use super::PhaseScope;

/// Scope for a single step within a phase.
pub struct StepScope<'a, 'b, D: ScoreDirector> {
    phase_scope: &'a mut PhaseScope<'b, D>,
    step_index: u64,
    step_score: Option<HardSoftDecimalScore>,
}

impl<'a, 'b, D: ScoreDirector> StepScope<'a, 'b, D> {
    pub fn new(phase_scope: &'a mut PhaseScope<'b, D>) -> Self {
        let step_index = phase_scope.step_count();
        Self {
            phase_scope,
            step_index,
            step_score: None,
        }
    }

    /// Index of this step within the phase (0-based).
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    pub fn step_score(&self) -> Option<&HardSoftDecimalScore> {
        self.step_score.as_ref()
    }

    pub fn set_step_score(&mut self, score: HardSoftDecimalScore) {
        self.step_score = Some(score);
    }

    /// Marks this step as complete and increments counters.
    pub fn complete(&mut self) {
        self.phase_scope.increment_step_count();
    }

    pub fn phase_scope(&self) -> &PhaseScope<'b, D> {
        self.phase_scope
    }

    pub fn phase_scope_mut(&mut self) -> &mut PhaseScope<'b, D> {
        self.phase_scope
    }

    pub fn score_director(&self) -> &D {
        self.phase_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        self.phase_scope.score_director_mut()
    }

    pub fn calculate_score(&mut self) -> HardSoftDecimalScore {
        self.phase_scope.calculate_score()
    }
}
