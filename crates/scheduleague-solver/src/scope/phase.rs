//! Phase-level scope.

use std::time::Instant;

use scheduleague_core::HardSoftDecimalScore;
use scheduleague_scoring::ScoreDirector;

use super::SolverScope;

/// Scope for a single phase of solving.
pub struct PhaseScope<'a, D: ScoreDirector> {
    solver_scope: &'a mut SolverScope<D>,
    phase_index: usize,
    starting_score: Option<HardSoftDecimalScore>,
    step_count: u64,
    start_time: Instant,
}

impl<'a, D: ScoreDirector> PhaseScope<'a, D> {
    pub fn new(solver_scope: &'a mut SolverScope<D>, phase_index: usize) -> Self {
        let starting_score = solver_scope.best_score().copied();
        Self {
            solver_scope,
            phase_index,
            starting_score,
            step_count: 0,
            start_time: Instant::now(),
        }
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Best score when the phase started.
    pub fn starting_score(&self) -> Option<&HardSoftDecimalScore> {
        self.starting_score.as_ref()
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Increments the phase step count and the solver's total.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.solver_scope.increment_step_count();
        self.step_count
    }

    pub fn solver_scope(&self) -> &SolverScope<D> {
        self.solver_scope
    }

    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<D> {
        self.solver_scope
    }

    pub fn score_director(&self) -> &D {
        self.solver_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        self.solver_scope.score_director_mut()
    }

    pub fn calculate_score(&mut self) -> HardSoftDecimalScore {
        self.solver_scope.calculate_score()
    }

    pub fn update_best_solution(&mut self) -> bool {
        self.solver_scope.update_best_solution()
    }
}
