//! Unimproved step count termination.

use scheduleague_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after `limit` steps without a new best score.
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<D: ScoreDirector> Termination<D> for UnimprovedStepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope.best_score().is_some() && solver_scope.unimproved_step_count() >= self.limit
    }
}
