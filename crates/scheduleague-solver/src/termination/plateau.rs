//! Feasible plateau termination.

use scheduleague_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the best schedule is feasible and `steps` steps have
/// gone by without improving it.
#[derive(Debug, Clone)]
pub struct FeasiblePlateauTermination {
    steps: u64,
}

impl FeasiblePlateauTermination {
    pub fn new(steps: u64) -> Self {
        Self { steps }
    }
}

impl<D: ScoreDirector> Termination<D> for FeasiblePlateauTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope
            .best_score()
            .is_some_and(|score| score.is_feasible())
            && solver_scope.unimproved_step_count() >= self.steps
    }
}
