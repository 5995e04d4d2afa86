//! Score-based termination.

use scheduleague_core::HardSoftDecimalScore;
use scheduleague_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when the best score reaches or exceeds a target.
///
/// # Example
///
/// ```
/// use scheduleague_core::HardSoftDecimalScore;
/// use scheduleague_solver::termination::BestScoreTermination;
///
/// let term = BestScoreTermination::new(HardSoftDecimalScore::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct BestScoreTermination {
    target_score: HardSoftDecimalScore,
}

impl BestScoreTermination {
    pub fn new(target_score: HardSoftDecimalScore) -> Self {
        Self { target_score }
    }
}

impl<D: ScoreDirector> Termination<D> for BestScoreTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope
            .best_score()
            .is_some_and(|score| *score >= self.target_score)
    }
}
