//! Hill climbing acceptor.

use scheduleague_core::HardSoftDecimalScore;

use super::Acceptor;

/// Accepts moves that do not make the score worse.
///
/// Equal-score moves are accepted so the search can walk across plateaus,
/// which are common once only balance rules remain.
///
/// # Example
///
/// ```
/// use scheduleague_solver::phase::localsearch::HillClimbingAcceptor;
///
/// let acceptor = HillClimbingAcceptor::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftDecimalScore,
        move_score: &HardSoftDecimalScore,
    ) -> bool {
        move_score >= last_step_score
    }
}
