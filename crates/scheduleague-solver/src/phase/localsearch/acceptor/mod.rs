//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether a move is taken based on the score it leads
//! to compared with the previous step's score.

mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;


use std::fmt::Debug;

use scheduleague_core::HardSoftDecimalScore;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftDecimalScore,
        move_score: &HardSoftDecimalScore,
    ) -> bool;

    fn phase_started(&mut self, _initial_score: &HardSoftDecimalScore) {}

    fn phase_ended(&mut self) {}

    fn step_started(&mut self) {}

    /// Called when a step ends with an accepted move.
    fn step_ended(&mut self, _step_score: &HardSoftDecimalScore) {}
}

impl<A: Acceptor + ?Sized> Acceptor for Box<A> {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftDecimalScore,
        move_score: &HardSoftDecimalScore,
    ) -> bool {
        (**self).is_accepted(last_step_score, move_score)
    }

    fn phase_started(&mut self, initial_score: &HardSoftDecimalScore) {
        (**self).phase_started(initial_score)
    }

    fn phase_ended(&mut self) {
        (**self).phase_ended()
    }

    fn step_started(&mut self) {
        (**self).step_started()
    }

    fn step_ended(&mut self, step_score: &HardSoftDecimalScore) {
        (**self).step_ended(step_score)
    }
}

/// Rejects any move that lowers the hard score below the last step's,
/// whatever the wrapped acceptor thinks of it.
#[derive(Debug, Clone)]
pub struct HardScoreGuard<A> {
    inner: A,
}

impl<A: Acceptor> HardScoreGuard<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Acceptor> Acceptor for HardScoreGuard<A> {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftDecimalScore,
        move_score: &HardSoftDecimalScore,
    ) -> bool {
        move_score.hard_scaled() >= last_step_score.hard_scaled()
            && self.inner.is_accepted(last_step_score, move_score)
    }

    fn phase_started(&mut self, initial_score: &HardSoftDecimalScore) {
        self.inner.phase_started(initial_score)
    }

    fn phase_ended(&mut self) {
        self.inner.phase_ended()
    }

    fn step_started(&mut self) {
        self.inner.step_started()
    }

    fn step_ended(&mut self, step_score: &HardSoftDecimalScore) {
        self.inner.step_ended(step_score)
    }
}
