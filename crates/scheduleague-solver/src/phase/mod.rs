//! Solver phases
//!
//! A solve runs two phases in order:
//! - [`ConstructionPhase`](construction::ConstructionPhase): assigns a
//!   matchup to every open match
//! - [`LocalSearchPhase`](localsearch::LocalSearchPhase): improves the
//!   assignment by swapping and changing matchups

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use scheduleague_scoring::ScoreDirector;

use crate::scope::SolverScope;

/// A phase of the solving process.
///
/// Each phase mutates the working schedule in the solver scope and
/// updates the best solution when it finds an improvement.
pub trait Phase<D: ScoreDirector>: Send + Debug {
    fn solve(&mut self, solver_scope: &mut SolverScope<D>);

    fn phase_type_name(&self) -> &'static str;
}

impl<D: ScoreDirector, P: Phase<D> + ?Sized> Phase<D> for Box<P> {
    fn solve(&mut self, solver_scope: &mut SolverScope<D>) {
        (**self).solve(solver_scope)
    }

    fn phase_type_name(&self) -> &'static str {
        (**self).phase_type_name()
    }
}

/// Tells listeners a phase is starting.
pub(crate) fn notify_phase_started<D: ScoreDirector>(
    solver_scope: &SolverScope<D>,
    phase_index: usize,
    phase_type: &str,
) {
    for listener in solver_scope.listeners() {
        listener.on_phase_started(phase_index, phase_type);
    }
}

pub(crate) fn notify_phase_ended<D: ScoreDirector>(
    solver_scope: &SolverScope<D>,
    phase_index: usize,
    phase_type: &str,
) {
    for listener in solver_scope.listeners() {
        listener.on_phase_ended(phase_index, phase_type);
    }
}
