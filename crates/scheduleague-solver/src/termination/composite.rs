//! Composite termination.

use std::fmt::Debug;

use scheduleague_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when any child terminates.
///
/// Children are boxed because the set is assembled from configuration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use scheduleague_scoring::IncrementalScoreDirector;
/// use scheduleague_solver::termination::{OrTermination, StepCountTermination, TimeTermination};
///
/// let termination = OrTermination::<IncrementalScoreDirector>::new()
///     .with(TimeTermination::new(Duration::from_secs(30)))
///     .with(StepCountTermination::new(1000));
/// assert_eq!(termination.len(), 2);
/// ```
pub struct OrTermination<D: ScoreDirector> {
    terminations: Vec<Box<dyn Termination<D>>>,
}

impl<D: ScoreDirector> Debug for OrTermination<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrTermination")
            .field("terminations", &self.terminations)
            .finish()
    }
}

impl<D: ScoreDirector> OrTermination<D> {
    pub fn new() -> Self {
        Self {
            terminations: Vec::new(),
        }
    }

    pub fn with(mut self, termination: impl Termination<D> + 'static) -> Self {
        self.terminations.push(Box::new(termination));
        self
    }

    pub fn push(&mut self, termination: Box<dyn Termination<D>>) {
        self.terminations.push(termination);
    }

    pub fn len(&self) -> usize {
        self.terminations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminations.is_empty()
    }
}

impl<D: ScoreDirector> Default for OrTermination<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ScoreDirector> Termination<D> for OrTermination<D> {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        self.terminations
            .iter()
            .any(|t| t.is_terminated(solver_scope))
    }
}
