//! Wall-clock budget of a solve.

use std::time::Duration;

use scheduleague_config::TerminationConfig;
use scheduleague_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the solve has used its time budget.
///
/// Each partition of a season is a separate solve with the full budget.
///
/// ```
/// use std::time::Duration;
/// use scheduleague_config::TerminationConfig;
/// use scheduleague_solver::termination::TimeTermination;
///
/// let mut config = TerminationConfig::default();
/// config.seconds_spent_limit = Some(2);
/// config.millis_spent_limit = Some(250);
/// let budget = TimeTermination::from_config(&config).unwrap();
/// assert_eq!(budget.limit(), Duration::from_millis(2250));
///
/// assert!(TimeTermination::from_config(&TerminationConfig::unlimited_time()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// The configured seconds and millis added up, or `None` without a
    /// time limit.
    pub fn from_config(config: &TerminationConfig) -> Option<Self> {
        config.time_limit().map(Self::new)
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Budget left; the whole limit if solving has not started.
    pub fn remaining<D: ScoreDirector>(&self, solver_scope: &SolverScope<D>) -> Duration {
        self.limit
            .saturating_sub(solver_scope.elapsed().unwrap_or_default())
    }
}

impl<D: ScoreDirector> Termination<D> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope.elapsed().is_some() && self.remaining(solver_scope).is_zero()
    }
}
