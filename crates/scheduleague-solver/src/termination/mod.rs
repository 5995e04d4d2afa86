//! Termination conditions for the local search.
//!
//! Checked before every construction placement and while local search
//! scores moves.

mod best_score;
mod composite;
mod external;
mod plateau;
mod step_count;
mod time;
mod unimproved;


use std::fmt::Debug;

use scheduleague_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use plateau::FeasiblePlateauTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Trait for determining when to stop solving.
pub trait Termination<D: ScoreDirector>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool;
}
