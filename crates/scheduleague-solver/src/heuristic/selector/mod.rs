//! Move selectors.
//!
//! Selectors enumerate the moves a local search step considers. Every
//! selector skips locked matches, so pinned matches never move and their
//! matchups never travel to another match.

mod change;
mod swap;
mod union;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use scheduleague_core::Schedule;

use crate::heuristic::r#move::ScheduleMove;
use crate::scope::SolverRng;

pub use change::ChangeMoveSelector;
pub use scheduleague_config::SelectionOrder;
pub use swap::SwapMoveSelector;
pub use union::UnionMoveSelector;

/// Produces candidate moves for the current working schedule.
///
/// The returned iterator owns everything it needs (it forks `rng` when
/// the order is random), so the caller may mutate the schedule while
/// draining it. Moves reflect the schedule at the time of the call.
pub trait MoveSelector: Send + Debug {
    fn iter_moves(
        &self,
        schedule: &Schedule,
        rng: &mut SolverRng,
    ) -> Box<dyn Iterator<Item = ScheduleMove> + Send>;

    /// Number of distinct moves `iter_moves` would offer.
    fn size(&self, schedule: &Schedule) -> usize;
}

impl<T: MoveSelector + ?Sized> MoveSelector for Box<T> {
    fn iter_moves(
        &self,
        schedule: &Schedule,
        rng: &mut SolverRng,
    ) -> Box<dyn Iterator<Item = ScheduleMove> + Send> {
        (**self).iter_moves(schedule, rng)
    }

    fn size(&self, schedule: &Schedule) -> usize {
        (**self).size(schedule)
    }
}

/// Indices of matches that may be changed.
pub(crate) fn movable_indices(schedule: &Schedule) -> Vec<usize> {
    schedule.open_match_indices()
}
