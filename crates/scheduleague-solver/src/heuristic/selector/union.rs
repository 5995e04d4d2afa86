//! Union move selector combinator.

use rand::{Rng, SeedableRng};

use scheduleague_core::Schedule;

use super::{MoveSelector, SelectionOrder};
use crate::heuristic::r#move::ScheduleMove;
use crate::scope::SolverRng;

/// Combines the moves of two selectors.
///
/// In original order all moves of `first` come before those of `second`.
/// In random order each draw picks a side with probability proportional
/// to its size, so both neighbourhoods are sampled evenly per move.
#[derive(Debug, Clone)]
pub struct UnionMoveSelector<A, B> {
    first: A,
    second: B,
    selection_order: SelectionOrder,
}

impl<A, B> UnionMoveSelector<A, B> {
    pub fn new(first: A, second: B, selection_order: SelectionOrder) -> Self {
        Self {
            first,
            second,
            selection_order,
        }
    }
}

impl<A: MoveSelector, B: MoveSelector> MoveSelector for UnionMoveSelector<A, B> {
    fn iter_moves(
        &self,
        schedule: &Schedule,
        rng: &mut SolverRng,
    ) -> Box<dyn Iterator<Item = ScheduleMove> + Send> {
        let mut first = self.first.iter_moves(schedule, rng);
        let mut second = self.second.iter_moves(schedule, rng);
        match self.selection_order {
            SelectionOrder::Original => Box::new(first.chain(second)),
            SelectionOrder::Random => {
                let mut first_left = self.first.size(schedule);
                let mut second_left = self.second.size(schedule);
                let mut rng = SolverRng::from_rng(rng);
                Box::new(std::iter::from_fn(move || loop {
                    let total = first_left + second_left;
                    if total == 0 {
                        return None;
                    }
                    let from_first = rng.random_range(0..total) < first_left;
                    let next = if from_first {
                        first_left -= 1;
                        first.next()
                    } else {
                        second_left -= 1;
                        second.next()
                    };
                    if next.is_some() {
                        return next;
                    }
                }))
            }
        }
    }

    fn size(&self, schedule: &Schedule) -> usize {
        self.first.size(schedule) + self.second.size(schedule)
    }
}
