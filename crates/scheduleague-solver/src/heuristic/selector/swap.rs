//! Swap move selector.

use rand::{Rng, SeedableRng};

use scheduleague_core::Schedule;

use super::{movable_indices, MoveSelector, SelectionOrder};
use crate::heuristic::r#move::{ScheduleMove, SwapMove};
use crate::scope::SolverRng;

/// Offers a swap for every unordered pair of open matches.
///
/// # Example
///
/// ```
/// use scheduleague_solver::heuristic::selector::{MoveSelector, SelectionOrder, SwapMoveSelector};
/// use scheduleague_solver::scope::SolverRng;
/// use scheduleague_test::round_robin_schedule;
/// use rand::SeedableRng;
///
/// let schedule = round_robin_schedule(4);
/// let selector = SwapMoveSelector::new(SelectionOrder::Original);
/// let mut rng = SolverRng::seed_from_u64(0);
/// assert_eq!(selector.size(&schedule), 15);
/// assert_eq!(selector.iter_moves(&schedule, &mut rng).count(), 15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SwapMoveSelector {
    selection_order: SelectionOrder,
}

impl SwapMoveSelector {
    pub fn new(selection_order: SelectionOrder) -> Self {
        Self { selection_order }
    }
}

impl Default for SwapMoveSelector {
    fn default() -> Self {
        Self::new(SelectionOrder::Random)
    }
}

impl MoveSelector for SwapMoveSelector {
    fn iter_moves(
        &self,
        schedule: &Schedule,
        rng: &mut SolverRng,
    ) -> Box<dyn Iterator<Item = ScheduleMove> + Send> {
        let indices = movable_indices(schedule);
        let n = indices.len();
        if n < 2 {
            return Box::new(std::iter::empty());
        }
        match self.selection_order {
            SelectionOrder::Original => Box::new(PairIter {
                indices,
                left: 0,
                right: 1,
            }),
            SelectionOrder::Random => {
                let mut rng = SolverRng::from_rng(rng);
                let size = pair_count(n);
                Box::new(
                    std::iter::repeat_with(move || {
                        let a = rng.random_range(0..n);
                        let mut b = rng.random_range(0..n - 1);
                        if b >= a {
                            b += 1;
                        }
                        ScheduleMove::Swap(SwapMove::new(indices[a], indices[b]))
                    })
                    .take(size),
                )
            }
        }
    }

    fn size(&self, schedule: &Schedule) -> usize {
        pair_count(movable_indices(schedule).len())
    }
}

fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Every `(left, right)` with `left < right`, in index order.
struct PairIter {
    indices: Vec<usize>,
    left: usize,
    right: usize,
}

impl Iterator for PairIter {
    type Item = ScheduleMove;

    fn next(&mut self) -> Option<ScheduleMove> {
        if self.right >= self.indices.len() {
            self.left += 1;
            self.right = self.left + 1;
            if self.right >= self.indices.len() {
                return None;
            }
        }
        let m = SwapMove::new(self.indices[self.left], self.indices[self.right]);
        self.right += 1;
        Some(ScheduleMove::Swap(m))
    }
}
