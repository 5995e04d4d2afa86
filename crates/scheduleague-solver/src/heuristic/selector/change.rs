//! Change move selector.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};

use scheduleague_core::{Matchup, Schedule};

use super::{movable_indices, MoveSelector, SelectionOrder};
use crate::heuristic::r#move::{ChangeMove, ScheduleMove};
use crate::scope::SolverRng;

/// Offers to move an open match onto a pool matchup that no open match
/// currently holds.
///
/// With as many open matches as pool entries and every match assigned,
/// there is nothing to offer; the selector matters for short partitions
/// and partially filled schedules.
#[derive(Debug, Clone, Copy)]
pub struct ChangeMoveSelector {
    selection_order: SelectionOrder,
}

impl ChangeMoveSelector {
    pub fn new(selection_order: SelectionOrder) -> Self {
        Self { selection_order }
    }

    /// Pool values with spare multiplicity, in pool order.
    pub fn unused_values(schedule: &Schedule) -> Vec<Matchup> {
        let mut held: HashMap<Matchup, usize> = HashMap::new();
        for m in schedule.matches.iter().filter(|m| !m.is_locked()) {
            if let Some(value) = m.matchup() {
                *held.entry(value).or_insert(0) += 1;
            }
        }
        let mut unused = Vec::new();
        for value in &schedule.matchups {
            match held.get_mut(value) {
                Some(count) if *count > 0 => *count -= 1,
                _ if unused.contains(value) => {}
                _ => unused.push(*value),
            }
        }
        unused
    }
}

impl Default for ChangeMoveSelector {
    fn default() -> Self {
        Self::new(SelectionOrder::Random)
    }
}

impl MoveSelector for ChangeMoveSelector {
    fn iter_moves(
        &self,
        schedule: &Schedule,
        rng: &mut SolverRng,
    ) -> Box<dyn Iterator<Item = ScheduleMove> + Send> {
        let indices = movable_indices(schedule);
        let values = Self::unused_values(schedule);
        if indices.is_empty() || values.is_empty() {
            return Box::new(std::iter::empty());
        }
        match self.selection_order {
            SelectionOrder::Original => Box::new(indices.into_iter().flat_map(move |index| {
                values
                    .clone()
                    .into_iter()
                    .map(move |value| ScheduleMove::Change(ChangeMove::new(index, Some(value))))
            })),
            SelectionOrder::Random => {
                let mut rng = SolverRng::from_rng(rng);
                let size = indices.len() * values.len();
                Box::new(
                    std::iter::repeat_with(move || {
                        let index = indices[rng.random_range(0..indices.len())];
                        let value = values[rng.random_range(0..values.len())];
                        ScheduleMove::Change(ChangeMove::new(index, Some(value)))
                    })
                    .take(size),
                )
            }
        }
    }

    fn size(&self, schedule: &Schedule) -> usize {
        movable_indices(schedule).len() * Self::unused_values(schedule).len()
    }
}
