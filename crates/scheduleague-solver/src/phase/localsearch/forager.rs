//! Foragers for local search move selection
//!
//! Foragers collect accepted moves during a step and select the
//! best one to apply.

use std::fmt::Debug;

use scheduleague_core::HardSoftDecimalScore;

use crate::heuristic::r#move::ScheduleMove;

/// Trait for collecting and selecting moves in local search.
pub trait LocalSearchForager: Send + Debug {
    /// Called at the start of each step to reset state.
    fn step_started(&mut self);

    fn add_move(&mut self, m: ScheduleMove, score: HardSoftDecimalScore);

    /// Returns true once enough moves are collected to stop evaluating.
    fn is_quit_early(&self) -> bool;

    /// Picks the best move from those collected, `None` if nothing was
    /// accepted.
    fn pick_move(&mut self) -> Option<(ScheduleMove, HardSoftDecimalScore)>;
}

impl<F: LocalSearchForager + ?Sized> LocalSearchForager for Box<F> {
    fn step_started(&mut self) {
        (**self).step_started()
    }

    fn add_move(&mut self, m: ScheduleMove, score: HardSoftDecimalScore) {
        (**self).add_move(m, score)
    }

    fn is_quit_early(&self) -> bool {
        (**self).is_quit_early()
    }

    fn pick_move(&mut self) -> Option<(ScheduleMove, HardSoftDecimalScore)> {
        (**self).pick_move()
    }
}

/// Collects up to `accepted_count_limit` accepted moves and picks the best.
///
/// Among equal scores the move accepted first wins.
#[derive(Debug, Clone)]
pub struct AcceptedCountForager {
    accepted_count_limit: usize,
    accepted_moves: Vec<(ScheduleMove, HardSoftDecimalScore)>,
}

impl AcceptedCountForager {
    pub fn new(accepted_count_limit: usize) -> Self {
        Self {
            accepted_count_limit: accepted_count_limit.max(1),
            accepted_moves: Vec::new(),
        }
    }

    pub fn accepted_count_limit(&self) -> usize {
        self.accepted_count_limit
    }
}

impl Default for AcceptedCountForager {
    fn default() -> Self {
        Self::new(1)
    }
}

impl LocalSearchForager for AcceptedCountForager {
    fn step_started(&mut self) {
        self.accepted_moves.clear();
    }

    fn add_move(&mut self, m: ScheduleMove, score: HardSoftDecimalScore) {
        self.accepted_moves.push((m, score));
    }

    fn is_quit_early(&self) -> bool {
        self.accepted_moves.len() >= self.accepted_count_limit
    }

    fn pick_move(&mut self) -> Option<(ScheduleMove, HardSoftDecimalScore)> {
        let mut best: Option<usize> = None;
        for (i, (_, score)) in self.accepted_moves.iter().enumerate() {
            if best.map_or(true, |b| *score > self.accepted_moves[b].1) {
                best = Some(i);
            }
        }
        best.map(|i| self.accepted_moves.swap_remove(i))
    }
}
