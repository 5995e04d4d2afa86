//! Foragers for construction heuristic move selection

use std::fmt::Debug;

use scheduleague_core::HardSoftDecimalScore;
use scheduleague_scoring::{RecordingScoreDirector, ScoreDirector};

use super::Placement;
use crate::heuristic::r#move::Move;

/// Picks which candidate of a placement to apply.
pub trait ConstructionForager: Send + Debug {
    /// Index into `placement.moves`, or `None` if nothing is doable.
    fn pick_move_index<D: ScoreDirector>(
        &self,
        placement: &Placement,
        score_director: &mut D,
    ) -> Option<usize>;
}

/// Takes the first doable candidate, relying on the placer's order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitForager;

impl FirstFitForager {
    pub fn new() -> Self {
        Self
    }
}

impl ConstructionForager for FirstFitForager {
    fn pick_move_index<D: ScoreDirector>(
        &self,
        placement: &Placement,
        score_director: &mut D,
    ) -> Option<usize> {
        placement
            .moves
            .iter()
            .position(|m| m.is_doable(score_director))
    }
}

/// Scores every candidate and takes the best; the earliest wins a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitForager;

impl BestFitForager {
    pub fn new() -> Self {
        Self
    }
}

impl ConstructionForager for BestFitForager {
    fn pick_move_index<D: ScoreDirector>(
        &self,
        placement: &Placement,
        score_director: &mut D,
    ) -> Option<usize> {
        let mut best: Option<(usize, HardSoftDecimalScore)> = None;

        for (idx, m) in placement.moves.iter().enumerate() {
            if !m.is_doable(score_director) {
                continue;
            }

            let score = {
                let mut recording = RecordingScoreDirector::new(score_director);
                m.do_move(&mut recording);
                let score = recording.calculate_score();
                recording.undo_changes();
                score
            };

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, _)| idx)
    }
}
