// Recording score director for all-or-nothing move evaluation.
//
// The `RecordingScoreDirector` wraps an existing score director and records
// the previous matchup of every match changed through it:
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner);
// mv.do_move(&mut recording);
// let score = recording.calculate_score();
// recording.undo_changes();  // restores every recorded matchup
// ```

use scheduleague_core::{HardSoftDecimalScore, Matchup, Schedule};

use super::ScoreDirector;

// A score director wrapper that records previous matchups for undo.
//
// # Example
//
// ```
// use scheduleague_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
// use scheduleague_test::round_robin_schedule;
//
// let mut inner = SimpleScoreDirector::new(round_robin_schedule(3));
// let first = inner.working_solution().matchups[0];
//
// let mut recording = RecordingScoreDirector::new(&mut inner);
// recording.assign(0, Some(first));
// assert_eq!(recording.change_count(), 1);
// recording.undo_changes();
//
// assert_eq!(inner.working_solution().matches[0].matchup(), None);
// ```
pub struct RecordingScoreDirector<'a> {
    inner: &'a mut dyn ScoreDirector,
    // (match index, matchup before the first recorded change)
    undo_stack: Vec<(usize, Option<Matchup>)>,
}

impl<'a> RecordingScoreDirector<'a> {
    pub fn new(inner: &'a mut dyn ScoreDirector) -> Self {
        Self {
            inner,
            undo_stack: Vec::with_capacity(4),
        }
    }

    // Restores every recorded matchup in reverse order.
    pub fn undo_changes(&mut self) {
        while let Some((index, previous)) = self.undo_stack.pop() {
            self.inner.assign(index, previous);
        }
    }

    // Forgets the recorded changes, keeping them applied.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
    }

    pub fn change_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl ScoreDirector for RecordingScoreDirector<'_> {
    fn working_solution(&self) -> &Schedule {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut Schedule {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> HardSoftDecimalScore {
        self.inner.calculate_score()
    }

    fn clone_working_solution(&self) -> Schedule {
        self.inner.clone_working_solution()
    }

    fn before_match_changed(&mut self, index: usize) {
        let previous = self.inner.working_solution().matches[index].matchup();
        self.undo_stack.push((index, previous));
        self.inner.before_match_changed(index);
    }

    fn after_match_changed(&mut self, index: usize) {
        self.inner.after_match_changed(index);
    }

    fn is_incremental(&self) -> bool {
        self.inner.is_incremental()
    }
}
