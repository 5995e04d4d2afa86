// Score director trait definition.

use scheduleague_core::{HardSoftDecimalScore, Matchup, Schedule};

// The score director owns the working schedule and its score calculation.
//
// It is responsible for:
// - Maintaining the working schedule
// - Calculating scores (incrementally when possible)
// - Receiving notifications around every matchup change
//
// Every change of a match's matchup must be bracketed by
// `before_match_changed` and `after_match_changed` for the same index.
pub trait ScoreDirector: Send {
    // Returns a reference to the working schedule.
    fn working_solution(&self) -> &Schedule;

    // Returns a mutable reference to the working schedule.
    //
    // Changes made through this reference bypass the notifications; call
    // `reset` afterwards.
    fn working_solution_mut(&mut self) -> &mut Schedule;

    // Calculates and returns the current score.
    fn calculate_score(&mut self) -> HardSoftDecimalScore;

    // Clones the working schedule.
    fn clone_working_solution(&self) -> Schedule {
        self.working_solution().clone()
    }

    // Called before the matchup of match `index` is changed.
    fn before_match_changed(&mut self, index: usize);

    // Called after the matchup of match `index` is changed.
    fn after_match_changed(&mut self, index: usize);

    // Sets the matchup of match `index` with both notifications.
    fn assign(&mut self, index: usize, matchup: Option<Matchup>) {
        self.before_match_changed(index);
        self.working_solution_mut().matches[index].set_matchup(matchup);
        self.after_match_changed(index);
    }

    fn match_count(&self) -> usize {
        self.working_solution().matches.len()
    }

    // Returns true if this score director supports incremental scoring.
    fn is_incremental(&self) -> bool {
        false
    }

    // Rebuilds any cached state from the working schedule.
    fn reset(&mut self) {}
}
