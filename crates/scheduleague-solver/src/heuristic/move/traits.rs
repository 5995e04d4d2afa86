//! Move trait definition.

use std::fmt::Debug;

use scheduleague_scoring::ScoreDirector;

/// A move that changes the matchup of one or more matches.
///
/// Methods are generic over `D` so the same move runs against a concrete
/// director or a `RecordingScoreDirector`.
pub trait Move: Send + Sync + Debug {
    /// Returns true if this move can be executed in the current state.
    ///
    /// A move is not doable if it would change a locked match or leave the
    /// schedule unchanged.
    fn is_doable<D: ScoreDirector + ?Sized>(&self, score_director: &D) -> bool;

    /// Executes this move through the score director.
    fn do_move<D: ScoreDirector + ?Sized>(&self, score_director: &mut D);

    /// Indices of the matches this move changes.
    fn match_indices(&self) -> &[usize];
}
