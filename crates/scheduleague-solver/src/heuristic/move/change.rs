//! ChangeMove - assigns a single match a new matchup.

use scheduleague_core::Matchup;
use scheduleague_scoring::ScoreDirector;

use super::Move;

/// Assigns `to_value` to one open match.
///
/// The local search only offers values no open match holds, which keeps
/// every pool entry used at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeMove {
    index: [usize; 1],
    to_value: Option<Matchup>,
}

impl ChangeMove {
    pub fn new(match_index: usize, to_value: Option<Matchup>) -> Self {
        Self {
            index: [match_index],
            to_value,
        }
    }

    pub fn match_index(&self) -> usize {
        self.index[0]
    }

    pub fn to_value(&self) -> Option<Matchup> {
        self.to_value
    }
}

impl Move for ChangeMove {
    fn is_doable<D: ScoreDirector + ?Sized>(&self, score_director: &D) -> bool {
        score_director
            .working_solution()
            .matches
            .get(self.index[0])
            .is_some_and(|m| !m.is_locked() && m.matchup() != self.to_value)
    }

    fn do_move<D: ScoreDirector + ?Sized>(&self, score_director: &mut D) {
        score_director.assign(self.index[0], self.to_value);
    }

    fn match_indices(&self) -> &[usize] {
        &self.index
    }
}
