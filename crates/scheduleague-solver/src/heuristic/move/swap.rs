//! SwapMove - exchanges the matchups of two matches.

use scheduleague_scoring::ScoreDirector;

use super::Move;

/// Swaps the matchups held by two open matches.
///
/// Swapping keeps the multiset of assigned matchups intact, so a schedule
/// that uses every pool entry once still does after the move.
///
/// # Example
///
/// ```
/// use scheduleague_scoring::{ScoreDirector, SimpleScoreDirector};
/// use scheduleague_solver::heuristic::r#move::{Move, SwapMove};
/// use scheduleague_test::round_robin_schedule;
///
/// let mut director = SimpleScoreDirector::new(round_robin_schedule(3));
/// let pool = director.working_solution().matchups.clone();
/// director.assign(0, Some(pool[0]));
/// director.assign(1, Some(pool[1]));
///
/// let swap = SwapMove::new(0, 1);
/// assert!(swap.is_doable(&director));
/// swap.do_move(&mut director);
/// assert_eq!(director.working_solution().matches[0].matchup(), Some(pool[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    indices: [usize; 2],
}

impl SwapMove {
    pub fn new(left_index: usize, right_index: usize) -> Self {
        Self {
            indices: [left_index, right_index],
        }
    }

    pub fn left_index(&self) -> usize {
        self.indices[0]
    }

    pub fn right_index(&self) -> usize {
        self.indices[1]
    }
}

impl Move for SwapMove {
    fn is_doable<D: ScoreDirector + ?Sized>(&self, score_director: &D) -> bool {
        let [left, right] = self.indices;
        if left == right {
            return false;
        }
        let matches = &score_director.working_solution().matches;
        let (Some(l), Some(r)) = (matches.get(left), matches.get(right)) else {
            return false;
        };
        !l.is_locked() && !r.is_locked() && l.matchup() != r.matchup()
    }

    fn do_move<D: ScoreDirector + ?Sized>(&self, score_director: &mut D) {
        let [left, right] = self.indices;
        let left_value = score_director.working_solution().matches[left].matchup();
        let right_value = score_director.working_solution().matches[right].matchup();

        score_director.before_match_changed(left);
        score_director.before_match_changed(right);
        let matches = &mut score_director.working_solution_mut().matches;
        matches[left].set_matchup(right_value);
        matches[right].set_matchup(left_value);
        score_director.after_match_changed(left);
        score_director.after_match_changed(right);
    }

    fn match_indices(&self) -> &[usize] {
        &self.indices
    }
}
