//! ScheduleMove - a monomorphized union of ChangeMove and SwapMove.
//!
//! Local search draws both move types from one selector without
//! trait-object dispatch.

use std::fmt;

use scheduleague_scoring::ScoreDirector;

use super::{ChangeMove, Move, SwapMove};

/// Either kind of local search move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMove {
    Change(ChangeMove),
    Swap(SwapMove),
}

impl Move for ScheduleMove {
    fn is_doable<D: ScoreDirector + ?Sized>(&self, score_director: &D) -> bool {
        match self {
            Self::Change(m) => m.is_doable(score_director),
            Self::Swap(m) => m.is_doable(score_director),
        }
    }

    fn do_move<D: ScoreDirector + ?Sized>(&self, score_director: &mut D) {
        match self {
            Self::Change(m) => m.do_move(score_director),
            Self::Swap(m) => m.do_move(score_director),
        }
    }

    fn match_indices(&self) -> &[usize] {
        match self {
            Self::Change(m) => m.match_indices(),
            Self::Swap(m) => m.match_indices(),
        }
    }
}

impl From<ChangeMove> for ScheduleMove {
    fn from(m: ChangeMove) -> Self {
        Self::Change(m)
    }
}

impl From<SwapMove> for ScheduleMove {
    fn from(m: SwapMove) -> Self {
        Self::Swap(m)
    }
}

impl fmt::Display for ScheduleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change(m) => match m.to_value() {
                Some(value) => write!(f, "match[{}] <- {}", m.match_index(), value),
                None => write!(f, "match[{}] <- none", m.match_index()),
            },
            Self::Swap(m) => write!(f, "match[{}] <-> match[{}]", m.left_index(), m.right_index()),
        }
    }
}
