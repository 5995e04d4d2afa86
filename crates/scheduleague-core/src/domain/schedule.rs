//! The working solution

use super::{Constraints, Match, Matchup, Team, TeamId};
use crate::score::HardSoftDecimalScore;

/// All matches of one solve unit together with the facts they are judged by.
///
/// `matchups` is the pool open matches draw their values from; locked
/// matches may carry matchups outside it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub constraints: Constraints,
    pub teams: Vec<Team>,
    pub matchups: Vec<Matchup>,
    pub matches: Vec<Match>,
    pub score: Option<HardSoftDecimalScore>,
}

impl Schedule {
    /// Builds a schedule; matches are put in (week, datetime, venue) order.
    pub fn new(
        constraints: Constraints,
        teams: Vec<Team>,
        matchups: Vec<Matchup>,
        mut matches: Vec<Match>,
    ) -> Self {
        matches.sort_by_key(Match::sort_key);
        Self {
            constraints,
            teams,
            matchups,
            matches,
            score: None,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Indices of matches the solver may reassign.
    pub fn open_match_indices(&self) -> Vec<usize> {
        self.matches
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_locked())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn locked_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_locked()).count()
    }

    pub fn is_fully_locked(&self) -> bool {
        self.matches.iter().all(Match::is_locked)
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.matches.iter().all(Match::is_assigned)
    }

    pub fn score(&self) -> Option<HardSoftDecimalScore> {
        self.score
    }

    pub fn set_score(&mut self, score: Option<HardSoftDecimalScore>) {
        self.score = score;
    }
}
