//! The planning entity: one match slot

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::{Matchup, TeamId, VenueId};

/// A fixed (datetime, venue) slot with an assignable matchup.
///
/// The datetime, venue, id and week never change once a match is created.
/// Only the matchup is mutated, and only while the match is not locked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    id: usize,
    week: u32,
    datetime: NaiveDateTime,
    venue: VenueId,
    matchup: Option<Matchup>,
    #[cfg_attr(feature = "serde", serde(default))]
    locked: bool,
}

/// Total order of matches: week, then datetime, then venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchKey {
    pub week: u32,
    pub datetime: NaiveDateTime,
    pub venue: VenueId,
}

impl Match {
    /// Creates an unassigned, unlocked match.
    pub fn new(id: usize, week: u32, datetime: NaiveDateTime, venue: VenueId) -> Self {
        Self {
            id,
            week,
            datetime,
            venue,
            matchup: None,
            locked: false,
        }
    }

    /// Creates a match whose matchup is fixed for every subsequent solve.
    pub fn locked(
        id: usize,
        week: u32,
        datetime: NaiveDateTime,
        venue: VenueId,
        matchup: Matchup,
    ) -> Self {
        Self {
            id,
            week,
            datetime,
            venue,
            matchup: Some(matchup),
            locked: true,
        }
    }

    pub fn with_matchup(mut self, matchup: Matchup) -> Self {
        self.matchup = Some(matchup);
        self
    }

    /// Marks this match as locked. An unassigned match stays unassigned.
    pub fn lock(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn weekday(&self) -> Weekday {
        self.datetime.weekday()
    }

    pub fn time(&self) -> NaiveTime {
        self.datetime.time()
    }

    pub fn venue(&self) -> VenueId {
        self.venue
    }

    pub fn matchup(&self) -> Option<Matchup> {
        self.matchup
    }

    pub fn set_matchup(&mut self, matchup: Option<Matchup>) {
        self.matchup = matchup;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_assigned(&self) -> bool {
        self.matchup.is_some()
    }

    pub fn home(&self) -> Option<TeamId> {
        self.matchup.map(|m| m.home)
    }

    pub fn away(&self) -> Option<TeamId> {
        self.matchup.map(|m| m.away)
    }

    pub fn contains_team(&self, team: TeamId) -> bool {
        self.matchup.is_some_and(|m| m.contains(team))
    }

    pub fn opponent(&self, team: TeamId) -> Option<TeamId> {
        self.matchup.and_then(|m| m.opponent(team))
    }

    /// True when both matches are assigned and their matchups are team-equal.
    pub fn teams_equal(&self, other: &Match) -> bool {
        match (self.matchup, other.matchup) {
            (Some(a), Some(b)) => a.teams_equal(&b),
            _ => false,
        }
    }

    /// True when both matches are assigned and share at least one team.
    pub fn shares_team(&self, other: &Match) -> bool {
        match (self.matchup, other.matchup) {
            (Some(a), Some(b)) => a.teams().any(|t| b.contains(t)),
            _ => false,
        }
    }

    pub fn sort_key(&self) -> MatchKey {
        MatchKey {
            week: self.week,
            datetime: self.datetime,
            venue: self.venue,
        }
    }
}
