//! Matchups: the values assigned to matches

use std::fmt;

use super::TeamId;

/// An oriented pairing of a home team against an away team.
///
/// Two matchups are *team-equal* when they involve the same two teams in
/// either orientation; see [`Matchup::teams_equal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub home: TeamId,
    pub away: TeamId,
}

impl Matchup {
    pub const fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    /// The same teams with home and away swapped.
    pub const fn reverse(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    pub fn is_self_play(&self) -> bool {
        self.home == self.away
    }

    pub fn contains(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// The team facing `team`, if `team` plays in this matchup.
    pub fn opponent(&self, team: TeamId) -> Option<TeamId> {
        if self.home == team {
            Some(self.away)
        } else if self.away == team {
            Some(self.home)
        } else {
            None
        }
    }

    /// True when both matchups involve the same two teams, ignoring orientation.
    pub fn teams_equal(&self, other: &Matchup) -> bool {
        self.team_pair() == other.team_pair()
    }

    /// Orientation-free key of this matchup.
    pub fn team_pair(&self) -> TeamPair {
        TeamPair::new(self.home, self.away)
    }

    /// Distinct teams of this matchup; a self-play matchup yields one team.
    pub fn teams(&self) -> impl Iterator<Item = TeamId> {
        let away = (!self.is_self_play()).then_some(self.away);
        std::iter::once(self.home).chain(away)
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home.0, self.away.0)
    }
}

/// Unordered pair of teams, stored with the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamPair {
    low: TeamId,
    high: TeamId,
}

impl TeamPair {
    pub fn new(a: TeamId, b: TeamId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> TeamId {
        self.low
    }

    pub fn high(&self) -> TeamId {
        self.high
    }
}
