//! Matchup value pools

use super::{Matchup, Team};

/// The matchup values available to one round-robin pass.
///
/// A round-robin pool holds every unordered pair of teams exactly once, so
/// its size is also the size of one season partition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchupPool {
    matchups: Vec<Matchup>,
}

impl MatchupPool {
    pub fn new(matchups: Vec<Matchup>) -> Self {
        Self { matchups }
    }

    /// Every pair `i < j` of `teams`, with `teams[i]` at home.
    ///
    /// ```
    /// use scheduleague_core::{MatchupPool, Team};
    ///
    /// let teams = [Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")];
    /// let pool = MatchupPool::round_robin(&teams);
    /// assert_eq!(pool.len(), 3);
    /// assert!(pool.iter().all(|m| m.home < m.away));
    /// ```
    pub fn round_robin(teams: &[Team]) -> Self {
        let mut matchups = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
        for (i, home) in teams.iter().enumerate() {
            for away in &teams[i + 1..] {
                matchups.push(Matchup::new(home.id, away.id));
            }
        }
        Self { matchups }
    }

    /// The same pairings with home and away swapped.
    pub fn reversed(&self) -> Self {
        Self {
            matchups: self.matchups.iter().map(|m| m.reverse()).collect(),
        }
    }

    /// Pool for the given partition: even partitions use this orientation,
    /// odd partitions the reversed one.
    pub fn for_partition(&self, index: usize) -> Self {
        if index % 2 == 0 {
            self.clone()
        } else {
            self.reversed()
        }
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matchup> {
        self.matchups.iter()
    }

    pub fn as_slice(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn into_vec(self) -> Vec<Matchup> {
        self.matchups
    }
}

impl From<Vec<Matchup>> for MatchupPool {
    fn from(matchups: Vec<Matchup>) -> Self {
        Self::new(matchups)
    }
}

impl<'a> IntoIterator for &'a MatchupPool {
    type Item = &'a Matchup;
    type IntoIter = std::slice::Iter<'a, Matchup>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.iter()
    }
}
