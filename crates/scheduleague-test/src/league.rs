//! Team, venue and schedule fixtures.
//!
//! # Example
//!
//! ```
//! use scheduleague_test::league::round_robin_schedule;
//!
//! let schedule = round_robin_schedule(4);
//! assert_eq!(schedule.matchups.len(), 6);
//! assert_eq!(schedule.matches.len(), 6);
//! assert!(schedule.matches.iter().all(|m| !m.is_assigned()));
//! ```

use scheduleague_core::{Constraints, MatchupPool, Schedule, Team, Venue};

use crate::matches::weekly;

/// Teams with ids `1..=n` named `Team1`, `Team2`, ...
pub fn teams(n: u32) -> Vec<Team> {
    (1..=n).map(|i| Team::new(i, format!("Team{i}"))).collect()
}

/// Venues with ids `1..=n` named `Venue1`, `Venue2`, ...
pub fn venues(n: u32) -> Vec<Venue> {
    (1..=n).map(|i| Venue::new(i, format!("Venue{i}"))).collect()
}

/// A single round-robin pass for `n` teams: one open weekly match per
/// pool entry, default constraints.
pub fn round_robin_schedule(n: u32) -> Schedule {
    schedule_with(n, Constraints::default())
}

/// Same as [`round_robin_schedule`] with explicit constraints.
pub fn schedule_with(n: u32, constraints: Constraints) -> Schedule {
    let teams = teams(n);
    let pool = MatchupPool::round_robin(&teams);
    let matches = weekly(0, 1, pool.len());
    Schedule::new(constraints, teams, pool.into_vec(), matches)
}
