//! League domain model
//!
//! - [`Team`], [`Venue`]: immutable problem facts
//! - [`Matchup`]: an oriented (home, away) pairing, the planning value
//! - [`Match`]: a fixed slot whose matchup the solver assigns, the planning entity
//! - [`Schedule`]: the working solution for one solve
//! - [`MatchupPool`]: the allowed matchup values for one round-robin pass

mod constraints;
mod matches;
mod matchup;
mod pool;
mod schedule;
mod team;

#[cfg(test)]
mod tests;

pub use constraints::{BalanceDimension, BalanceOrder, Constraints};
pub use matches::{Match, MatchKey};
pub use matchup::{Matchup, TeamPair};
pub use pool::MatchupPool;
pub use schedule::Schedule;
pub use team::{Team, TeamId, Venue, VenueId};
