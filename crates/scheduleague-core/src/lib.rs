//! scheduleague Core - core types for league schedule solving
//!
//! This crate provides the fundamental abstractions shared by every other
//! scheduleague crate:
//! - [`HardSoftDecimalScore`], the fixed-point two-level score
//! - The league domain model ([`Team`], [`Venue`], [`Matchup`], [`Match`], [`Schedule`])
//! - League constraint configuration ([`Constraints`], [`BalanceOrder`])
//! - The error taxonomy ([`ScheduleagueError`], [`ConfigurationError`])

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    BalanceDimension, BalanceOrder, Constraints, Match, MatchKey, Matchup, MatchupPool, Schedule,
    Team, TeamId, TeamPair, Venue, VenueId,
};
pub use error::{ConfigurationError, Result, ScheduleagueError};
pub use score::{HardSoftDecimalScore, ScoreParseError};
