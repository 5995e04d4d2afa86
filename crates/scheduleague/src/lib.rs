//! scheduleague - a league match scheduler in Rust
//!
//! Describe the season (weeks, weekly slots, venues, teams, league rules and
//! any fixed matches) and call [`generate`].
//!
//! # Example
//!
//! ```rust
//! use scheduleague::prelude::*;
//!
//! let score = HardSoftDecimalScore::of(0, -100);
//! assert!(score.is_feasible());
//! assert_eq!(score.to_string(), "0hard/-100soft");
//! ```

mod calendar;
mod generate;
mod season;

pub use calendar::{add_initial_state, build_matches, build_matchups};
pub use generate::{
    generate, generate_seasons, generate_with_config_file, generate_with_progress, init_tracing,
    prepare,
};
pub use season::{DayTimeSlot, InputMatch, Season};

// Domain and score types
pub use scheduleague_core::{
    BalanceDimension, BalanceOrder, ConfigurationError, Constraints, HardSoftDecimalScore, Match,
    Matchup, MatchupPool, Result, Schedule, ScheduleagueError, Team, TeamId, Venue, VenueId,
};

// Score inspection
pub use scheduleague_scoring::{
    ConstraintAnalysis, ConstraintWeightOverrides, LeagueConstraint, ScoreExplanation,
};

pub use scheduleague_config::SolverConfig;

pub use scheduleague_solver::{PartitionProgress, SeasonResult, SeasonSolver, SolveResult, Solver};

pub mod prelude {
    pub use super::{generate, DayTimeSlot, InputMatch, Season};
    pub use super::{
        BalanceDimension, BalanceOrder, Constraints, HardSoftDecimalScore, Team, Venue,
    };
    pub use super::{SeasonResult, SolverConfig};
}
