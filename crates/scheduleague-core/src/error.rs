//! Error types for scheduleague

use chrono::Weekday;
use thiserror::Error;

/// Main error type for scheduleague operations.
///
/// Only structurally invalid input fails. An infeasible schedule, an
/// exhausted budget or a cancelled solve is reported through the solve
/// result, never through this type.
#[derive(Debug, Error)]
pub enum ScheduleagueError {
    /// Season input is structurally invalid
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Solver configuration could not be loaded
    #[error("Solver config error: {0}")]
    Config(String),
}

/// Season input problems detected before any solving starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no teams supplied")]
    EmptyTeamPool,

    #[error("at least two distinct teams are needed to form a matchup")]
    TooFewTeams,

    #[error("no venues supplied")]
    EmptyVenuePool,

    #[error("season must span at least one week")]
    ZeroWeeks,

    #[error("no day/time slots supplied")]
    EmptyDayTimeSlots,

    #[error("day/time slot for {0} has no start times")]
    EmptyStartTimes(Weekday),

    #[error("team id {0} appears more than once")]
    DuplicateTeamId(u32),

    #[error("venue id {0} appears more than once")]
    DuplicateVenueId(u32),

    #[error("initial state references unknown team id {0}")]
    UnknownTeam(u32),

    #[error("initial state references unknown venue id {0}")]
    UnknownVenue(u32),
}

/// Result type alias for scheduleague operations
pub type Result<T> = std::result::Result<T, ScheduleagueError>;
