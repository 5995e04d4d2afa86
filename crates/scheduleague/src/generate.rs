//! One-call schedule generation that hides the calendar and solver wiring.

use std::path::Path;
use std::sync::OnceLock;

use tokio::sync::mpsc::UnboundedSender;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use scheduleague_config::SolverConfig;
use scheduleague_core::{Result, Schedule, ScheduleagueError};
use scheduleague_solver::{solve_seasons, PartitionProgress, SeasonResult, SeasonSolver};

use crate::calendar::{add_initial_state, build_matches, build_matchups};
use crate::season::Season;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to INFO
/// for scheduleague crates.
///
/// Only the first call has effect, and none if the process already has a
/// global subscriber.
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("scheduleague=info,scheduleague_solver=info"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}

/// Validates `season` and builds the schedule the season solver starts from.
pub fn prepare(season: Season) -> Result<Schedule> {
    season.validate()?;
    let matches = build_matches(&season);
    let matches = add_initial_state(
        matches,
        &season.initial_state,
        &season.teams,
        &season.venues,
    )?;
    let matchups = build_matchups(&season.teams);
    info!(
        event = "season_prepared",
        matches = matches.len(),
        locked = matches.iter().filter(|m| m.is_locked()).count(),
        matchups = matchups.len(),
    );
    Ok(Schedule::new(
        season.constraints,
        season.teams,
        matchups.into_vec(),
        matches,
    ))
}

/// Schedules a season.
///
/// Only structural problems with `season` fail. The returned matches are
/// all assigned and locked, in (week, datetime, venue) order; check
/// `score` for feasibility.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use scheduleague::{generate, DayTimeSlot, Season, SolverConfig, Team, Venue};
///
/// let season = Season::new(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(), 3)
///     .with_slot(DayTimeSlot::new(Weekday::Mon, [NaiveTime::from_hms_opt(19, 0, 0).unwrap()]))
///     .with_venues(vec![Venue::new(1, "Main Hall")])
///     .with_teams(vec![Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")]);
///
/// let config = SolverConfig::new().with_random_seed(3).with_step_limit(200);
/// let result = generate(season, &config).unwrap();
/// assert_eq!(result.matches().len(), 3);
/// assert!(result.score.is_feasible());
/// ```
pub fn generate(season: Season, config: &SolverConfig) -> Result<SeasonResult> {
    let schedule = prepare(season)?;
    Ok(SeasonSolver::new(config.clone()).solve(schedule))
}

/// Like [`generate`], reporting each finished partition on `progress`.
pub fn generate_with_progress(
    season: Season,
    config: &SolverConfig,
    progress: UnboundedSender<PartitionProgress>,
) -> Result<SeasonResult> {
    let schedule = prepare(season)?;
    Ok(SeasonSolver::new(config.clone())
        .with_progress(progress)
        .solve(schedule))
}

/// Like [`generate`] with the solver configuration read from a TOML file.
pub fn generate_with_config_file(season: Season, path: impl AsRef<Path>) -> Result<SeasonResult> {
    let config = SolverConfig::load(path).map_err(|e| ScheduleagueError::Config(e.to_string()))?;
    generate(season, &config)
}

/// Schedules independent seasons in parallel.
///
/// Every season is validated before any solving starts; results are in
/// input order.
pub fn generate_seasons(seasons: Vec<Season>, config: &SolverConfig) -> Result<Vec<SeasonResult>> {
    let schedules = seasons
        .into_iter()
        .map(prepare)
        .collect::<Result<Vec<_>>>()?;
    Ok(solve_seasons(config, schedules))
}
