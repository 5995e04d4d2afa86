//! Round-robin league demo
//!
//! Six teams play a double round robin over ten Monday evenings, three
//! matches a night at three venues, nobody playing twice on the same day.
//! One match is fixed up front; the rest are scheduled by the solver.
//!
//! Solver settings are read from `solver.toml` in the working directory if
//! present. Set `RUST_LOG=scheduleague_solver=debug` to watch the phases.

use std::error::Error;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::info;

use scheduleague::prelude::*;
use scheduleague::{init_tracing, ScoreExplanation};

fn season() -> Result<Season, chrono::ParseError> {
    let start: NaiveDate = "2025-01-06".parse()?;
    let evening: NaiveTime = "19:30:00".parse()?;

    let teams = ["Otters", "Herons", "Foxes", "Badgers", "Owls", "Lynxes"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Team::new(id, *name))
        .collect();
    let venues = vec![
        Venue::new(1, "North Field"),
        Venue::new(2, "Riverside"),
        Venue::new(3, "Old Gym"),
    ];

    Ok(Season::new(start, 10)
        .with_slot(DayTimeSlot::new(Weekday::Mon, [evening]))
        .with_venues(venues)
        .with_teams(teams)
        .with_constraints(Constraints::default().with_max_matches_per_day(1))
        .with_initial_match(InputMatch::new(start.and_time(evening), 2, 4, 1)))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let season = season()?;
    let fixed = season.initial_state.clone();
    let team_names: Vec<(u32, String)> =
        season.teams.iter().map(|t| (t.id.0, t.name.clone())).collect();
    let venue_names: Vec<(u32, String)> =
        season.venues.iter().map(|v| (v.id.0, v.name.clone())).collect();
    let name = |names: &[(u32, String)], id: u32| {
        names
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, n)| n.clone())
            .unwrap_or_else(|| format!("#{id}"))
    };

    let config = SolverConfig::load("solver.toml")
        .unwrap_or_else(|_| SolverConfig::new().with_termination_seconds(2));
    let result = generate(season, &config)?;
    info!(
        event = "demo_done",
        score = %result.score,
        partitions = result.partition_count,
    );

    println!("\nSchedule (score: {})", result.score);
    let mut week = 0;
    for m in result.matches() {
        if m.week() != week {
            week = m.week();
            println!("\nWeek {week} - {} {}", m.date().weekday(), m.date());
        }
        let (home, away) = match m.matchup() {
            Some(matchup) => (
                name(&team_names, matchup.home.0),
                name(&team_names, matchup.away.0),
            ),
            None => ("?".to_string(), "?".to_string()),
        };
        let is_fixed = fixed
            .iter()
            .any(|f| f.datetime == m.datetime() && f.venue_id == m.venue().0);
        let note = if is_fixed { "  (fixed)" } else { "" };
        println!(
            "  {}  {:<12} {:>8} vs {:<8}{note}",
            m.time().format("%H:%M"),
            name(&venue_names, m.venue().0),
            home,
            away,
        );
    }

    let explanation = ScoreExplanation::of(&result.schedule);
    println!("\nScore breakdown:");
    for analysis in explanation.non_zero_constraints() {
        println!(
            "  {:<24} {:>20}  ({} hits)",
            analysis.name(),
            analysis.score.to_string(),
            analysis.match_count,
        );
    }
    Ok(())
}
