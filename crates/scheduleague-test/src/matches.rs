//! Match and datetime fixtures.

use chrono::{NaiveDate, NaiveDateTime};
use scheduleague_core::{Match, Matchup, TeamId, VenueId};

/// Builds a datetime, panicking on impossible fixture values.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("fixture datetime must be valid")
}

/// Shorthand for an oriented matchup between two team ids.
pub fn matchup(home: u32, away: u32) -> Matchup {
    Matchup::new(TeamId(home), TeamId(away))
}

/// An unassigned, unlocked match.
pub fn open(id: usize, week: u32, datetime: NaiveDateTime, venue: u32) -> Match {
    Match::new(id, week, datetime, VenueId(venue))
}

/// An unlocked match with `home` against `away` already assigned.
pub fn assigned(
    id: usize,
    week: u32,
    datetime: NaiveDateTime,
    venue: u32,
    home: u32,
    away: u32,
) -> Match {
    open(id, week, datetime, venue).with_matchup(matchup(home, away))
}

/// A locked match with `home` against `away`.
pub fn locked(
    id: usize,
    week: u32,
    datetime: NaiveDateTime,
    venue: u32,
    home: u32,
    away: u32,
) -> Match {
    Match::locked(id, week, datetime, VenueId(venue), matchup(home, away))
}

/// One open match per week on consecutive Mondays starting 2024-09-02
/// at 19:00, all at venue 1. Ids start at `first_id`.
pub fn weekly(first_id: usize, first_week: u32, count: usize) -> Vec<Match> {
    let start = at(2024, 9, 2, 19, 0);
    (0..count)
        .map(|i| {
            let week = first_week + i as u32;
            let datetime = start + chrono::Duration::weeks(i64::from(week - 1));
            open(first_id + i, week, datetime, 1)
        })
        .collect()
}
