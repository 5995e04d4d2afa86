//! Slot calendar and initial-state merge.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDateTime};

use scheduleague_core::{
    ConfigurationError, Match, Matchup, MatchupPool, Team, TeamId, Venue, VenueId,
};

use crate::season::{InputMatch, Season};

/// One empty match per slot of the season.
///
/// Days are walked from `start_date` for `weeks` weeks. On each day every
/// slot for that weekday emits one match per start time and venue, in the
/// order given. Ids run from 0 in that order; a match's week is
/// `days_since_start / 7 + 1`.
pub fn build_matches(season: &Season) -> Vec<Match> {
    let mut matches = Vec::new();
    for offset in 0..i64::from(season.weeks) * 7 {
        let date = season.start_date + Duration::days(offset);
        let week = (offset / 7) as u32 + 1;
        for slot in season.day_time_slots.iter().filter(|s| s.day == date.weekday()) {
            for time in &slot.start_times {
                let datetime = date.and_time(*time);
                for venue in &season.venues {
                    matches.push(Match::new(matches.len(), week, datetime, venue.id));
                }
            }
        }
    }
    matches
}

/// Replaces calendar matches with the caller's fixed ones, keyed by
/// (datetime, venue).
///
/// A replaced match keeps its id and week, takes the supplied teams and is
/// locked. Inputs whose key is not in the calendar are ignored; when two
/// inputs share a key the later one wins. Team and venue ids must be known.
/// The result is in (week, datetime, venue) order.
pub fn add_initial_state(
    matches: Vec<Match>,
    initial_state: &[InputMatch],
    teams: &[Team],
    venues: &[Venue],
) -> Result<Vec<Match>, ConfigurationError> {
    let mut fixed: HashMap<(NaiveDateTime, VenueId), Matchup> = HashMap::new();
    for input in initial_state {
        let home = known_team(teams, input.home_team_id)?;
        let away = known_team(teams, input.away_team_id)?;
        if !venues.iter().any(|v| v.id == VenueId(input.venue_id)) {
            return Err(ConfigurationError::UnknownVenue(input.venue_id));
        }
        fixed.insert(
            (input.datetime, VenueId(input.venue_id)),
            Matchup::new(home, away),
        );
    }

    let mut merged: Vec<Match> = matches
        .into_iter()
        .map(|m| match fixed.get(&(m.datetime(), m.venue())) {
            Some(matchup) => Match::locked(m.id(), m.week(), m.datetime(), m.venue(), *matchup),
            None => m,
        })
        .collect();
    merged.sort_by_key(Match::sort_key);
    Ok(merged)
}

fn known_team(teams: &[Team], id: u32) -> Result<TeamId, ConfigurationError> {
    teams
        .iter()
        .find(|t| t.id == TeamId(id))
        .map(|t| t.id)
        .ok_or(ConfigurationError::UnknownTeam(id))
}

/// The base round-robin pool: every pair `i < j` with `teams[i]` at home.
pub fn build_matchups(teams: &[Team]) -> MatchupPool {
    MatchupPool::round_robin(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::DayTimeSlot;
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use scheduleague_test::{at, teams, venues};

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn season() -> Season {
        // 2024-09-04 is a Wednesday
        Season::new(NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(), 2)
            .with_slot(DayTimeSlot::new(Weekday::Mon, [time(18), time(20)]))
            .with_slot(DayTimeSlot::new(Weekday::Wed, [time(19)]))
            .with_venues(venues(2))
            .with_teams(teams(4))
    }

    #[test]
    fn test_build_matches_walks_days_times_venues() {
        let matches = build_matches(&season());
        // per week: Wed 1 time + Mon 2 times, each at 2 venues
        assert_eq!(matches.len(), 12);
        assert!(matches.iter().enumerate().all(|(i, m)| m.id() == i));

        let first = &matches[0];
        assert_eq!(first.datetime(), at(2024, 9, 4, 19, 0));
        assert_eq!(first.venue(), VenueId(1));
        assert_eq!(first.week(), 1);
        assert_eq!(matches[1].venue(), VenueId(2));

        // Monday 2024-09-09 is day five of week one
        assert_eq!(matches[2].datetime(), at(2024, 9, 9, 18, 0));
        assert_eq!(matches[2].week(), 1);
        assert_eq!(matches[4].datetime(), at(2024, 9, 9, 20, 0));

        assert_eq!(matches[6].datetime(), at(2024, 9, 11, 19, 0));
        assert_eq!(matches[6].week(), 2);
        assert!(matches.iter().all(|m| !m.is_assigned() && !m.is_locked()));
    }

    #[test]
    fn test_initial_state_replaces_slot() {
        let season = season().with_initial_match(InputMatch::new(at(2024, 9, 9, 20, 0), 2, 3, 1));
        let merged = add_initial_state(
            build_matches(&season),
            &season.initial_state,
            &season.teams,
            &season.venues,
        )
        .unwrap();

        let fixed: Vec<&Match> = merged.iter().filter(|m| m.is_locked()).collect();
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed[0].id(), 5);
        assert_eq!(fixed[0].week(), 1);
        assert_eq!(fixed[0].home(), Some(TeamId(3)));
        assert_eq!(fixed[0].away(), Some(TeamId(1)));
        assert!(merged.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()));
    }

    #[test]
    fn test_initial_state_outside_calendar_is_ignored() {
        let season = season().with_initial_match(InputMatch::new(at(2024, 9, 10, 19, 0), 1, 1, 2));
        let merged = add_initial_state(
            build_matches(&season),
            &season.initial_state,
            &season.teams,
            &season.venues,
        )
        .unwrap();
        assert_eq!(merged.len(), 12);
        assert!(merged.iter().all(|m| !m.is_locked()));
    }

    #[test]
    fn test_later_input_wins() {
        let slot = at(2024, 9, 4, 19, 0);
        let season = season()
            .with_initial_match(InputMatch::new(slot, 1, 1, 2))
            .with_initial_match(InputMatch::new(slot, 1, 4, 3));
        let merged = add_initial_state(
            build_matches(&season),
            &season.initial_state,
            &season.teams,
            &season.venues,
        )
        .unwrap();
        assert_eq!(merged[0].home(), Some(TeamId(4)));
        assert_eq!(merged[0].away(), Some(TeamId(3)));
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let season = season();
        let input = [InputMatch::new(at(2024, 9, 4, 19, 0), 1, 1, 7)];
        assert_eq!(
            add_initial_state(build_matches(&season), &input, &season.teams, &season.venues),
            Err(ConfigurationError::UnknownTeam(7))
        );

        let input = [InputMatch::new(at(2024, 9, 4, 19, 0), 3, 1, 2)];
        assert_eq!(
            add_initial_state(build_matches(&season), &input, &season.teams, &season.venues),
            Err(ConfigurationError::UnknownVenue(3))
        );
    }

    #[test]
    fn test_build_matchups_orders_pairs() {
        let pool = build_matchups(&teams(3)).into_vec();
        let pairs: Vec<(u32, u32)> = pool.iter().map(|m| (m.home.0, m.away.0)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
    }
}
