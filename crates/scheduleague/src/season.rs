//! Season input.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use scheduleague_core::{ConfigurationError, Constraints, Team, TeamId, Venue, VenueId};

/// A recurring weekly slot: every `day`, one match per start time and venue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DayTimeSlot {
    pub day: Weekday,
    pub start_times: Vec<NaiveTime>,
}

impl DayTimeSlot {
    pub fn new(day: Weekday, start_times: impl IntoIterator<Item = NaiveTime>) -> Self {
        Self {
            day,
            start_times: start_times.into_iter().collect(),
        }
    }
}

/// A match fixed by the caller before solving.
///
/// It replaces the calendar match at the same datetime and venue and is
/// never reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct InputMatch {
    pub datetime: NaiveDateTime,
    pub venue_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
}

impl InputMatch {
    pub fn new(datetime: NaiveDateTime, venue_id: u32, home_team_id: u32, away_team_id: u32) -> Self {
        Self {
            datetime,
            venue_id,
            home_team_id,
            away_team_id,
        }
    }
}

/// Everything a league organizer submits to have a season scheduled.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use scheduleague::{DayTimeSlot, Season, Team, Venue};
///
/// let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let seven = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
/// let season = Season::new(start, 3)
///     .with_slot(DayTimeSlot::new(Weekday::Mon, [seven]))
///     .with_venues(vec![Venue::new(1, "Main Hall")])
///     .with_teams(vec![Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")]);
/// assert!(season.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Season {
    pub weeks: u32,
    pub start_date: NaiveDate,
    pub day_time_slots: Vec<DayTimeSlot>,
    pub venues: Vec<Venue>,
    pub teams: Vec<Team>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Constraints,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_state: Vec<InputMatch>,
}

impl Season {
    pub fn new(start_date: NaiveDate, weeks: u32) -> Self {
        Self {
            weeks,
            start_date,
            day_time_slots: Vec::new(),
            venues: Vec::new(),
            teams: Vec::new(),
            constraints: Constraints::default(),
            initial_state: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: DayTimeSlot) -> Self {
        self.day_time_slots.push(slot);
        self
    }

    pub fn with_venues(mut self, venues: Vec<Venue>) -> Self {
        self.venues = venues;
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_initial_match(mut self, input: InputMatch) -> Self {
        self.initial_state.push(input);
        self
    }

    /// Checks the season for structural problems.
    ///
    /// Returns the first problem found: teams, then venues, then the
    /// calendar, then the initial state.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.teams.is_empty() {
            return Err(ConfigurationError::EmptyTeamPool);
        }
        let mut team_ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            if !team_ids.insert(team.id) {
                return Err(ConfigurationError::DuplicateTeamId(team.id.0));
            }
        }
        if team_ids.len() < 2 {
            return Err(ConfigurationError::TooFewTeams);
        }

        if self.venues.is_empty() {
            return Err(ConfigurationError::EmptyVenuePool);
        }
        let mut venue_ids = HashSet::with_capacity(self.venues.len());
        for venue in &self.venues {
            if !venue_ids.insert(venue.id) {
                return Err(ConfigurationError::DuplicateVenueId(venue.id.0));
            }
        }

        if self.weeks == 0 {
            return Err(ConfigurationError::ZeroWeeks);
        }
        if self.day_time_slots.is_empty() {
            return Err(ConfigurationError::EmptyDayTimeSlots);
        }
        if let Some(slot) = self.day_time_slots.iter().find(|s| s.start_times.is_empty()) {
            return Err(ConfigurationError::EmptyStartTimes(slot.day));
        }

        for input in &self.initial_state {
            for id in [input.home_team_id, input.away_team_id] {
                if !team_ids.contains(&TeamId(id)) {
                    return Err(ConfigurationError::UnknownTeam(id));
                }
            }
            if !venue_ids.contains(&VenueId(input.venue_id)) {
                return Err(ConfigurationError::UnknownVenue(input.venue_id));
            }
        }
        Ok(())
    }
}
