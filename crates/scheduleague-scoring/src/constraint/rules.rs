//! Full-recalculation rule functions.
//!
//! Each function scores one rule over a match list. Unassigned matches
//! contribute nothing. Penalties are returned as negative scores.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use scheduleague_core::{
    HardSoftDecimalScore, Match, Matchup, Schedule, TeamId, TeamPair, VenueId,
};

use super::load_balance::LoadBalance;
use super::{
    count_penalty, fractional_penalty, separation_factor, ConstraintWeights, LeagueConstraint,
};

/// Score and number of violations found for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub score: HardSoftDecimalScore,
    pub match_count: usize,
}

impl RuleOutcome {
    fn new(score: HardSoftDecimalScore, match_count: usize) -> Self {
        Self { score, match_count }
    }
}

/// Key a team's matches are grouped by for the balance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceKey {
    Day(Weekday),
    DayTime(Weekday, NaiveTime),
    Venue(VenueId),
    Opponent(TeamId),
}

/// Balance key of `m` from `team`'s point of view, for a balance rule.
///
/// `matchup` is the assignment `m` is scored with.
pub(crate) fn balance_key(
    constraint: LeagueConstraint,
    m: &Match,
    matchup: Matchup,
    team: TeamId,
) -> Option<BalanceKey> {
    match constraint {
        LeagueConstraint::DayBalance => Some(BalanceKey::Day(m.weekday())),
        LeagueConstraint::DayTimeBalance => Some(BalanceKey::DayTime(m.weekday(), m.time())),
        LeagueConstraint::VenueBalance => Some(BalanceKey::Venue(m.venue())),
        LeagueConstraint::OpponentBalance => matchup.opponent(team).map(BalanceKey::Opponent),
        _ => None,
    }
}

/// Days between two matches, truncated toward zero.
pub(crate) fn days_apart(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_days().abs()
}

pub fn self_play(matches: &[Match], weight: HardSoftDecimalScore) -> RuleOutcome {
    let count = matches
        .iter()
        .filter(|m| m.matchup().is_some_and(|mu| mu.is_self_play()))
        .count();
    RuleOutcome::new(count_penalty(weight, count as i64), count)
}

/// One violation per unordered pair of matches at the same datetime that
/// share a team.
pub fn datetime_conflict(matches: &[Match], weight: HardSoftDecimalScore) -> RuleOutcome {
    let mut by_datetime: HashMap<NaiveDateTime, Vec<&Match>> = HashMap::new();
    for m in matches.iter().filter(|m| m.is_assigned()) {
        by_datetime.entry(m.datetime()).or_default().push(m);
    }

    let mut count = 0usize;
    for bucket in by_datetime.values() {
        for (i, a) in bucket.iter().enumerate() {
            count += bucket[i + 1..].iter().filter(|b| a.shares_team(b)).count();
        }
    }
    RuleOutcome::new(count_penalty(weight, count as i64), count)
}

/// One violation per match a team plays beyond `limit` on a calendar day.
/// A limit of zero means unlimited.
pub fn max_matches_per_day(
    matches: &[Match],
    limit: u32,
    weight: HardSoftDecimalScore,
) -> RuleOutcome {
    if limit == 0 {
        return RuleOutcome::default();
    }
    let mut per_day: HashMap<(TeamId, NaiveDate), u32> = HashMap::new();
    for m in matches {
        if let Some(matchup) = m.matchup() {
            for team in matchup.teams() {
                *per_day.entry((team, m.date())).or_insert(0) += 1;
            }
        }
    }

    let (units, over) = per_day
        .values()
        .filter(|count| **count > limit)
        .fold((0i64, 0usize), |(units, over), count| {
            (units + i64::from(count - limit), over + 1)
        });
    RuleOutcome::new(count_penalty(weight, units), over)
}

fn group_by_pair(matches: &[Match]) -> HashMap<TeamPair, Vec<&Match>> {
    let mut groups: HashMap<TeamPair, Vec<&Match>> = HashMap::new();
    for m in matches {
        if let Some(matchup) = m.matchup() {
            groups.entry(matchup.team_pair()).or_default().push(m);
        }
    }
    groups
}

/// One violation per unordered pair of team-equal matches.
pub fn matchup_repeat(matches: &[Match], weight: HardSoftDecimalScore) -> RuleOutcome {
    let pairs: usize = group_by_pair(matches)
        .values()
        .map(|group| group.len() * group.len().saturating_sub(1) / 2)
        .sum();
    RuleOutcome::new(count_penalty(weight, pairs as i64), pairs)
}

/// Penalty per pair of team-equal matches, shrinking as they move apart.
pub fn matchup_separation(matches: &[Match], weight: HardSoftDecimalScore) -> RuleOutcome {
    let mut score = HardSoftDecimalScore::ZERO;
    let mut count = 0usize;
    for group in group_by_pair(matches).values() {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                let penalty = pair_separation_penalty(weight, a.datetime(), b.datetime());
                if penalty != HardSoftDecimalScore::ZERO {
                    score += penalty;
                    count += 1;
                }
            }
        }
    }
    RuleOutcome::new(score, count)
}

pub(crate) fn pair_separation_penalty(
    weight: HardSoftDecimalScore,
    a: NaiveDateTime,
    b: NaiveDateTime,
) -> HardSoftDecimalScore {
    fractional_penalty(weight, separation_factor(days_apart(a, b)))
}

/// Per-team unfairness of the match distribution over the rule's keys.
///
/// `constraint` must be one of the balance rules.
pub fn balance(
    constraint: LeagueConstraint,
    matches: &[Match],
    weight: HardSoftDecimalScore,
) -> RuleOutcome {
    let mut per_team: HashMap<TeamId, LoadBalance<BalanceKey>> = HashMap::new();
    for m in matches {
        let Some(matchup) = m.matchup() else { continue };
        for team in matchup.teams() {
            if let Some(key) = balance_key(constraint, m, matchup, team) {
                per_team.entry(team).or_default().add(key);
            }
        }
    }

    let mut score = HardSoftDecimalScore::ZERO;
    let mut count = 0usize;
    for loads in per_team.values() {
        let penalty = fractional_penalty(weight, loads.unfairness());
        if penalty != HardSoftDecimalScore::ZERO {
            score += penalty;
            count += 1;
        }
    }
    RuleOutcome::new(score, count)
}

/// Scores one rule of `schedule` with resolved weights.
pub fn evaluate(
    constraint: LeagueConstraint,
    schedule: &Schedule,
    weights: &ConstraintWeights,
) -> RuleOutcome {
    if !weights.is_active(constraint) {
        return RuleOutcome::default();
    }
    let weight = weights.get(constraint);
    let matches = schedule.matches.as_slice();
    match constraint {
        LeagueConstraint::SelfPlay => self_play(matches, weight),
        LeagueConstraint::DatetimeConflict => datetime_conflict(matches, weight),
        LeagueConstraint::MaxMatchesPerDay => {
            max_matches_per_day(matches, schedule.constraints.max_matches_per_day, weight)
        }
        LeagueConstraint::MatchupRepeat => matchup_repeat(matches, weight),
        LeagueConstraint::MatchupSeparation => matchup_separation(matches, weight),
        LeagueConstraint::OpponentBalance
        | LeagueConstraint::DayBalance
        | LeagueConstraint::DayTimeBalance
        | LeagueConstraint::VenueBalance => balance(constraint, matches, weight),
    }
}

/// Full score of `schedule` with the weights its constraints imply.
pub fn calculate_score(schedule: &Schedule) -> HardSoftDecimalScore {
    calculate_score_with(schedule, &ConstraintWeights::for_constraints(&schedule.constraints))
}

pub fn calculate_score_with(schedule: &Schedule, weights: &ConstraintWeights) -> HardSoftDecimalScore {
    LeagueConstraint::ALL
        .into_iter()
        .map(|constraint| evaluate(constraint, schedule, weights).score)
        .sum()
}
