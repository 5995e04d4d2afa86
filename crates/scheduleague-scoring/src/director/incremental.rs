//! Incremental score director.
//!
//! Keeps one index per rule and retracts or inserts only the contribution of
//! the match being changed, so a single-match change costs time proportional
//! to the matches sharing its datetime, team pair or teams, not to the
//! schedule.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use smallvec::SmallVec;

use scheduleague_core::{HardSoftDecimalScore, Matchup, Schedule, TeamId, TeamPair};

use super::traits::ScoreDirector;
use crate::constraint::load_balance::LoadBalance;
use crate::constraint::rules::{balance_key, pair_separation_penalty, BalanceKey};
use crate::constraint::{count_penalty, fractional_penalty, ConstraintWeights, LeagueConstraint};

type Bucket = SmallVec<[usize; 4]>;

const BALANCE_RULES: [LeagueConstraint; 4] = [
    LeagueConstraint::OpponentBalance,
    LeagueConstraint::DayBalance,
    LeagueConstraint::DayTimeBalance,
    LeagueConstraint::VenueBalance,
];

#[derive(Debug, Clone, Default)]
struct TeamLoad {
    loads: LoadBalance<BalanceKey>,
    penalty: HardSoftDecimalScore,
}

#[derive(Debug, Clone)]
struct BalanceIndex {
    constraint: LeagueConstraint,
    weight: HardSoftDecimalScore,
    teams: HashMap<TeamId, TeamLoad>,
    total: HardSoftDecimalScore,
}

impl BalanceIndex {
    fn new(constraint: LeagueConstraint, weight: HardSoftDecimalScore) -> Self {
        Self {
            constraint,
            weight,
            teams: HashMap::new(),
            total: HardSoftDecimalScore::ZERO,
        }
    }

    fn update(&mut self, team: TeamId, key: BalanceKey, insert: bool) {
        let entry = self.teams.entry(team).or_default();
        self.total -= entry.penalty;
        if insert {
            entry.loads.add(key);
        } else {
            entry.loads.remove(&key);
        }
        entry.penalty = fractional_penalty(self.weight, entry.loads.unfairness());
        self.total += entry.penalty;
        if entry.loads.is_empty() {
            self.teams.remove(&team);
        }
    }
}

/// A score director that maintains every rule incrementally.
///
/// Its score always equals [`rules::calculate_score_with`] on the same
/// schedule and weights, which the director tests check move by move.
///
/// [`rules::calculate_score_with`]: crate::constraint::rules::calculate_score_with
#[derive(Debug, Clone)]
pub struct IncrementalScoreDirector {
    working_solution: Schedule,
    weights: ConstraintWeights,
    max_per_day: u32,
    // Matchup each match is currently counted with; None when retracted.
    inserted: Vec<Option<Matchup>>,
    self_play: i64,
    by_datetime: HashMap<NaiveDateTime, Bucket>,
    conflicts: i64,
    per_day: HashMap<(TeamId, NaiveDate), u32>,
    day_excess: i64,
    by_pair: HashMap<TeamPair, Bucket>,
    repeats: i64,
    separation: HardSoftDecimalScore,
    balances: Vec<BalanceIndex>,
}

fn shares_team(a: Matchup, b: Matchup) -> bool {
    a.teams().any(|t| b.contains(t))
}

impl IncrementalScoreDirector {
    /// Creates a director using the weights implied by the schedule's constraints.
    pub fn new(solution: Schedule) -> Self {
        let weights = ConstraintWeights::for_constraints(&solution.constraints);
        Self::with_weights(solution, weights)
    }

    pub fn with_weights(solution: Schedule, weights: ConstraintWeights) -> Self {
        let mut director = Self {
            max_per_day: solution.constraints.max_matches_per_day,
            inserted: Vec::new(),
            working_solution: solution,
            weights,
            self_play: 0,
            by_datetime: HashMap::new(),
            conflicts: 0,
            per_day: HashMap::new(),
            day_excess: 0,
            by_pair: HashMap::new(),
            repeats: 0,
            separation: HardSoftDecimalScore::ZERO,
            balances: Vec::new(),
        };
        director.rebuild();
        director
    }

    pub fn weights(&self) -> &ConstraintWeights {
        &self.weights
    }

    pub fn into_working_solution(self) -> Schedule {
        self.working_solution
    }

    fn rebuild(&mut self) {
        self.max_per_day = self.working_solution.constraints.max_matches_per_day;
        self.inserted = vec![None; self.working_solution.matches.len()];
        self.self_play = 0;
        self.by_datetime.clear();
        self.conflicts = 0;
        self.per_day.clear();
        self.day_excess = 0;
        self.by_pair.clear();
        self.repeats = 0;
        self.separation = HardSoftDecimalScore::ZERO;
        self.balances = BALANCE_RULES
            .into_iter()
            .filter(|c| self.weights.is_active(*c))
            .map(|c| BalanceIndex::new(c, self.weights.get(c)))
            .collect();

        for index in 0..self.working_solution.matches.len() {
            self.insert(index);
        }
    }

    fn insert(&mut self, index: usize) {
        if self.inserted[index].is_some() {
            return;
        }
        let m = &self.working_solution.matches[index];
        let Some(matchup) = m.matchup() else {
            return;
        };
        let datetime = m.datetime();
        self.inserted[index] = Some(matchup);

        if matchup.is_self_play() {
            self.self_play += 1;
        }

        if self.weights.is_active(LeagueConstraint::DatetimeConflict) {
            let bucket = self.by_datetime.entry(datetime).or_default();
            for &other in bucket.iter() {
                if self.inserted[other].is_some_and(|o| shares_team(o, matchup)) {
                    self.conflicts += 1;
                }
            }
            bucket.push(index);
        }

        if self.max_per_day > 0 {
            for team in matchup.teams() {
                let count = self.per_day.entry((team, datetime.date())).or_insert(0);
                *count += 1;
                if *count > self.max_per_day {
                    self.day_excess += 1;
                }
            }
        }

        let separation_weight = self.weights.get(LeagueConstraint::MatchupSeparation);
        let group = self.by_pair.entry(matchup.team_pair()).or_default();
        for &other in group.iter() {
            self.repeats += 1;
            if separation_weight != HardSoftDecimalScore::ZERO {
                let other_datetime = self.working_solution.matches[other].datetime();
                self.separation +=
                    pair_separation_penalty(separation_weight, datetime, other_datetime);
            }
        }
        group.push(index);

        self.update_balances(index, matchup, true);
    }

    fn retract(&mut self, index: usize) {
        let Some(matchup) = self.inserted[index].take() else {
            return;
        };
        let datetime = self.working_solution.matches[index].datetime();

        if matchup.is_self_play() {
            self.self_play -= 1;
        }

        if let Some(bucket) = self.by_datetime.get_mut(&datetime) {
            bucket.retain(|i| *i != index);
            for &other in bucket.iter() {
                if self.inserted[other].is_some_and(|o| shares_team(o, matchup)) {
                    self.conflicts -= 1;
                }
            }
            if bucket.is_empty() {
                self.by_datetime.remove(&datetime);
            }
        }

        if self.max_per_day > 0 {
            for team in matchup.teams() {
                let key = (team, datetime.date());
                if let Some(count) = self.per_day.get_mut(&key) {
                    if *count > self.max_per_day {
                        self.day_excess -= 1;
                    }
                    *count -= 1;
                    if *count == 0 {
                        self.per_day.remove(&key);
                    }
                }
            }
        }

        let separation_weight = self.weights.get(LeagueConstraint::MatchupSeparation);
        let pair = matchup.team_pair();
        if let Some(group) = self.by_pair.get_mut(&pair) {
            group.retain(|i| *i != index);
            for &other in group.iter() {
                self.repeats -= 1;
                if separation_weight != HardSoftDecimalScore::ZERO {
                    let other_datetime = self.working_solution.matches[other].datetime();
                    self.separation -=
                        pair_separation_penalty(separation_weight, datetime, other_datetime);
                }
            }
            if group.is_empty() {
                self.by_pair.remove(&pair);
            }
        }

        self.update_balances(index, matchup, false);
    }

    fn update_balances(&mut self, index: usize, matchup: Matchup, insert: bool) {
        let m = &self.working_solution.matches[index];
        for balance in &mut self.balances {
            for team in matchup.teams() {
                if let Some(key) = balance_key(balance.constraint, m, matchup, team) {
                    balance.update(team, key, insert);
                }
            }
        }
    }

    fn total_score(&self) -> HardSoftDecimalScore {
        let w = |c| self.weights.get(c);
        let mut score = count_penalty(w(LeagueConstraint::SelfPlay), self.self_play)
            + count_penalty(w(LeagueConstraint::DatetimeConflict), self.conflicts)
            + count_penalty(w(LeagueConstraint::MaxMatchesPerDay), self.day_excess)
            + count_penalty(w(LeagueConstraint::MatchupRepeat), self.repeats)
            + self.separation;
        for balance in &self.balances {
            score += balance.total;
        }
        score
    }
}

impl ScoreDirector for IncrementalScoreDirector {
    fn working_solution(&self) -> &Schedule {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut Schedule {
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> HardSoftDecimalScore {
        let score = self.total_score();
        self.working_solution.set_score(Some(score));
        score
    }

    fn before_match_changed(&mut self, index: usize) {
        self.retract(index);
    }

    fn after_match_changed(&mut self, index: usize) {
        self.insert(index);
    }

    fn is_incremental(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.rebuild();
    }
}
