//! Rule tests on hand-built match lists.

use rust_decimal::Decimal;
use scheduleague_core::{
    BalanceDimension, BalanceOrder, Constraints, HardSoftDecimalScore, Match, Schedule,
};
use scheduleague_test::matches::{assigned, at, open};
use scheduleague_test::teams;

use super::rules::{self, RuleOutcome};
use super::{fractional_penalty, separation_factor, ConstraintWeights, LeagueConstraint};

const ONE_HARD: HardSoftDecimalScore = HardSoftDecimalScore::ONE_HARD;

fn schedule(constraints: Constraints, matches: Vec<Match>) -> Schedule {
    Schedule::new(constraints, teams(4), Vec::new(), matches)
}

// ============================================================================
// Hard rules
// ============================================================================

#[test]
fn test_self_play_is_one_hard_per_match() {
    let matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 1),
        assigned(1, 1, at(2024, 9, 9, 9, 0), 1, 2, 3),
    ];
    let outcome = rules::self_play(&matches, ONE_HARD);
    assert_eq!(outcome, RuleOutcome { score: HardSoftDecimalScore::of_hard(-1), match_count: 1 });
}

#[test]
fn test_datetime_conflict_penalizes_each_colliding_pair_once() {
    let home_clash = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 9, 7, 0), 2, 1, 3),
        assigned(2, 1, at(2024, 9, 9, 9, 0), 1, 2, 3),
    ];
    assert_eq!(
        rules::datetime_conflict(&home_clash, ONE_HARD).score,
        HardSoftDecimalScore::of_hard(-1)
    );

    let away_clash = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 9, 7, 0), 2, 3, 1),
    ];
    assert_eq!(
        rules::datetime_conflict(&away_clash, ONE_HARD).score,
        HardSoftDecimalScore::of_hard(-1)
    );
}

#[test]
fn test_datetime_conflict_counts_every_pair_in_slot() {
    // three matches at one datetime, all involving team 1: three pairs
    let matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 9, 7, 0), 2, 3, 1),
        assigned(2, 1, at(2024, 9, 9, 7, 0), 3, 1, 4),
    ];
    let outcome = rules::datetime_conflict(&matches, ONE_HARD);
    assert_eq!(outcome.match_count, 3);
    assert_eq!(outcome.score, HardSoftDecimalScore::of_hard(-3));
}

#[test]
fn test_datetime_conflict_ignores_disjoint_and_open_matches() {
    let matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 9, 7, 0), 2, 3, 4),
        open(2, 1, at(2024, 9, 9, 7, 0), 3),
    ];
    assert_eq!(
        rules::datetime_conflict(&matches, ONE_HARD),
        RuleOutcome::default()
    );
}

#[test]
fn test_max_matches_per_day_counts_excess() {
    let matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 11, 9, 0), 1, 3, 1),
        assigned(2, 1, at(2024, 9, 11, 10, 0), 1, 2, 3),
    ];
    // unlimited
    assert_eq!(
        rules::max_matches_per_day(&matches, 0, ONE_HARD),
        RuleOutcome::default()
    );
    // team 3 plays twice on 2024-09-11
    assert_eq!(
        rules::max_matches_per_day(&matches, 1, ONE_HARD).score,
        HardSoftDecimalScore::of_hard(-1)
    );
    assert_eq!(
        rules::max_matches_per_day(&matches, 2, ONE_HARD),
        RuleOutcome::default()
    );
}

#[test]
fn test_max_matches_per_day_excess_grows_per_unit() {
    let day = |h| at(2024, 9, 11, h, 0);
    let matches = vec![
        assigned(0, 1, day(7), 1, 1, 2),
        assigned(1, 1, day(8), 1, 1, 3),
        assigned(2, 1, day(9), 1, 4, 1),
    ];
    let outcome = rules::max_matches_per_day(&matches, 1, ONE_HARD);
    assert_eq!(outcome.score, HardSoftDecimalScore::of_hard(-2));
    assert_eq!(outcome.match_count, 1);
}

// ============================================================================
// Soft rules
// ============================================================================

#[test]
fn test_matchup_repeat_ignores_orientation() {
    let weight = LeagueConstraint::MatchupRepeat.default_weight();
    let matches = vec![
        assigned(0, 1, at(2024, 9, 2, 7, 0), 1, 1, 2),
        assigned(1, 2, at(2024, 9, 9, 7, 0), 1, 2, 1),
        assigned(2, 3, at(2024, 9, 16, 7, 0), 1, 1, 2),
        assigned(3, 4, at(2024, 9, 23, 7, 0), 1, 3, 4),
    ];
    let outcome = rules::matchup_repeat(&matches, weight);
    assert_eq!(outcome.match_count, 3);
    assert_eq!(outcome.score, HardSoftDecimalScore::of_soft(-300_000));
}

#[test]
fn test_matchup_separation_decays_with_distance() {
    let weight = LeagueConstraint::MatchupSeparation.default_weight();
    let week_apart = vec![
        assigned(0, 1, at(2024, 9, 2, 7, 0), 1, 1, 2),
        assigned(1, 2, at(2024, 9, 9, 7, 0), 1, 2, 1),
    ];
    // 1000 * (1 - 7/100)
    assert_eq!(
        rules::matchup_separation(&week_apart, weight).score,
        HardSoftDecimalScore::of_soft(-930)
    );

    let far_apart = vec![
        assigned(0, 1, at(2024, 1, 1, 7, 0), 1, 1, 2),
        assigned(1, 2, at(2024, 6, 1, 7, 0), 1, 2, 1),
    ];
    assert_eq!(
        rules::matchup_separation(&far_apart, weight),
        RuleOutcome::default()
    );
}

#[test]
fn test_separation_factor_bounds() {
    assert_eq!(separation_factor(0), Decimal::ONE);
    assert_eq!(separation_factor(-7), separation_factor(7));
    assert_eq!(separation_factor(250), Decimal::ZERO);
}

#[test]
fn test_opponent_balance() {
    let weight = LeagueConstraint::OpponentBalance.default_weight();
    let mut matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 2, at(2024, 9, 16, 7, 0), 1, 3, 1),
        assigned(2, 3, at(2024, 9, 23, 7, 0), 1, 2, 3),
    ];
    assert_eq!(rules::balance(LeagueConstraint::OpponentBalance, &matches, weight).score, HardSoftDecimalScore::ZERO);

    matches.push(assigned(3, 4, at(2024, 9, 30, 7, 0), 1, 2, 1));
    let outcome = rules::balance(LeagueConstraint::OpponentBalance, &matches, weight);
    assert!(outcome.score < HardSoftDecimalScore::ZERO);
    // teams 1 and 2 each face opponents with loads {2, 1}
    assert_eq!(outcome.match_count, 2);
    assert_eq!(
        outcome.score,
        fractional_penalty(weight, Decimal::new(70711, 5)).saturating_mul(2)
    );
}

#[test]
fn test_day_balance_follows_per_team_loads() {
    let weight = HardSoftDecimalScore::ONE_SOFT;
    let mut matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 1, at(2024, 9, 11, 9, 0), 2, 2, 1),
    ];
    let day = LeagueConstraint::DayBalance;
    assert_eq!(rules::balance(day, &matches, weight), RuleOutcome::default());

    // Monday again for teams 1 and 3
    matches.push(assigned(2, 2, at(2024, 9, 16, 9, 0), 1, 3, 1));
    let outcome = rules::balance(day, &matches, weight);
    assert_eq!(outcome.match_count, 1);
    assert_eq!(outcome.score, HardSoftDecimalScore::of_soft_scaled(-70711));

    matches.push(assigned(3, 2, at(2024, 9, 18, 7, 0), 2, 1, 4));
    matches.push(assigned(4, 3, at(2024, 9, 23, 7, 0), 1, 3, 2));
    matches.push(assigned(5, 3, at(2024, 9, 25, 9, 0), 2, 2, 4));
    // team 2: Mon, Wed, Mon, Wed; team 1: Mon, Wed, Mon, Wed; team 3: Mon, Mon
    assert_eq!(rules::balance(day, &matches, weight).score, HardSoftDecimalScore::ZERO);
}

#[test]
fn test_venue_balance() {
    let weight = HardSoftDecimalScore::ONE_SOFT;
    let matches = vec![
        assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
        assigned(1, 2, at(2024, 9, 18, 9, 0), 2, 2, 1),
        assigned(2, 2, at(2024, 9, 16, 7, 0), 2, 3, 1),
    ];
    // team 1: venue 1 once, venue 2 twice
    let outcome = rules::balance(LeagueConstraint::VenueBalance, &matches, weight);
    assert_eq!(outcome.score, HardSoftDecimalScore::of_soft_scaled(-70711));
}

// ============================================================================
// Weights and full score
// ============================================================================

#[test]
fn test_balance_weights_follow_order() {
    let weights = ConstraintWeights::for_constraints(&Constraints::default());
    let day = weights.get(LeagueConstraint::DayBalance);
    let time = weights.get(LeagueConstraint::DayTimeBalance);
    let venue = weights.get(LeagueConstraint::VenueBalance);
    assert_eq!(day, HardSoftDecimalScore::of_soft(30));
    assert_eq!(time, HardSoftDecimalScore::of_soft(20));
    assert_eq!(venue, HardSoftDecimalScore::of_soft(10));

    let venue_first = Constraints::default()
        .with_balance_order(BalanceOrder::new([BalanceDimension::Venue, BalanceDimension::Day]));
    let weights = ConstraintWeights::for_constraints(&venue_first);
    assert_eq!(weights.get(LeagueConstraint::VenueBalance), HardSoftDecimalScore::of_soft(20));
    assert_eq!(weights.get(LeagueConstraint::DayBalance), HardSoftDecimalScore::of_soft(10));
    assert!(!weights.is_active(LeagueConstraint::DayTimeBalance));
}

#[test]
fn test_opt_in_rules_weigh_zero_by_default() {
    let weights = ConstraintWeights::for_constraints(&Constraints::default());
    assert!(!weights.is_active(LeagueConstraint::MatchupSeparation));
    assert!(!weights.is_active(LeagueConstraint::OpponentBalance));
    assert!(!weights.is_active(LeagueConstraint::MaxMatchesPerDay));

    let enabled = Constraints::default()
        .with_matchup_separation(true)
        .with_opponent_balance(true)
        .with_max_matches_per_day(1);
    let weights = ConstraintWeights::for_constraints(&enabled);
    assert!(weights.is_active(LeagueConstraint::MatchupSeparation));
    assert!(weights.is_active(LeagueConstraint::OpponentBalance));
    assert!(weights.is_active(LeagueConstraint::MaxMatchesPerDay));
}

#[test]
fn test_empty_balance_order_contributes_nothing() {
    let constraints = Constraints::default().with_balance_order(BalanceOrder::none());
    let s = schedule(
        constraints,
        vec![
            assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2),
            assigned(1, 2, at(2024, 9, 11, 9, 0), 2, 3, 1),
            assigned(2, 3, at(2024, 9, 16, 9, 0), 1, 1, 4),
        ],
    );
    assert_eq!(rules::calculate_score(&s), HardSoftDecimalScore::ZERO);
}

#[test]
fn test_full_score_sums_rules() {
    let s = schedule(
        Constraints::default().with_balance_order(BalanceOrder::none()),
        vec![
            assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 1),
            assigned(1, 1, at(2024, 9, 9, 7, 0), 2, 1, 2),
            assigned(2, 2, at(2024, 9, 16, 7, 0), 1, 2, 1),
        ],
    );
    // self play, one datetime clash, one repeat
    assert_eq!(
        rules::calculate_score(&s),
        HardSoftDecimalScore::of(-2, -100_000)
    );
}

#[test]
fn test_constraint_names_round_trip() {
    for constraint in LeagueConstraint::ALL {
        assert_eq!(LeagueConstraint::from_name(constraint.name()), Some(constraint));
    }
    assert_eq!(LeagueConstraint::from_name("nope"), None);
}
