//! Tests for domain types (matchups, matches, balance order, pools).

use chrono::{NaiveDate, NaiveDateTime};

use super::*;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap()
}

fn mu(home: u32, away: u32) -> Matchup {
    Matchup::new(TeamId(home), TeamId(away))
}

// ============================================================================
// Matchup Tests
// ============================================================================

mod matchup_tests {
    use super::*;

    #[test]
    fn test_reverse_swaps_orientation() {
        let m = mu(1, 2);
        assert_eq!(m.reverse(), mu(2, 1));
        assert_eq!(m.reverse().reverse(), m);
    }

    #[test]
    fn test_teams_equal_ignores_orientation() {
        assert!(mu(1, 2).teams_equal(&mu(2, 1)));
        assert!(mu(1, 2).teams_equal(&mu(1, 2)));
        assert!(!mu(1, 2).teams_equal(&mu(1, 3)));
    }

    #[test]
    fn test_opponent() {
        let m = mu(4, 7);
        assert_eq!(m.opponent(TeamId(4)), Some(TeamId(7)));
        assert_eq!(m.opponent(TeamId(7)), Some(TeamId(4)));
        assert_eq!(m.opponent(TeamId(5)), None);
    }

    #[test]
    fn test_self_play_yields_single_team() {
        let m = mu(3, 3);
        assert!(m.is_self_play());
        assert_eq!(m.teams().collect::<Vec<_>>(), vec![TeamId(3)]);
        assert_eq!(mu(3, 5).teams().count(), 2);
    }

    #[test]
    fn test_team_pair_normalizes() {
        let pair = mu(9, 2).team_pair();
        assert_eq!(pair.low(), TeamId(2));
        assert_eq!(pair.high(), TeamId(9));
    }
}

// ============================================================================
// Match Tests
// ============================================================================

mod match_tests {
    use super::*;

    #[test]
    fn test_sort_key_orders_week_datetime_venue() {
        let mut matches = vec![
            Match::new(0, 2, at(8, 18), VenueId(0)),
            Match::new(1, 1, at(1, 19), VenueId(0)),
            Match::new(2, 1, at(1, 18), VenueId(1)),
            Match::new(3, 1, at(1, 18), VenueId(0)),
        ];
        matches.sort_by_key(Match::sort_key);
        let ids: Vec<usize> = matches.iter().map(Match::id).collect();
        assert_eq!(ids, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_unassigned_match_shares_nothing() {
        let open = Match::new(0, 1, at(1, 18), VenueId(0));
        let assigned = Match::new(1, 1, at(1, 18), VenueId(1)).with_matchup(mu(1, 2));
        assert!(!open.shares_team(&assigned));
        assert!(!open.teams_equal(&assigned));
        assert!(!open.contains_team(TeamId(1)));
    }

    #[test]
    fn test_shares_team_either_side() {
        let a = Match::new(0, 1, at(1, 18), VenueId(0)).with_matchup(mu(1, 2));
        let b = Match::new(1, 1, at(1, 18), VenueId(1)).with_matchup(mu(3, 1));
        let c = Match::new(2, 1, at(1, 18), VenueId(2)).with_matchup(mu(3, 4));
        assert!(a.shares_team(&b));
        assert!(!a.shares_team(&c));
    }

    #[test]
    fn test_lock_keeps_matchup() {
        let m = Match::new(5, 1, at(1, 18), VenueId(0))
            .with_matchup(mu(1, 2))
            .lock();
        assert!(m.is_locked());
        assert_eq!(m.matchup(), Some(mu(1, 2)));
        assert_eq!(m.id(), 5);
    }
}

// ============================================================================
// Balance Order Tests
// ============================================================================

mod balance_order_tests {
    use super::*;

    #[test]
    fn test_default_weights_decay_by_rank() {
        let order = BalanceOrder::default();
        let day = order.weight(BalanceDimension::Day);
        let time = order.weight(BalanceDimension::Time);
        let venue = order.weight(BalanceDimension::Venue);
        assert!(day > time && time > venue);
        assert_eq!((day, time, venue), (30, 20, 10));
    }

    #[test]
    fn test_omitted_dimension_weighs_zero() {
        let order = BalanceOrder::new([BalanceDimension::Venue, BalanceDimension::Day]);
        assert_eq!(order.weight(BalanceDimension::Venue), 20);
        assert_eq!(order.weight(BalanceDimension::Day), 10);
        assert_eq!(order.weight(BalanceDimension::Time), 0);
    }

    #[test]
    fn test_empty_order_weighs_everything_zero() {
        let order = BalanceOrder::none();
        for dimension in BalanceDimension::ALL {
            assert_eq!(order.weight(dimension), 0);
        }
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let order = BalanceOrder::new([
            BalanceDimension::Time,
            BalanceDimension::Day,
            BalanceDimension::Time,
        ]);
        assert_eq!(
            order.dimensions(),
            &[BalanceDimension::Time, BalanceDimension::Day]
        );
        assert_eq!(order.weight(BalanceDimension::Time), 20);
    }
}

// ============================================================================
// Pool Tests
// ============================================================================

mod pool_tests {
    use super::*;

    fn teams(n: u32) -> Vec<Team> {
        (0..n).map(|i| Team::new(i, format!("Team {i}"))).collect()
    }

    #[test]
    fn test_round_robin_has_every_pair_once() {
        let pool = MatchupPool::round_robin(&teams(5));
        assert_eq!(pool.len(), 10);
        let mut pairs: Vec<TeamPair> = pool.iter().map(Matchup::team_pair).collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn test_round_robin_follows_team_order() {
        let given = vec![Team::new(7, "G"), Team::new(3, "C")];
        let pool = MatchupPool::round_robin(&given);
        assert_eq!(pool.as_slice(), &[mu(7, 3)]);
    }

    #[test]
    fn test_partition_orientation_alternates() {
        let pool = MatchupPool::round_robin(&teams(4));
        assert_eq!(pool.for_partition(0), pool);
        assert_eq!(pool.for_partition(1), pool.reversed());
        assert_eq!(pool.for_partition(2), pool);

        for (a, b) in pool.iter().zip(pool.for_partition(1).iter()) {
            assert_eq!(a.reverse(), *b);
        }
    }
}

// ============================================================================
// Serde Tests
// ============================================================================

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_balance_order_uses_uppercase_names() {
        let order: BalanceOrder = serde_json::from_str(r#"["VENUE","DAY"]"#).unwrap();
        assert_eq!(
            order.dimensions(),
            &[BalanceDimension::Venue, BalanceDimension::Day]
        );
    }

    #[test]
    fn test_constraints_defaults_when_fields_missing() {
        let constraints: Constraints = serde_json::from_str(r#"{"maxMatchPerDay": 2}"#).unwrap();
        assert_eq!(constraints.max_matches_per_day, 2);
        assert_eq!(constraints.balance_order, BalanceOrder::default());
        assert!(!constraints.matchup_separation);
    }
}
