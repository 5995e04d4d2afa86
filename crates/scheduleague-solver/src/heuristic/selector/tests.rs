//! Tests for move selectors.

use rand::SeedableRng;

use super::*;
use crate::heuristic::r#move::{Move, ScheduleMove};
use scheduleague_core::{Constraints, Schedule};
use scheduleague_test::league::{round_robin_schedule, teams};
use scheduleague_test::matches::{assigned, at, locked, matchup, open};

fn rng() -> SolverRng {
    SolverRng::seed_from_u64(7)
}

/// Three teams, one match locked, one assigned, one open.
fn partly_filled() -> Schedule {
    Schedule::new(
        Constraints::default(),
        teams(3),
        vec![matchup(1, 2), matchup(1, 3), matchup(2, 3)],
        vec![
            assigned(0, 1, at(2024, 9, 2, 19, 0), 1, 1, 2),
            open(1, 2, at(2024, 9, 9, 19, 0), 1),
            locked(2, 3, at(2024, 9, 16, 19, 0), 1, 2, 3),
        ],
    )
}

fn touched(moves: &[ScheduleMove]) -> Vec<usize> {
    let mut indices: Vec<usize> = moves
        .iter()
        .flat_map(|m| m.match_indices().to_vec())
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

mod swap_tests {
    use super::*;

    #[test]
    fn test_original_order_enumerates_every_pair_once() {
        let schedule = round_robin_schedule(4);
        let selector = SwapMoveSelector::new(SelectionOrder::Original);
        let moves: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(moves.len(), 15);
        let mut pairs: Vec<(usize, usize)> = moves
            .iter()
            .map(|m| match m {
                ScheduleMove::Swap(s) => (s.left_index(), s.right_index()),
                other => panic!("unexpected move {other}"),
            })
            .collect();
        assert!(pairs.iter().all(|(l, r)| l < r));
        pairs.dedup();
        assert_eq!(pairs.len(), 15);
        assert_eq!(pairs[0], (0, 1));
        assert_eq!(pairs[14], (4, 5));
    }

    #[test]
    fn test_locked_matches_are_never_swapped() {
        let schedule = partly_filled();
        let selector = SwapMoveSelector::new(SelectionOrder::Original);
        let moves: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(selector.size(&schedule), 1);
        assert_eq!(touched(&moves), vec![0, 1]);
    }

    #[test]
    fn test_random_order_is_reproducible() {
        let schedule = round_robin_schedule(5);
        let selector = SwapMoveSelector::new(SelectionOrder::Random);

        let first: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();
        let second: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(first.len(), selector.size(&schedule));
        assert_eq!(first, second);
        for m in &first {
            let indices = m.match_indices();
            assert_ne!(indices[0], indices[1]);
        }
    }

    #[test]
    fn test_single_open_match_offers_nothing() {
        let schedule = Schedule::new(
            Constraints::default(),
            teams(2),
            vec![matchup(1, 2)],
            vec![open(0, 1, at(2024, 9, 2, 19, 0), 1)],
        );
        let selector = SwapMoveSelector::default();
        assert_eq!(selector.size(&schedule), 0);
        assert_eq!(selector.iter_moves(&schedule, &mut rng()).count(), 0);
    }
}

mod change_tests {
    use super::*;

    #[test]
    fn test_unused_values_skip_held_matchups() {
        let schedule = partly_filled();
        // (1,2) is held by the open assigned match; the locked (2,3) does
        // not consume from the pool
        assert_eq!(
            ChangeMoveSelector::unused_values(&schedule),
            vec![matchup(1, 3), matchup(2, 3)]
        );
    }

    #[test]
    fn test_unused_values_respect_multiplicity() {
        let schedule = Schedule::new(
            Constraints::default(),
            teams(2),
            vec![matchup(1, 2), matchup(1, 2)],
            vec![
                assigned(0, 1, at(2024, 9, 2, 19, 0), 1, 1, 2),
                open(1, 2, at(2024, 9, 9, 19, 0), 1),
            ],
        );
        assert_eq!(ChangeMoveSelector::unused_values(&schedule), vec![matchup(1, 2)]);
    }

    #[test]
    fn test_original_order_pairs_open_matches_with_unused_values() {
        let schedule = partly_filled();
        let selector = ChangeMoveSelector::new(SelectionOrder::Original);
        let moves: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(selector.size(&schedule), 4);
        assert_eq!(moves.len(), 4);
        assert_eq!(touched(&moves), vec![0, 1]);
        assert_eq!(moves[0].to_string(), "match[0] <- 1 vs 3");
    }

    #[test]
    fn test_fully_assigned_pool_offers_nothing() {
        let mut schedule = round_robin_schedule(3);
        let values = schedule.matchups.clone();
        for (m, v) in schedule.matches.iter_mut().zip(values) {
            m.set_matchup(Some(v));
        }
        let selector = ChangeMoveSelector::new(SelectionOrder::Random);
        assert_eq!(selector.size(&schedule), 0);
        assert_eq!(selector.iter_moves(&schedule, &mut rng()).count(), 0);
    }
}

mod union_tests {
    use super::*;

    #[test]
    fn test_original_order_chains_first_then_second() {
        let schedule = partly_filled();
        let selector = UnionMoveSelector::new(
            SwapMoveSelector::new(SelectionOrder::Original),
            ChangeMoveSelector::new(SelectionOrder::Original),
            SelectionOrder::Original,
        );
        let moves: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(selector.size(&schedule), 5);
        assert_eq!(moves.len(), 5);
        assert!(matches!(moves[0], ScheduleMove::Swap(_)));
        assert!(moves[1..]
            .iter()
            .all(|m| matches!(m, ScheduleMove::Change(_))));
    }

    #[test]
    fn test_random_order_drains_both_sides() {
        let schedule = partly_filled();
        let selector = UnionMoveSelector::new(
            SwapMoveSelector::new(SelectionOrder::Random),
            ChangeMoveSelector::new(SelectionOrder::Random),
            SelectionOrder::Random,
        );
        let moves: Vec<_> = selector.iter_moves(&schedule, &mut rng()).collect();

        assert_eq!(moves.len(), 5);
        let swaps = moves
            .iter()
            .filter(|m| matches!(m, ScheduleMove::Swap(_)))
            .count();
        assert_eq!(swaps, 1);
    }

    #[test]
    fn test_boxed_selector_delegates() {
        let schedule = round_robin_schedule(4);
        let selector: Box<dyn MoveSelector> =
            Box::new(SwapMoveSelector::new(SelectionOrder::Original));
        assert_eq!(selector.size(&schedule), 15);
        assert_eq!(selector.iter_moves(&schedule, &mut rng()).count(), 15);
    }
}
