//! Tests for the construction heuristic.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::SeedableRng;

use super::*;
use crate::phase::Phase;
use crate::scope::{SolverRng, SolverScope};
use crate::termination::StepCountTermination;
use scheduleague_core::{Constraints, Match, Schedule, TeamPair};
use scheduleague_scoring::{IncrementalScoreDirector, ScoreDirector, SimpleScoreDirector};
use scheduleague_test::league::{round_robin_schedule, teams};
use scheduleague_test::matches::{assigned, at, locked, matchup, open};

/// Four teams, three dates with two matches each.
fn two_per_date() -> Schedule {
    let mut matches = Vec::new();
    for week in 0..3u32 {
        let datetime = at(2024, 9, 2 + 7 * week, 19, 0);
        matches.push(open(2 * week as usize, week + 1, datetime, 1));
        matches.push(open(2 * week as usize + 1, week + 1, datetime, 2));
    }
    let teams = teams(4);
    let pool = scheduleague_core::MatchupPool::round_robin(&teams).into_vec();
    Schedule::new(Constraints::default(), teams, pool, matches)
}

fn pairs(matches: &[Match]) -> Vec<TeamPair> {
    matches
        .iter()
        .filter_map(|m| m.matchup())
        .map(|mu| mu.team_pair())
        .collect()
}

mod placer_tests {
    use super::*;

    #[test]
    fn test_circle_order_in_team_order() {
        let schedule = round_robin_schedule(4);
        let mut rng = SolverRng::seed_from_u64(0);
        let values = RoundRobinPlacer::in_team_order().ordered_values(&schedule, &mut rng);
        assert_eq!(
            values,
            vec![
                matchup(1, 4),
                matchup(2, 3),
                matchup(1, 3),
                matchup(2, 4),
                matchup(1, 2),
                matchup(3, 4),
            ]
        );
    }

    #[test]
    fn test_shuffled_rounds_are_disjoint() {
        let schedule = round_robin_schedule(6);
        let mut rng = SolverRng::seed_from_u64(99);
        let values = RoundRobinPlacer::new().ordered_values(&schedule, &mut rng);

        assert_eq!(values.len(), 15);
        for round in values.chunks(3) {
            let teams: HashSet<_> = round.iter().flat_map(|m| m.teams()).collect();
            assert_eq!(teams.len(), 6);
        }
    }

    #[test]
    fn test_odd_team_count_uses_a_bye() {
        let schedule = round_robin_schedule(5);
        let mut rng = SolverRng::seed_from_u64(1);
        let values = RoundRobinPlacer::new().ordered_values(&schedule, &mut rng);

        assert_eq!(values.len(), 10);
        for round in values.chunks(2) {
            let teams: HashSet<_> = round.iter().flat_map(|m| m.teams()).collect();
            assert_eq!(teams.len(), 4);
        }
    }

    #[test]
    fn test_values_held_by_open_matches_are_not_offered() {
        let schedule = Schedule::new(
            Constraints::default(),
            teams(3),
            vec![matchup(1, 2), matchup(1, 3), matchup(2, 3)],
            vec![
                assigned(0, 1, at(2024, 9, 2, 19, 0), 1, 1, 3),
                open(1, 2, at(2024, 9, 9, 19, 0), 1),
                locked(2, 3, at(2024, 9, 16, 19, 0), 1, 2, 3),
            ],
        );
        let placer = RoundRobinPlacer::in_team_order();
        let mut rng = SolverRng::seed_from_u64(0);
        let mut values = placer.ordered_values(&schedule, &mut rng);
        values.sort();

        assert_eq!(placer.unassigned_indices(&schedule), vec![1]);
        assert_eq!(values, vec![matchup(1, 2), matchup(2, 3)]);
    }

    #[test]
    fn test_placement_deduplicates_values() {
        let placement = Placement::new(4, &[matchup(1, 2), matchup(1, 2), matchup(2, 1)]);
        assert_eq!(placement.len(), 2);
        assert!(placement.moves.iter().all(|m| m.match_index() == 4));
    }
}

mod forager_tests {
    use super::*;

    #[test]
    fn test_first_fit_takes_first_candidate() {
        let mut director = SimpleScoreDirector::new(round_robin_schedule(3));
        let placement = Placement::new(0, &[matchup(2, 3), matchup(1, 2)]);
        assert_eq!(
            FirstFitForager::new().pick_move_index(&placement, &mut director),
            Some(0)
        );
    }

    #[test]
    fn test_best_fit_avoids_conflicts_and_leaves_director_untouched() {
        let datetime = at(2024, 9, 2, 19, 0);
        let schedule = Schedule::new(
            Constraints::default(),
            teams(4),
            vec![matchup(1, 3), matchup(3, 4)],
            vec![
                assigned(0, 1, datetime, 1, 1, 2),
                open(1, 1, datetime, 2),
            ],
        );
        let mut director = SimpleScoreDirector::new(schedule);
        let placement = Placement::new(1, &[matchup(1, 3), matchup(3, 4)]);

        let picked = BestFitForager::new().pick_move_index(&placement, &mut director);

        assert_eq!(picked, Some(1));
        assert_eq!(director.working_solution().matches[1].matchup(), None);
    }

    #[test]
    fn test_locked_target_has_no_doable_candidate() {
        let schedule = Schedule::new(
            Constraints::default(),
            teams(2),
            vec![matchup(1, 2)],
            vec![locked(0, 1, at(2024, 9, 2, 19, 0), 1, 2, 1)],
        );
        let mut director = SimpleScoreDirector::new(schedule);
        let placement = Placement::new(0, &[matchup(1, 2)]);
        assert_eq!(
            BestFitForager::new().pick_move_index(&placement, &mut director),
            None
        );
    }
}

mod phase_tests {
    use super::*;

    fn construct<Fo: ConstructionForager>(schedule: Schedule, forager: Fo) -> Schedule {
        let director = IncrementalScoreDirector::new(schedule);
        let mut solver_scope = SolverScope::with_seed(director, 17);
        solver_scope.start_solving();
        let mut phase = ConstructionPhase::new(RoundRobinPlacer::new(), forager);
        phase.solve(&mut solver_scope);
        solver_scope.into_result().0
    }

    #[test]
    fn test_first_fit_uses_every_pool_value_once() {
        let result = construct(round_robin_schedule(5), FirstFitForager::new());

        assert!(result.is_fully_assigned());
        let mut used = pairs(&result.matches);
        used.sort();
        used.dedup();
        assert_eq!(used.len(), 10);
    }

    #[test]
    fn test_circle_order_keeps_dates_conflict_free() {
        let result = construct(two_per_date(), FirstFitForager::new());
        assert!(result.is_fully_assigned());
        assert!(result.score().unwrap().is_feasible());
    }

    #[test]
    fn test_best_fit_is_feasible() {
        let result = construct(two_per_date(), BestFitForager::new());
        assert!(result.is_fully_assigned());
        assert!(result.score().unwrap().is_feasible());
    }

    #[test]
    fn test_existing_assignments_are_kept() {
        let mut schedule = round_robin_schedule(3);
        schedule.matches[1].set_matchup(Some(matchup(2, 3)));
        let result = construct(schedule, BestFitForager::new());

        assert_eq!(result.matches[1].matchup(), Some(matchup(2, 3)));
        let mut used = pairs(&result.matches);
        used.sort();
        used.dedup();
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_step_per_placed_match() {
        let director = SimpleScoreDirector::new(round_robin_schedule(4));
        let mut solver_scope = SolverScope::with_seed(director, 2);
        solver_scope.start_solving();
        let mut phase = ConstructionPhase::new(RoundRobinPlacer::new(), FirstFitForager::new());
        phase.solve(&mut solver_scope);

        assert_eq!(solver_scope.total_step_count(), 6);
        assert!(solver_scope.best_solution().is_some());
    }

    #[test]
    fn test_raised_flag_falls_back_to_first_fit() {
        let director = IncrementalScoreDirector::new(round_robin_schedule(5));
        let mut solver_scope = SolverScope::with_seed(director, 17);
        solver_scope.set_terminate_early_flag(Arc::new(AtomicBool::new(true)));
        solver_scope.start_solving();
        let mut phase = ConstructionPhase::new(RoundRobinPlacer::new(), BestFitForager::new());
        phase.solve(&mut solver_scope);
        let interrupted = solver_scope.into_result().0;

        assert!(interrupted.is_fully_assigned());
        let first_fit = construct(round_robin_schedule(5), FirstFitForager::new());
        assert_eq!(interrupted.matches, first_fit.matches);
    }

    #[test]
    fn test_termination_mid_placement_still_fills_every_match() {
        let director = SimpleScoreDirector::new(round_robin_schedule(4));
        let mut solver_scope = SolverScope::with_seed(director, 5)
            .with_termination(Box::new(StepCountTermination::new(2)));
        solver_scope.start_solving();
        let mut phase = ConstructionPhase::new(RoundRobinPlacer::new(), BestFitForager::new());
        phase.solve(&mut solver_scope);

        assert_eq!(solver_scope.total_step_count(), 6);
        let result = solver_scope.into_result().0;
        assert!(result.is_fully_assigned());
        let mut used = pairs(&result.matches);
        used.sort();
        used.dedup();
        assert_eq!(used.len(), 6);
    }
}
