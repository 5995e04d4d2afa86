//! Consolidated tests for the director module.

use scheduleague_core::{Constraints, HardSoftDecimalScore, Matchup, Schedule, TeamId};
use scheduleague_test::league::{round_robin_schedule, schedule_with, teams};
use scheduleague_test::matches::{at, matchup, open};

use crate::constraint::rules;
use crate::director::{
    IncrementalScoreDirector, RecordingScoreDirector, ScoreDirector, SimpleScoreDirector,
};

fn all_rules_on() -> Constraints {
    Constraints::default()
        .with_max_matches_per_day(1)
        .with_matchup_separation(true)
        .with_opponent_balance(true)
}

/// Nine open matches over three days with three simultaneous slots each,
/// so conflicts and per-day excess are reachable.
fn crowded_schedule() -> Schedule {
    let mut matches = Vec::new();
    for (day_index, day) in [2u32, 4, 9].into_iter().enumerate() {
        for slot in 0..3u32 {
            let id = day_index * 3 + slot as usize;
            let hour = if slot == 2 { 20 } else { 19 };
            matches.push(open(id, 1 + day_index as u32 / 2, at(2024, 9, day, hour, 0), slot + 1));
        }
    }
    let teams = teams(5);
    let pool = scheduleague_core::MatchupPool::round_robin(&teams);
    Schedule::new(all_rules_on(), teams, pool.into_vec(), matches)
}

fn assert_matches_naive(director: &mut IncrementalScoreDirector) {
    let incremental = director.calculate_score();
    let naive = rules::calculate_score_with(director.working_solution(), director.weights());
    assert_eq!(incremental, naive);
}

// ============================================================================
// IncrementalScoreDirector tests
// ============================================================================

#[test]
fn test_empty_schedule_scores_zero() {
    let mut director = IncrementalScoreDirector::new(round_robin_schedule(4));
    assert_eq!(director.calculate_score(), HardSoftDecimalScore::ZERO);
    assert!(director.is_incremental());
}

#[test]
fn test_initial_assignment_matches_naive() {
    let mut schedule = crowded_schedule();
    let pool = schedule.matchups.clone();
    for (i, m) in schedule.matches.iter_mut().enumerate() {
        m.set_matchup(Some(pool[i % pool.len()]));
    }
    let mut director = IncrementalScoreDirector::new(schedule);
    assert_matches_naive(&mut director);
}

#[test]
fn test_every_change_matches_naive() {
    let mut director = IncrementalScoreDirector::new(crowded_schedule());
    let pool = director.working_solution().matchups.clone();
    let n = director.match_count();

    // deterministic walk over assignments, including repeats, self play
    // and unassignment
    let mut state: usize = 7;
    for step in 0..200 {
        state = (state * 31 + 17) % 1009;
        let index = state % n;
        let value = match step % 11 {
            0 => None,
            5 => Some(Matchup::new(TeamId(3), TeamId(3))),
            _ => Some(pool[(state / n) % pool.len()]),
        };
        director.assign(index, value);
        assert_matches_naive(&mut director);
    }
}

#[test]
fn test_swap_matches_naive() {
    let mut schedule = crowded_schedule();
    let pool = schedule.matchups.clone();
    for (i, m) in schedule.matches.iter_mut().enumerate() {
        m.set_matchup(Some(pool[i]));
    }
    let mut director = IncrementalScoreDirector::new(schedule);
    for (a, b) in [(0, 1), (2, 5), (8, 0), (3, 4)] {
        let left = director.working_solution().matches[a].matchup();
        let right = director.working_solution().matches[b].matchup();
        director.before_match_changed(a);
        director.before_match_changed(b);
        director.working_solution_mut().matches[a].set_matchup(right);
        director.working_solution_mut().matches[b].set_matchup(left);
        director.after_match_changed(a);
        director.after_match_changed(b);
        assert_matches_naive(&mut director);
    }
}

#[test]
fn test_known_penalties() {
    let mut director = IncrementalScoreDirector::new(crowded_schedule());
    // two matches at the same datetime sharing team 1
    director.assign(0, Some(matchup(1, 2)));
    director.assign(1, Some(matchup(3, 1)));
    let score = director.calculate_score();
    // one conflict, and team 1 plays twice on the day with a limit of one
    assert_eq!(score.hard_scaled(), HardSoftDecimalScore::of_hard(-2).hard_scaled());

    director.assign(1, Some(matchup(3, 4)));
    assert!(director.calculate_score().is_feasible());
}

#[test]
fn test_reset_rebuilds_after_direct_mutation() {
    let mut director = IncrementalScoreDirector::new(schedule_with(4, all_rules_on()));
    let pool = director.working_solution().matchups.clone();
    for (i, m) in director.working_solution_mut().matches.iter_mut().enumerate() {
        m.set_matchup(Some(pool[(i + 1) % pool.len()]));
    }
    director.reset();
    assert_matches_naive(&mut director);
}

#[test]
fn test_clone_is_independent() {
    let mut director = IncrementalScoreDirector::new(crowded_schedule());
    director.assign(0, Some(matchup(1, 2)));
    let mut copy = director.clone();
    copy.assign(1, Some(matchup(1, 3)));

    assert_matches_naive(&mut director);
    assert_matches_naive(&mut copy);
    assert_ne!(director.calculate_score(), copy.calculate_score());
}

// ============================================================================
// SimpleScoreDirector tests
// ============================================================================

#[test]
fn test_simple_director_tracks_changes() {
    let mut director = SimpleScoreDirector::new(round_robin_schedule(3));
    assert_eq!(director.calculate_score(), HardSoftDecimalScore::ZERO);

    director.assign(0, Some(matchup(1, 1)));
    assert_eq!(director.calculate_score(), HardSoftDecimalScore::of_hard(-1));
    assert_eq!(
        director.working_solution().score(),
        Some(HardSoftDecimalScore::of_hard(-1))
    );
}

// ============================================================================
// RecordingScoreDirector tests
// ============================================================================

#[test]
fn test_recording_undo_restores_score() {
    let mut schedule = crowded_schedule();
    let pool = schedule.matchups.clone();
    for (i, m) in schedule.matches.iter_mut().enumerate() {
        m.set_matchup(Some(pool[i]));
    }
    let mut inner = IncrementalScoreDirector::new(schedule);
    let before = inner.calculate_score();
    let snapshot: Vec<_> = inner
        .working_solution()
        .matches
        .iter()
        .map(|m| m.matchup())
        .collect();

    {
        let mut recording = RecordingScoreDirector::new(&mut inner);
        recording.assign(0, Some(matchup(2, 2)));
        recording.assign(4, None);
        recording.assign(0, Some(matchup(1, 5)));
        assert_eq!(recording.change_count(), 3);
        let _ = recording.calculate_score();
        recording.undo_changes();
        assert!(recording.is_empty());
    }

    assert_eq!(inner.calculate_score(), before);
    let restored: Vec<_> = inner
        .working_solution()
        .matches
        .iter()
        .map(|m| m.matchup())
        .collect();
    assert_eq!(restored, snapshot);
    assert_matches_naive(&mut inner);
}
