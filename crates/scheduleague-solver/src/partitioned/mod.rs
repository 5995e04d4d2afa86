//! Partitioned season solving.
//!
//! A season is solved one round-robin pass at a time. Each pass is solved
//! with every earlier pass locked in place, so later passes are scored
//! against the decided rounds without reopening them.

mod partitioner;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use scheduleague_config::SolverConfig;
use scheduleague_core::{HardSoftDecimalScore, Match, MatchupPool, Schedule};
use scheduleague_scoring::{calculate_score_with, ConstraintWeightOverrides, ConstraintWeights};

use crate::solver::Solver;
use crate::stats::SolverStats;

pub use partitioner::RoundRobinPartitioner;

/// Sent after every partition, solved or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionProgress {
    pub partition_index: usize,
    pub partition_count: usize,
    /// True when the partition was already fully locked.
    pub skipped: bool,
    /// Score of the season so far, over all locked partitions.
    pub score: HardSoftDecimalScore,
}

/// Outcome of a season solve.
#[derive(Debug, Clone)]
pub struct SeasonResult {
    /// Every match locked and in (week, datetime, venue) order, score set.
    pub schedule: Schedule,
    pub score: HardSoftDecimalScore,
    /// Statistics summed over all partition solves.
    pub stats: SolverStats,
    pub partition_count: usize,
    pub skipped_partitions: usize,
    pub terminated_early: bool,
}

impl SeasonResult {
    pub fn matches(&self) -> &[Match] {
        &self.schedule.matches
    }
}

/// Solves a season partition by partition.
///
/// The input schedule's `matchups` is the base pool of one round-robin
/// pass: every unordered team pair once. Even partitions draw from it as
/// given and odd partitions from its reverse.
///
/// ```
/// use scheduleague_config::SolverConfig;
/// use scheduleague_solver::SeasonSolver;
/// use scheduleague_test::round_robin_schedule;
///
/// let config = SolverConfig::new().with_random_seed(1).with_step_limit(100);
/// let result = SeasonSolver::new(config).solve(round_robin_schedule(4));
/// assert_eq!(result.partition_count, 1);
/// assert!(result.matches().iter().all(|m| m.is_locked()));
/// ```
#[derive(Debug)]
pub struct SeasonSolver {
    config: SolverConfig,
    overrides: Option<ConstraintWeightOverrides>,
    terminate_early_flag: Arc<AtomicBool>,
    progress: Option<UnboundedSender<PartitionProgress>>,
}

impl SeasonSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            overrides: None,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            progress: None,
        }
    }

    pub fn with_weight_overrides(mut self, overrides: ConstraintWeightOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Reports each finished partition on `sender`. A closed receiver is
    /// ignored.
    pub fn with_progress(mut self, sender: UnboundedSender<PartitionProgress>) -> Self {
        self.progress = Some(sender);
        self
    }

    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = flag;
        self
    }

    pub fn terminate_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.terminate_early_flag)
    }

    /// Stops local search in the current and every remaining partition.
    /// Remaining partitions are still constructed first fit, so the season comes
    /// back fully assigned.
    pub fn terminate_early(&self) {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
    }

    fn partition_solver(&self, index: usize) -> Solver {
        let mut config = self.config.clone();
        config.random_seed = self
            .config
            .random_seed
            .map(|seed| seed.wrapping_add(index as u64));
        let solver = Solver::new(config).with_terminate_flag(Arc::clone(&self.terminate_early_flag));
        match &self.overrides {
            Some(overrides) => solver.with_weight_overrides(overrides.clone()),
            None => solver,
        }
    }

    fn season_score(&self, schedule: &Schedule) -> HardSoftDecimalScore {
        let weights = match &self.overrides {
            Some(overrides) => ConstraintWeights::resolve(&schedule.constraints, overrides),
            None => ConstraintWeights::for_constraints(&schedule.constraints),
        };
        calculate_score_with(schedule, &weights)
    }

    fn report(&self, progress: PartitionProgress) {
        if let Some(sender) = &self.progress {
            let _ = sender.send(progress);
        }
    }

    pub fn solve(&self, season: Schedule) -> SeasonResult {
        let Schedule {
            constraints,
            teams,
            matchups,
            mut matches,
            ..
        } = season;
        matches.sort_by_key(Match::sort_key);

        let partitioner = RoundRobinPartitioner::new(MatchupPool::new(matchups.clone()));
        let partition_count = partitioner.partition_count(matches.len());
        info!(
            event = "season_start",
            match_count = matches.len(),
            team_count = teams.len(),
            partition_count,
        );

        let mut stats = SolverStats::default();
        stats.start();
        let mut solved: Vec<Match> = Vec::with_capacity(matches.len());
        let mut skipped_partitions = 0;
        let mut terminated_early = false;

        for (index, range) in partitioner.partition_ranges(matches.len()).enumerate() {
            let partition = &matches[range];
            if partition.iter().all(Match::is_locked) {
                info!(event = "partition_skipped", partition = index, matches = partition.len());
                solved.extend(partition.iter().cloned());
                skipped_partitions += 1;
                let progress_schedule = Schedule::new(
                    constraints.clone(),
                    teams.clone(),
                    Vec::new(),
                    solved.clone(),
                );
                self.report(PartitionProgress {
                    partition_index: index,
                    partition_count,
                    skipped: true,
                    score: self.season_score(&progress_schedule),
                });
                continue;
            }

            let pool = partitioner.pool_for(index, partition);
            info!(
                event = "partition_start",
                partition = index,
                matches = partition.len(),
                locked = partition.iter().filter(|m| m.is_locked()).count(),
                pool_size = pool.len(),
            );
            let ids: HashSet<usize> = partition.iter().map(Match::id).collect();
            let mut sub_matches = solved.clone();
            sub_matches.extend(partition.iter().cloned());
            let sub_schedule = Schedule::new(constraints.clone(), teams.clone(), pool, sub_matches);

            let result = self.partition_solver(index).solve(sub_schedule);
            stats.absorb(&result.stats);
            terminated_early |= result.terminated_early;
            solved.extend(
                result
                    .solution
                    .matches
                    .into_iter()
                    .filter(|m| ids.contains(&m.id()))
                    .map(Match::lock),
            );

            info!(event = "partition_end", partition = index, score = %result.score);
            self.report(PartitionProgress {
                partition_index: index,
                partition_count,
                skipped: false,
                score: result.score,
            });
        }

        let mut schedule = Schedule::new(constraints, teams, matchups, solved);
        let score = self.season_score(&schedule);
        schedule.set_score(Some(score));
        stats.stop();
        info!(
            event = "season_end",
            score = %score,
            partitions = partition_count,
            skipped = skipped_partitions,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        SeasonResult {
            schedule,
            score,
            stats,
            partition_count,
            skipped_partitions,
            terminated_early,
        }
    }
}

/// Solves independent seasons in parallel, one rayon task per season.
///
/// Results come back in input order.
pub fn solve_seasons(config: &SolverConfig, seasons: Vec<Schedule>) -> Vec<SeasonResult> {
    seasons
        .into_par_iter()
        .map(|season| SeasonSolver::new(config.clone()).solve(season))
        .collect()
}
