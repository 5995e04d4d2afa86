//! Solver-level scope.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use tracing::debug;

use scheduleague_core::{HardSoftDecimalScore, Schedule};
use scheduleague_scoring::ScoreDirector;

use super::SolverRng;
use crate::event::SolverEventListener;
use crate::stats::SolverStats;
use crate::termination::Termination;

/// Lifecycle of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    Unconstructed,
    Constructing,
    Improving,
    Terminated,
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverState::Unconstructed => "unconstructed",
            SolverState::Constructing => "constructing",
            SolverState::Improving => "improving",
            SolverState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Top-level scope for the entire solving process.
pub struct SolverScope<D: ScoreDirector> {
    score_director: D,
    best_solution: Option<Schedule>,
    best_score: Option<HardSoftDecimalScore>,
    rng: SolverRng,
    start_time: Option<Instant>,
    total_step_count: u64,
    /// Value of `total_step_count` when the best score last improved.
    last_improvement_step: u64,
    stats: SolverStats,
    state: SolverState,
    termination: Option<Box<dyn Termination<D>>>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
    listeners: Vec<Arc<dyn SolverEventListener>>,
}

impl<D: ScoreDirector> SolverScope<D> {
    pub fn new(score_director: D) -> Self {
        Self::with_rng(score_director, SolverRng::from_os_rng())
    }

    pub fn with_seed(score_director: D, seed: u64) -> Self {
        Self::with_rng(score_director, SolverRng::seed_from_u64(seed))
    }

    fn with_rng(score_director: D, rng: SolverRng) -> Self {
        Self {
            score_director,
            best_solution: None,
            best_score: None,
            rng,
            start_time: None,
            total_step_count: 0,
            last_improvement_step: 0,
            stats: SolverStats::default(),
            state: SolverState::Unconstructed,
            termination: None,
            terminate_early_flag: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_termination(mut self, termination: Box<dyn Termination<D>>) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn with_listeners(mut self, listeners: Vec<Arc<dyn SolverEventListener>>) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// True once the external flag is raised or the termination fires.
    pub fn should_terminate(&self) -> bool {
        self.is_terminate_early()
            || self
                .termination
                .as_ref()
                .is_some_and(|t| t.is_terminated(self))
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.last_improvement_step = 0;
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn set_state(&mut self, state: SolverState) {
        if self.state != state {
            debug!(event = "state_changed", from = %self.state, to = %state);
            self.state = state;
            for listener in &self.listeners {
                listener.on_state_changed(state);
            }
        }
    }

    pub fn score_director(&self) -> &D {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        &mut self.score_director
    }

    pub fn working_solution(&self) -> &Schedule {
        self.score_director.working_solution()
    }

    pub fn calculate_score(&mut self) -> HardSoftDecimalScore {
        self.score_director.calculate_score()
    }

    pub fn best_solution(&self) -> Option<&Schedule> {
        self.best_solution.as_ref()
    }

    pub fn best_score(&self) -> Option<&HardSoftDecimalScore> {
        self.best_score.as_ref()
    }

    /// Snapshots the working schedule if it beats the best one so far.
    pub fn update_best_solution(&mut self) -> bool {
        let current_score = self.calculate_score();
        let is_better = match &self.best_score {
            None => true,
            Some(best) => current_score > *best,
        };

        if is_better {
            let mut snapshot = self.score_director.clone_working_solution();
            snapshot.set_score(Some(current_score));
            debug!(
                event = "new_best",
                step = self.total_step_count,
                score = %current_score,
            );
            for listener in &self.listeners {
                listener.on_best_solution_changed(&snapshot, &current_score);
            }
            self.best_solution = Some(snapshot);
            self.best_score = Some(current_score);
            self.last_improvement_step = self.total_step_count;
            self.stats.record_new_best();
        }
        is_better
    }

    pub fn rng(&mut self) -> &mut SolverRng {
        &mut self.rng
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.stats.record_step();
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    /// Steps taken since the best score last improved.
    pub fn unimproved_step_count(&self) -> u64 {
        self.total_step_count - self.last_improvement_step
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    pub fn listeners(&self) -> &[Arc<dyn SolverEventListener>] {
        &self.listeners
    }

    /// Consumes the scope, returning the best (or else working) schedule
    /// with its score set, and the statistics.
    pub fn into_result(mut self) -> (Schedule, HardSoftDecimalScore, SolverStats) {
        if self.best_solution.is_none() {
            self.update_best_solution();
        }
        let score = self.best_score.unwrap_or_default();
        let solution = self
            .best_solution
            .unwrap_or_else(|| self.score_director.clone_working_solution());
        (solution, score, self.stats)
    }
}
