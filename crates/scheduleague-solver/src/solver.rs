//! Solver implementation.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, info};

use scheduleague_config::SolverConfig;
use scheduleague_core::{HardSoftDecimalScore, Schedule};
use scheduleague_scoring::{
    ConstraintWeightOverrides, ConstraintWeights, IncrementalScoreDirector, ScoreDirector,
};

use crate::builder::{PhaseBuilder, TerminationBuilder};
use crate::event::SolverEventListener;
use crate::scope::{SolverScope, SolverState};
use crate::stats::SolverStats;
use crate::termination::{ExternalTermination, TimeTermination};

/// Outcome of one solve.
///
/// Infeasibility and early termination are not errors: `score` tells the
/// caller how good the returned schedule is.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Best schedule found, with its score set.
    pub solution: Schedule,
    pub score: HardSoftDecimalScore,
    pub stats: SolverStats,
    /// True when the external flag stopped the solve.
    pub terminated_early: bool,
}

impl SolveResult {
    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }
}

/// Runs construction followed by local search on one schedule.
///
/// ```
/// use scheduleague_config::SolverConfig;
/// use scheduleague_solver::Solver;
/// use scheduleague_test::round_robin_schedule;
///
/// let config = SolverConfig::new().with_random_seed(7).with_step_limit(50);
/// let result = Solver::new(config).solve(round_robin_schedule(4));
/// assert!(result.solution.is_fully_assigned());
/// ```
pub struct Solver {
    config: SolverConfig,
    overrides: Option<ConstraintWeightOverrides>,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
    listeners: Vec<Arc<dyn SolverEventListener>>,
}

impl Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("config", &self.config)
            .field("overrides", &self.overrides)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            overrides: None,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
            listeners: Vec::new(),
        }
    }

    /// Replaces the weights the schedule's constraints imply, by rule name.
    pub fn with_weight_overrides(mut self, overrides: ConstraintWeightOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn SolverEventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Shares a cancellation flag with other solvers.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = flag;
        self
    }

    pub fn terminate_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.terminate_early_flag)
    }

    /// Asks a running solve to stop and return its best solution.
    ///
    /// Returns false if no solve was in progress; the flag is raised
    /// either way, so a later solve skips local search.
    pub fn terminate_early(&self) -> bool {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
        self.solving.load(Ordering::SeqCst)
    }

    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Weights for `schedule`, with any overrides applied.
    pub fn weights_for(&self, schedule: &Schedule) -> ConstraintWeights {
        match &self.overrides {
            Some(overrides) => ConstraintWeights::resolve(&schedule.constraints, overrides),
            None => ConstraintWeights::for_constraints(&schedule.constraints),
        }
    }

    /// Solves `schedule` with an incremental score director.
    pub fn solve(&self, schedule: Schedule) -> SolveResult {
        let weights = self.weights_for(&schedule);
        self.solve_with_director(IncrementalScoreDirector::with_weights(schedule, weights))
    }

    pub fn solve_with_director<D>(&self, score_director: D) -> SolveResult
    where
        D: ScoreDirector + Clone + 'static,
    {
        let schedule = score_director.working_solution();
        let open_matches = schedule.open_match_indices().len();
        info!(
            event = "solve_start",
            match_count = schedule.matches.len(),
            open_match_count = open_matches,
            value_count = schedule.matchups.len(),
        );
        for listener in &self.listeners {
            listener.on_solving_started(schedule);
        }

        let seed = self
            .config
            .random_seed
            .unwrap_or_else(|| rand::rng().next_u64());
        let mut solver_scope = SolverScope::with_seed(score_director, seed)
            .with_listeners(self.listeners.clone());
        solver_scope.set_terminate_early_flag(Arc::clone(&self.terminate_early_flag));
        solver_scope.start_solving();

        if open_matches > 0 {
            self.solving.store(true, Ordering::SeqCst);
            let termination = TerminationBuilder::build::<D>(&self.config.termination)
                .with(ExternalTermination::new(Arc::clone(&self.terminate_early_flag)));
            solver_scope = solver_scope.with_termination(Box::new(termination));

            solver_scope.set_state(SolverState::Constructing);
            PhaseBuilder::construction::<D>(&self.config).solve(&mut solver_scope);
            if let Some(budget) = TimeTermination::from_config(&self.config.termination) {
                debug!(
                    event = "time_budget",
                    spent_ms = solver_scope.elapsed().unwrap_or_default().as_millis() as u64,
                    remaining_ms = budget.remaining(&solver_scope).as_millis() as u64,
                );
            }

            solver_scope.set_state(SolverState::Improving);
            PhaseBuilder::local_search::<D>(&self.config, seed).solve(&mut solver_scope);
            self.solving.store(false, Ordering::SeqCst);
        }

        solver_scope.set_state(SolverState::Terminated);
        let terminated_early = solver_scope.is_terminate_early();
        let (solution, score, mut stats) = solver_scope.into_result();
        stats.stop();

        for listener in &self.listeners {
            listener.on_solving_ended(&solution, terminated_early);
        }
        info!(
            event = "solve_end",
            score = %score,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            new_bests = stats.new_bests,
            duration_ms = stats.elapsed().as_millis() as u64,
            terminated_early,
        );

        SolveResult {
            solution,
            score,
            stats,
            terminated_early,
        }
    }
}
