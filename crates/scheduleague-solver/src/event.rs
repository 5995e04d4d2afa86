//! Event hooks for solver monitoring.
//!
//! Listeners are registered on the [`Solver`](crate::Solver) and called
//! synchronously on the solving thread, in registration order.
//!
//! ```
//! use std::sync::Arc;
//! use scheduleague_core::{HardSoftDecimalScore, Schedule};
//! use scheduleague_solver::event::SolverEventListener;
//!
//! #[derive(Debug)]
//! struct PrintBest;
//!
//! impl SolverEventListener for PrintBest {
//!     fn on_best_solution_changed(&self, _schedule: &Schedule, score: &HardSoftDecimalScore) {
//!         println!("new best: {score}");
//!     }
//! }
//!
//! let listener: Arc<dyn SolverEventListener> = Arc::new(PrintBest);
//! # let _ = listener;
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info};

use scheduleague_core::{HardSoftDecimalScore, Schedule};

use crate::scope::SolverState;

/// Listener for solver events.
pub trait SolverEventListener: Send + Sync + Debug {
    /// Called when a new best schedule is found.
    fn on_best_solution_changed(&self, schedule: &Schedule, score: &HardSoftDecimalScore);

    fn on_solving_started(&self, _schedule: &Schedule) {}

    fn on_solving_ended(&self, _schedule: &Schedule, _is_terminated_early: bool) {}

    fn on_state_changed(&self, _state: SolverState) {}

    fn on_phase_started(&self, _phase_index: usize, _phase_type: &str) {}

    fn on_phase_ended(&self, _phase_index: usize, _phase_type: &str) {}
}

/// Logs every event through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct LoggingEventListener {
    prefix: String,
}

impl LoggingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every event with `prefix`, e.g. a season name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl SolverEventListener for LoggingEventListener {
    fn on_best_solution_changed(&self, _schedule: &Schedule, score: &HardSoftDecimalScore) {
        info!(prefix = %self.prefix, event = "best_solution_changed", score = %score);
    }

    fn on_solving_started(&self, schedule: &Schedule) {
        info!(
            prefix = %self.prefix,
            event = "solving_started",
            match_count = schedule.matches.len(),
        );
    }

    fn on_solving_ended(&self, _schedule: &Schedule, is_terminated_early: bool) {
        info!(
            prefix = %self.prefix,
            event = "solving_ended",
            terminated_early = is_terminated_early,
        );
    }

    fn on_phase_started(&self, phase_index: usize, phase_type: &str) {
        debug!(prefix = %self.prefix, event = "phase_started", phase_index, phase_type);
    }

    fn on_phase_ended(&self, phase_index: usize, phase_type: &str) {
        debug!(prefix = %self.prefix, event = "phase_ended", phase_index, phase_type);
    }
}

/// Counts events; handy in tests and for coarse progress reporting.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    best_solution_changes: AtomicUsize,
    phases_started: AtomicUsize,
    solves_ended: AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_solution_changes(&self) -> usize {
        self.best_solution_changes.load(Ordering::SeqCst)
    }

    pub fn phases_started(&self) -> usize {
        self.phases_started.load(Ordering::SeqCst)
    }

    pub fn solves_ended(&self) -> usize {
        self.solves_ended.load(Ordering::SeqCst)
    }
}

impl SolverEventListener for CountingEventListener {
    fn on_best_solution_changed(&self, _schedule: &Schedule, _score: &HardSoftDecimalScore) {
        self.best_solution_changes.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _schedule: &Schedule, _is_terminated_early: bool) {
        self.solves_ended.fetch_add(1, Ordering::SeqCst);
    }

    fn on_phase_started(&self, _phase_index: usize, _phase_type: &str) {
        self.phases_started.fetch_add(1, Ordering::SeqCst);
    }
}
