//! Counters behind the `phase_end`, `solve_end` and `season_end` events.

use std::time::{Duration, Instant};

/// Counters for one solve, or for a whole season once partitions are
/// absorbed.
///
/// ```
/// use scheduleague_solver::stats::SolverStats;
///
/// let mut partition = SolverStats::default();
/// partition.record_step();
/// partition.record_evaluation();
/// partition.record_new_best();
///
/// let mut season = SolverStats::default();
/// season.absorb(&partition);
/// season.absorb(&partition);
/// assert_eq!(season.step_count, 2);
/// assert_eq!(season.moves_evaluated, 2);
/// assert_eq!(season.new_bests, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Steps over both phases, one per placed match during construction.
    pub step_count: u64,
    /// Doable moves scored by local search.
    pub moves_evaluated: u64,
    /// Times the best schedule was replaced.
    pub new_bests: u64,
}

impl SolverStats {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.elapsed = Some(self.elapsed());
    }

    /// Time since `start`, or the frozen value after `stop`.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_evaluation(&mut self) {
        self.moves_evaluated += 1;
    }

    pub fn record_new_best(&mut self) {
        self.new_bests += 1;
    }

    /// Adds the counters of one partition solve.
    pub fn absorb(&mut self, other: &SolverStats) {
        self.step_count += other.step_count;
        self.moves_evaluated += other.moves_evaluated;
        self.new_bests += other.new_bests;
    }
}

/// Counters for a single phase run.
#[derive(Debug)]
pub struct PhaseStats {
    start_time: Instant,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
}

impl PhaseStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }
}

impl Default for PhaseStats {
    fn default() -> Self {
        Self::new()
    }
}
