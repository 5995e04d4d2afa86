//! Local search phase implementation.

use std::fmt::Debug;

use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, trace};

use scheduleague_core::HardSoftDecimalScore;
use scheduleague_scoring::{RecordingScoreDirector, ScoreDirector};

use crate::heuristic::r#move::{Move, MoveArena, ScheduleMove};
use crate::heuristic::selector::MoveSelector;
use crate::phase::localsearch::{Acceptor, HardScoreGuard, LocalSearchForager};
use crate::phase::{notify_phase_ended, notify_phase_started, Phase};
use crate::scope::{PhaseScope, SolverRng, SolverScope, StepScope};
use crate::stats::PhaseStats;

/// Moves handed to each worker per parallel batch.
const MOVES_PER_THREAD: usize = 8;

/// Local search phase that improves an existing schedule.
///
/// Each step:
/// 1. Draws candidate moves from the selector
/// 2. Scores every doable move by doing, scoring and undoing it
/// 3. Feeds the scores to the acceptor in selector order
/// 4. Lets the forager pick among the accepted moves
/// 5. Applies the picked move for real
///
/// A move that lowers the hard score below the last step's is never
/// accepted, whatever the acceptor is.
///
/// Termination is checked after every scored batch as well as between
/// steps. A step cut short commits the best move accepted so far, or ends
/// the phase if none was.
///
/// With `move_thread_count > 1` moves are scored in batches on per-thread
/// copies of the score director. Acceptance still runs in selector order,
/// so the outcome for a given seed does not depend on the thread count.
pub struct LocalSearchPhase<MS, A, Fo> {
    move_selector: MS,
    acceptor: HardScoreGuard<A>,
    forager: Fo,
    arena: MoveArena<ScheduleMove>,
    move_thread_count: usize,
    step_limit: Option<u64>,
}

impl<MS, A, Fo> LocalSearchPhase<MS, A, Fo>
where
    MS: MoveSelector,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    pub fn new(move_selector: MS, acceptor: A, forager: Fo, step_limit: Option<u64>) -> Self {
        Self {
            move_selector,
            acceptor: HardScoreGuard::new(acceptor),
            forager,
            arena: MoveArena::new(),
            move_thread_count: 1,
            step_limit,
        }
    }

    pub fn with_move_thread_count(mut self, move_thread_count: usize) -> Self {
        self.move_thread_count = move_thread_count.max(1);
        self
    }

    pub fn move_thread_count(&self) -> usize {
        self.move_thread_count
    }

    fn batch_size(&self) -> usize {
        if self.move_thread_count > 1 {
            self.move_thread_count * MOVES_PER_THREAD
        } else {
            1
        }
    }
}

impl<MS: Debug, A: Debug, Fo: Debug> Debug for LocalSearchPhase<MS, A, Fo> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .field("move_thread_count", &self.move_thread_count)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}

/// Scores `m` against `director`, leaving the director as it was.
///
/// Returns `None` for moves that are not doable.
fn evaluate<D: ScoreDirector>(director: &mut D, m: &ScheduleMove) -> Option<HardSoftDecimalScore> {
    if !m.is_doable(director) {
        return None;
    }
    let mut recording = RecordingScoreDirector::new(director);
    m.do_move(&mut recording);
    let score = recording.calculate_score();
    recording.undo_changes();
    Some(score)
}

impl<D, MS, A, Fo> Phase<D> for LocalSearchPhase<MS, A, Fo>
where
    D: ScoreDirector + Clone,
    MS: MoveSelector,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<D>) {
        let phase_type = <Self as Phase<D>>::phase_type_name(self);
        let batch_size = self.batch_size();
        let mut rng = SolverRng::from_rng(solver_scope.rng());
        let mut workers: Vec<D> = if self.move_thread_count > 1 {
            (0..self.move_thread_count)
                .map(|_| solver_scope.score_director().clone())
                .collect()
        } else {
            Vec::new()
        };

        notify_phase_started(solver_scope, 1, phase_type);
        let mut phase_stats = PhaseStats::new();
        let mut phase_scope = PhaseScope::new(solver_scope, 1);

        let mut last_step_score = phase_scope.calculate_score();
        debug!(
            event = "phase_start",
            phase = phase_type,
            score = %last_step_score,
            move_threads = self.move_thread_count,
        );
        self.acceptor.phase_started(&last_step_score);

        loop {
            if phase_scope.solver_scope().should_terminate() {
                break;
            }
            if let Some(limit) = self.step_limit {
                if phase_scope.step_count() >= limit {
                    break;
                }
            }

            let mut step_scope = StepScope::new(&mut phase_scope);
            self.forager.step_started();
            self.acceptor.step_started();

            let mut interrupted = false;
            let mut candidates = self
                .move_selector
                .iter_moves(step_scope.score_director().working_solution(), &mut rng);

            'batches: loop {
                self.arena.reset();
                self.arena.extend(candidates.by_ref().take(batch_size));
                if self.arena.is_empty() {
                    break;
                }

                let scores: Vec<Option<HardSoftDecimalScore>> = if workers.is_empty() {
                    let director = step_scope.score_director_mut();
                    self.arena.iter().map(|m| evaluate(director, m)).collect()
                } else {
                    let chunk_size = self.arena.len().div_ceil(workers.len());
                    workers
                        .par_iter_mut()
                        .zip(self.arena.as_slice().par_chunks(chunk_size))
                        .map(|(worker, chunk)| {
                            chunk.iter().map(|m| evaluate(worker, m)).collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>()
                        .into_iter()
                        .flatten()
                        .collect()
                };

                for (m, score) in self.arena.iter().zip(scores) {
                    let Some(score) = score else {
                        continue;
                    };
                    step_scope
                        .phase_scope_mut()
                        .solver_scope_mut()
                        .stats_mut()
                        .record_evaluation();
                    let accepted = self.acceptor.is_accepted(&last_step_score, &score);
                    phase_stats.record_move(accepted);
                    if accepted {
                        self.forager.add_move(*m, score);
                        if self.forager.is_quit_early() {
                            break 'batches;
                        }
                    }
                }

                if step_scope.phase_scope().solver_scope().should_terminate() {
                    interrupted = true;
                    break;
                }
            }

            let Some((selected, selected_score)) = self.forager.pick_move() else {
                let event = if interrupted {
                    "step_interrupted"
                } else {
                    "no_accepted_move"
                };
                debug!(
                    event,
                    phase = phase_type,
                    step = step_scope.step_index(),
                );
                break;
            };

            selected.do_move(step_scope.score_director_mut());
            for worker in &mut workers {
                selected.do_move(worker);
            }
            step_scope.set_step_score(selected_score);
            last_step_score = selected_score;
            self.acceptor.step_ended(&selected_score);
            step_scope.phase_scope_mut().update_best_solution();

            trace!(
                event = "step",
                phase = phase_type,
                step = step_scope.step_index(),
                r#move = %selected,
                score = %selected_score,
            );
            step_scope.complete();
            phase_stats.record_step();
        }

        self.acceptor.phase_ended();
        debug!(
            event = "phase_end",
            phase = phase_type,
            steps = phase_stats.step_count,
            moves_evaluated = phase_stats.moves_evaluated,
            moves_accepted = phase_stats.moves_accepted,
            duration_ms = phase_stats.elapsed_ms(),
            best_score = %phase_scope.solver_scope().best_score().copied().unwrap_or_default(),
        );
        drop(phase_scope);
        notify_phase_ended(solver_scope, 1, phase_type);
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
