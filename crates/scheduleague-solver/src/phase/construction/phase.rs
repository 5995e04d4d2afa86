//! Construction heuristic phase implementation.

use std::fmt::Debug;

use rand::SeedableRng;
use tracing::{debug, trace};

use scheduleague_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::phase::construction::{
    ConstructionForager, FirstFitForager, Placement, RoundRobinPlacer,
};
use crate::phase::{notify_phase_ended, notify_phase_started, Phase};
use crate::scope::{PhaseScope, SolverRng, SolverScope, StepScope};
use crate::stats::PhaseStats;

/// Construction heuristic phase that builds an initial schedule.
///
/// Every unassigned open match gets a value. Termination is checked before
/// each placement; once it fires, the rest of the matches take their first
/// doable value instead of going through the forager.
#[derive(Debug)]
pub struct ConstructionPhase<Fo> {
    placer: RoundRobinPlacer,
    forager: Fo,
}

impl<Fo: ConstructionForager> ConstructionPhase<Fo> {
    pub fn new(placer: RoundRobinPlacer, forager: Fo) -> Self {
        Self { placer, forager }
    }
}

impl<D, Fo> Phase<D> for ConstructionPhase<Fo>
where
    D: ScoreDirector,
    Fo: ConstructionForager,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<D>) {
        let phase_type = <Self as Phase<D>>::phase_type_name(self);
        let mut rng = SolverRng::from_rng(solver_scope.rng());
        let schedule = solver_scope.working_solution();
        let targets = self.placer.unassigned_indices(schedule);
        let mut remaining = self.placer.ordered_values(schedule, &mut rng);

        notify_phase_started(solver_scope, 0, phase_type);
        let mut phase_stats = PhaseStats::new();
        let mut phase_scope = PhaseScope::new(solver_scope, 0);
        debug!(
            event = "phase_start",
            phase = phase_type,
            unassigned = targets.len(),
            values = remaining.len(),
        );

        let mut interrupted = false;
        for match_index in targets {
            if remaining.is_empty() {
                break;
            }
            if !interrupted && phase_scope.solver_scope().should_terminate() {
                interrupted = true;
                debug!(
                    event = "construction_interrupted",
                    phase = phase_type,
                    steps = phase_stats.step_count,
                    left = remaining.len(),
                );
            }
            let mut step_scope = StepScope::new(&mut phase_scope);
            let placement = Placement::new(match_index, &remaining);
            let picked = if interrupted {
                FirstFitForager::new().pick_move_index(&placement, step_scope.score_director_mut())
            } else {
                self.forager
                    .pick_move_index(&placement, step_scope.score_director_mut())
            };

            if let Some(m) = picked.map(|idx| placement.moves[idx]) {
                if let Some(pos) = remaining.iter().position(|v| Some(*v) == m.to_value()) {
                    remaining.remove(pos);
                }
                m.do_move(step_scope.score_director_mut());
                let step_score = step_scope.calculate_score();
                step_scope.set_step_score(step_score);
                trace!(
                    event = "step",
                    phase = phase_type,
                    step = step_scope.step_index(),
                    match_index,
                    score = %step_score,
                );
            }
            step_scope.complete();
            phase_stats.record_step();
        }

        phase_scope.update_best_solution();
        debug!(
            event = "phase_end",
            phase = phase_type,
            steps = phase_stats.step_count,
            duration_ms = phase_stats.elapsed_ms(),
            score = %phase_scope.solver_scope().best_score().copied().unwrap_or_default(),
        );
        drop(phase_scope);
        notify_phase_ended(solver_scope, 0, phase_type);
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }
}
