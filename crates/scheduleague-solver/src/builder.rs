//! Builders for constructing solver components from configuration
//!
//! This module wires `scheduleague-config` types to the solver
//! implementation.

use tracing::warn;

use scheduleague_config::{
    AcceptorConfig, ConstructionType, MoveSelectorConfig, SolverConfig, TerminationConfig,
};
use scheduleague_scoring::ScoreDirector;

use crate::heuristic::selector::{
    ChangeMoveSelector, MoveSelector, SwapMoveSelector, UnionMoveSelector,
};
use crate::phase::construction::{
    BestFitForager, ConstructionPhase, FirstFitForager, RoundRobinPlacer,
};
use crate::phase::localsearch::{
    AcceptedCountForager, Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    LocalSearchPhase, SimulatedAnnealingAcceptor,
};
use crate::phase::Phase;
use crate::termination::{
    BestScoreTermination, FeasiblePlateauTermination, OrTermination, StepCountTermination,
    TimeTermination, UnimprovedStepCountTermination,
};

/// Builder for constructing acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    /// `seed` drives the acceptor's own randomness, if it has any.
    pub fn build(config: &AcceptorConfig, seed: u64) -> Box<dyn Acceptor> {
        match config {
            AcceptorConfig::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance(la_config) => {
                Box::new(LateAcceptanceAcceptor::new(la_config.size()))
            }
            AcceptorConfig::SimulatedAnnealing(sa_config) => {
                Box::new(SimulatedAnnealingAcceptor::new(
                    sa_config.starting_temperature(),
                    sa_config.decay_rate(),
                    seed,
                ))
            }
        }
    }
}

/// Builder for the local search neighbourhood.
pub struct MoveSelectorBuilder;

impl MoveSelectorBuilder {
    pub fn build(config: &MoveSelectorConfig) -> Box<dyn MoveSelector> {
        let order = config.selection_order;
        match (config.swap_enabled, config.change_enabled) {
            (true, true) => Box::new(UnionMoveSelector::new(
                SwapMoveSelector::new(order),
                ChangeMoveSelector::new(order),
                order,
            )),
            (false, true) => Box::new(ChangeMoveSelector::new(order)),
            (true, false) => Box::new(SwapMoveSelector::new(order)),
            (false, false) => {
                warn!(event = "no_move_selector", "both selectors disabled, using swaps");
                Box::new(SwapMoveSelector::new(order))
            }
        }
    }
}

/// Builder for the configured termination conditions.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Any configured limit ends the solve. An unparseable best score
    /// limit is logged and ignored.
    pub fn build<D: ScoreDirector>(config: &TerminationConfig) -> OrTermination<D> {
        let mut termination = OrTermination::new();
        if let Some(budget) = TimeTermination::from_config(config) {
            termination = termination.with(budget);
        }
        if let Some(limit) = config.step_limit() {
            termination = termination.with(StepCountTermination::new(limit));
        }
        if let Some(limit) = config.unimproved_limit() {
            termination = termination.with(UnimprovedStepCountTermination::new(limit));
        }
        if let Some(steps) = config.plateau_limit() {
            termination = termination.with(FeasiblePlateauTermination::new(steps));
        }
        match config.best_score() {
            Ok(Some(target)) => termination = termination.with(BestScoreTermination::new(target)),
            Ok(None) => {}
            Err(error) => warn!(event = "invalid_best_score_limit", %error),
        }
        termination
    }
}

/// Builder for the two solver phases.
pub struct PhaseBuilder;

impl PhaseBuilder {
    pub fn construction<D: ScoreDirector>(config: &SolverConfig) -> Box<dyn Phase<D>> {
        let placer = RoundRobinPlacer::new();
        match config.construction.construction_type {
            ConstructionType::FirstFit => {
                Box::new(ConstructionPhase::new(placer, FirstFitForager::new()))
            }
            ConstructionType::BestFit => {
                Box::new(ConstructionPhase::new(placer, BestFitForager::new()))
            }
        }
    }

    pub fn local_search<D: ScoreDirector + Clone>(
        config: &SolverConfig,
        seed: u64,
    ) -> Box<dyn Phase<D>> {
        let local_search = &config.local_search;
        let threads = config
            .move_thread_count
            .resolve(rayon::current_num_threads());
        Box::new(
            LocalSearchPhase::new(
                MoveSelectorBuilder::build(&local_search.move_selector),
                AcceptorBuilder::build(&local_search.acceptor, seed),
                AcceptedCountForager::new(local_search.forager.limit()),
                None,
            )
            .with_move_thread_count(threads),
        )
    }
}
