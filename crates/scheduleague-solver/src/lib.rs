//! scheduleague Solver Engine
//!
//! This crate provides the solving loop for league schedules:
//! - Solver and SolveResult
//! - Phases (round-robin construction, local search)
//! - Move system (swap and change moves, selectors)
//! - Termination conditions
//! - Event system for monitoring
//! - Configuration wiring (builder module)
//! - Partitioned season solving

pub mod builder;
pub mod event;
pub mod heuristic;
pub mod partitioned;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;

pub use builder::{AcceptorBuilder, MoveSelectorBuilder, PhaseBuilder, TerminationBuilder};
pub use event::{CountingEventListener, LoggingEventListener, SolverEventListener};
pub use heuristic::{
    ChangeMove, ChangeMoveSelector, Move, MoveArena, MoveSelector, ScheduleMove, SelectionOrder,
    SwapMove, SwapMoveSelector, UnionMoveSelector,
};
pub use partitioned::{
    solve_seasons, PartitionProgress, RoundRobinPartitioner, SeasonResult, SeasonSolver,
};
pub use phase::{
    construction::{
        BestFitForager, ConstructionForager, ConstructionPhase, FirstFitForager, Placement,
        RoundRobinPlacer,
    },
    localsearch::{
        AcceptedCountForager, Acceptor, HardScoreGuard, HillClimbingAcceptor,
        LateAcceptanceAcceptor, LocalSearchForager, LocalSearchPhase, SimulatedAnnealingAcceptor,
    },
    Phase,
};
pub use scope::{PhaseScope, SolverRng, SolverScope, SolverState, StepScope};
pub use solver::{SolveResult, Solver};
pub use stats::{PhaseStats, SolverStats};
pub use termination::{
    BestScoreTermination, ExternalTermination, FeasiblePlateauTermination, OrTermination,
    StepCountTermination, Termination, TimeTermination, UnimprovedStepCountTermination,
};
