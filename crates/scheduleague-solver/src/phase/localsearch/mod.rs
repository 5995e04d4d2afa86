//! Local search phase
//!
//! Improves a constructed schedule by iteratively applying moves
//! that are accepted according to an acceptance criterion.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{
    Acceptor, HardScoreGuard, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor,
};
pub use forager::{AcceptedCountForager, LocalSearchForager};
pub use phase::LocalSearchPhase;
