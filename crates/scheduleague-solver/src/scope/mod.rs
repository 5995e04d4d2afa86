//! Scope hierarchy for solver execution.
//!
//! - [`SolverScope`]: the whole solve; owns the score director and the
//!   best solution.
//! - [`PhaseScope`]: one phase.
//! - [`StepScope`]: one step within a phase.

mod phase;
mod solver;
mod step;


pub use phase::PhaseScope;
pub use solver::{SolverScope, SolverState};
pub use step::StepScope;

/// Random number generator used throughout the solver.
pub type SolverRng = rand_chacha::ChaCha8Rng;
