//! Construction heuristic phase
//!
//! Builds an initial schedule by assigning a matchup to every open match
//! that has none, one match per step.

mod forager;
mod phase;
mod placer;

#[cfg(test)]
mod tests;

pub use forager::{BestFitForager, ConstructionForager, FirstFitForager};
pub use phase::ConstructionPhase;
pub use placer::{Placement, RoundRobinPlacer};
