//! Simulated annealing acceptor.

use rand::{Rng, SeedableRng};

use scheduleague_core::score::SCALE;
use scheduleague_core::HardSoftDecimalScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Metropolis acceptance with a geometrically cooling temperature.
///
/// A move that worsens the score by `delta` is accepted with probability
/// `exp(-delta / temperature)`, evaluated per level: a hard loss uses the
/// hard temperature, otherwise the soft loss uses the soft temperature.
/// The hard temperature is the soft one divided by `HARD_TEMPERATURE_RATIO`,
/// so hard losses are very rarely taken.
///
/// Temperatures count whole score points. Scores are stored fixed-point at
/// [`SCALE`] (100 000) units per point and losses are divided back by it, so
/// at a temperature of 1 000 a one-point soft loss is taken with
/// probability `exp(-0.001)`.
///
/// # Example
///
/// ```
/// use scheduleague_solver::phase::localsearch::SimulatedAnnealingAcceptor;
///
/// let acceptor = SimulatedAnnealingAcceptor::new(1_000.0, 0.999, 42);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    decay_rate: f64,
    seed: u64,
    rng: SolverRng,
}

impl SimulatedAnnealingAcceptor {
    pub const HARD_TEMPERATURE_RATIO: f64 = 1_000.0;

    /// Temperatures are in soft score units; `decay_rate` multiplies the
    /// temperature after every step.
    pub fn new(starting_temperature: f64, decay_rate: f64, seed: u64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            decay_rate,
            seed,
            rng: SolverRng::seed_from_u64(seed),
        }
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    fn acceptance_probability(&self, last: &HardSoftDecimalScore, candidate: &HardSoftDecimalScore) -> f64 {
        if self.current_temperature <= 0.0 {
            return 0.0;
        }
        let scale = SCALE as f64;
        let hard_loss = (last.hard_scaled() - candidate.hard_scaled()) as f64 / scale;
        if hard_loss > 0.0 {
            let temperature = self.current_temperature / Self::HARD_TEMPERATURE_RATIO;
            return (-hard_loss / temperature).exp();
        }
        let soft_loss = (last.soft_scaled() - candidate.soft_scaled()) as f64 / scale;
        (-soft_loss / self.current_temperature).exp()
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(1_000.0, 0.999, 0)
    }
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftDecimalScore,
        move_score: &HardSoftDecimalScore,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        let probability = self.acceptance_probability(last_step_score, move_score);
        probability > 0.0 && self.rng.random::<f64>() < probability
    }

    fn phase_started(&mut self, _initial_score: &HardSoftDecimalScore) {
        self.current_temperature = self.starting_temperature;
        self.rng = SolverRng::seed_from_u64(self.seed);
    }

    fn step_ended(&mut self, _step_score: &HardSoftDecimalScore) {
        self.current_temperature *= self.decay_rate;
    }
}
