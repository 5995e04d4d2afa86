//! Solver configuration for scheduleague.
//!
//! Load a [`SolverConfig`] from TOML or YAML, or build one in code:
//!
//! ```
//! use scheduleague_config::{AcceptorConfig, SolverConfig};
//!
//! let config = SolverConfig::new()
//!     .with_random_seed(7)
//!     .with_termination_seconds(2)
//!     .with_acceptor(AcceptorConfig::HillClimbing);
//! assert_eq!(config.random_seed, Some(7));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scheduleague_core::HardSoftDecimalScore;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results. Absent means OS entropy.
    pub random_seed: Option<u64>,

    /// Number of threads evaluating candidate moves.
    pub move_thread_count: MoveThreadCount,

    pub termination: TerminationConfig,

    pub construction: ConstructionConfig,

    pub local_search: LocalSearchConfig,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML file. Callers typically fall back with
    /// `SolverConfig::load("solver.toml").unwrap_or_default()`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination.seconds_spent_limit = Some(seconds);
        self.termination.millis_spent_limit = None;
        self
    }

    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.termination.step_count_limit = Some(steps);
        self
    }

    pub fn with_acceptor(mut self, acceptor: AcceptorConfig) -> Self {
        self.local_search.acceptor = acceptor;
        self
    }

    pub fn with_construction_type(mut self, construction_type: ConstructionType) -> Self {
        self.construction.construction_type = construction_type;
        self
    }

    pub fn with_move_thread_count(mut self, count: MoveThreadCount) -> Self {
        self.move_thread_count = count;
        self
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let MoveThreadCount::Count(0) = self.move_thread_count {
            return Err(ConfigError::Invalid(
                "move_thread_count must be at least 1".to_string(),
            ));
        }
        self.termination.best_score()?;
        self.local_search.validate()
    }
}

/// Number of threads for parallel move evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveThreadCount {
    /// Evaluate on the solving thread.
    #[default]
    None,
    /// One thread per available core.
    Auto,
    Count(usize),
}

impl MoveThreadCount {
    /// Resolved thread count, `available` being the machine's parallelism.
    pub fn resolve(&self, available: usize) -> usize {
        match self {
            MoveThreadCount::None => 1,
            MoveThreadCount::Auto => available.max(1),
            MoveThreadCount::Count(n) => (*n).max(1),
        }
    }
}

/// Termination configuration. A limit of `0` disables it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TerminationConfig {
    pub seconds_spent_limit: Option<u64>,

    pub millis_spent_limit: Option<u64>,

    /// Steps per solve, construction placements included.
    pub step_count_limit: Option<u64>,

    /// Steps without a new best score.
    pub unimproved_step_count_limit: Option<u64>,

    /// Score to stop at, e.g. `"0hard/-100soft"`.
    pub best_score_limit: Option<String>,

    /// Steps without a new best score once hard score reaches zero.
    pub feasible_plateau_step_count: Option<u64>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            seconds_spent_limit: Some(5),
            millis_spent_limit: None,
            step_count_limit: Some(20_000),
            unimproved_step_count_limit: Some(2_000),
            best_score_limit: None,
            feasible_plateau_step_count: Some(500),
        }
    }
}

impl TerminationConfig {
    /// Termination that waits only on the step and plateau limits.
    pub fn unlimited_time() -> Self {
        Self {
            seconds_spent_limit: None,
            ..Self::default()
        }
    }

    /// Returns the time limit as a Duration, if set.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self.seconds_spent_limit.unwrap_or(0).saturating_mul(1000)
            + self.millis_spent_limit.unwrap_or(0);
        (millis > 0).then(|| Duration::from_millis(millis))
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_count_limit.filter(|&n| n > 0)
    }

    pub fn unimproved_limit(&self) -> Option<u64> {
        self.unimproved_step_count_limit.filter(|&n| n > 0)
    }

    pub fn plateau_limit(&self) -> Option<u64> {
        self.feasible_plateau_step_count.filter(|&n| n > 0)
    }

    /// Parses `best_score_limit`.
    pub fn best_score(&self) -> Result<Option<HardSoftDecimalScore>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(|s| {
                HardSoftDecimalScore::parse(s)
                    .map_err(|e| ConfigError::Invalid(format!("best_score_limit: {e}")))
            })
            .transpose()
    }
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConstructionConfig {
    pub construction_type: ConstructionType,
}

/// How the construction phase picks a matchup for each open match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    /// Next matchup in round-robin order.
    FirstFit,

    /// Best-scoring remaining matchup.
    #[default]
    BestFit,
}

/// Local search configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LocalSearchConfig {
    pub acceptor: AcceptorConfig,

    pub forager: ForagerConfig,

    pub move_selector: MoveSelectorConfig,
}

impl LocalSearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match &self.acceptor {
            AcceptorConfig::LateAcceptance(la) if la.late_acceptance_size == Some(0) => {
                return Err(ConfigError::Invalid(
                    "late_acceptance_size must be at least 1".to_string(),
                ));
            }
            AcceptorConfig::SimulatedAnnealing(sa) => {
                if let Some(decay) = sa.decay_rate {
                    if !(decay > 0.0 && decay < 1.0) {
                        return Err(ConfigError::Invalid(format!(
                            "decay_rate must be in (0, 1), got {decay}"
                        )));
                    }
                }
                if let Some(t) = sa.starting_temperature {
                    if !(t.is_finite() && t > 0.0) {
                        return Err(ConfigError::Invalid(format!(
                            "starting_temperature must be positive, got {t}"
                        )));
                    }
                }
            }
            _ => {}
        }
        if self.forager.accepted_count_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "accepted_count_limit must be at least 1".to_string(),
            ));
        }
        if !self.move_selector.swap_enabled && !self.move_selector.change_enabled {
            return Err(ConfigError::Invalid(
                "at least one of swap_enabled and change_enabled must be set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Accept only improving or equal moves.
    HillClimbing,

    /// Compare against the score from `late_acceptance_size` steps ago.
    LateAcceptance(LateAcceptanceConfig),

    /// Metropolis acceptance with a geometrically cooling temperature.
    SimulatedAnnealing(SimulatedAnnealingConfig),
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LateAcceptanceConfig {
    pub late_acceptance_size: Option<usize>,
}

impl LateAcceptanceConfig {
    pub const DEFAULT_SIZE: usize = 400;

    pub fn size(&self) -> usize {
        self.late_acceptance_size.unwrap_or(Self::DEFAULT_SIZE)
    }
}

/// Temperatures are in whole soft points (a `-1soft` loss is 1.0), not the
/// fixed-point units scores are stored in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulatedAnnealingConfig {
    pub starting_temperature: Option<f64>,
    pub decay_rate: Option<f64>,
}

impl SimulatedAnnealingConfig {
    pub const DEFAULT_STARTING_TEMPERATURE: f64 = 1_000.0;
    pub const DEFAULT_DECAY_RATE: f64 = 0.999;

    pub fn starting_temperature(&self) -> f64 {
        self.starting_temperature
            .unwrap_or(Self::DEFAULT_STARTING_TEMPERATURE)
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate.unwrap_or(Self::DEFAULT_DECAY_RATE)
    }
}

/// Forager configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ForagerConfig {
    /// Accepted moves to gather before picking the best one.
    pub accepted_count_limit: Option<usize>,
}

impl ForagerConfig {
    pub fn limit(&self) -> usize {
        self.accepted_count_limit.unwrap_or(1)
    }
}

/// Move selector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MoveSelectorConfig {
    /// Swap matchups between two open matches.
    pub swap_enabled: bool,

    /// Move an open match onto a matchup no match holds.
    pub change_enabled: bool,

    pub selection_order: SelectionOrder,
}

impl Default for MoveSelectorConfig {
    fn default() -> Self {
        Self {
            swap_enabled: true,
            change_enabled: true,
            selection_order: SelectionOrder::Random,
        }
    }
}

/// Order in which a selector yields its moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// Deterministic index order.
    Original,

    #[default]
    Random,
}

#[cfg(test)]
mod tests;
