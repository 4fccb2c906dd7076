//! Agent configuration constants

use serde::{Deserialize, Serialize};
use crate::error::{AgentError, ConfigError};

/// Fewest random rounds that still leave three own moves to encode a state
pub const MIN_BOOTSTRAP_WINDOW: usize = 3;

/// Learning parameters, fixed for the lifetime of an agent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Exploration rate at the start of every match (0-1)
    pub initial_exploration: f64,
    /// Amount subtracted from the exploration rate after each round
    pub exploration_decay: f64,
    /// ALPHA: step size of the value update
    pub learning_rate: f64,
    /// GAMMA: weight of the next state's best value
    pub discount: f64,
    /// Rounds of purely random play before learning engages
    pub bootstrap_window: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            initial_exploration: 0.95,
            exploration_decay: 0.002,
            learning_rate: 0.5,
            discount: 0.005,
            bootstrap_window: 4,
        }
    }
}

impl AgentConfig {
    /// Parse a (possibly partial) JSON document and validate it
    ///
    /// Fields that are absent keep their default values.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        let config: AgentConfig = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.initial_exploration) {
            return Err(ConfigError::InitialExploration(self.initial_exploration));
        }
        if !self.exploration_decay.is_finite() || self.exploration_decay < 0.0 {
            return Err(ConfigError::ExplorationDecay(self.exploration_decay));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(ConfigError::LearningRate(self.learning_rate));
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(ConfigError::Discount(self.discount));
        }
        if self.bootstrap_window < MIN_BOOTSTRAP_WINDOW {
            return Err(ConfigError::BootstrapWindow {
                got: self.bootstrap_window,
                min: MIN_BOOTSTRAP_WINDOW,
            });
        }
        Ok(())
    }

    /// Exploration rate once `rounds` rounds of a match have completed
    pub fn exploration_after(&self, rounds: usize) -> f64 {
        (self.initial_exploration - rounds as f64 * self.exploration_decay).max(0.0)
    }
}
