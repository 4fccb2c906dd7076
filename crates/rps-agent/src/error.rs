//! Error types for the agent's call contract and configuration

use core::fmt;

/// Rejected configuration values
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Initial exploration rate outside [0, 1].
    InitialExploration(f64),
    /// Exploration decay negative or not finite.
    ExplorationDecay(f64),
    /// Learning rate outside (0, 1].
    LearningRate(f64),
    /// Discount factor outside [0, 1].
    Discount(f64),
    /// Bootstrap window too short to form a state.
    BootstrapWindow { got: usize, min: usize },
    /// Configuration document could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InitialExploration(v) =>
                write!(f, "initial exploration rate {} not in [0, 1]", v),
            ConfigError::ExplorationDecay(v) =>
                write!(f, "exploration decay {} must be finite and non-negative", v),
            ConfigError::LearningRate(v) =>
                write!(f, "learning rate {} not in (0, 1]", v),
            ConfigError::Discount(v) =>
                write!(f, "discount factor {} not in [0, 1]", v),
            ConfigError::BootstrapWindow { got, min } =>
                write!(f, "bootstrap window {} is shorter than the minimum {}", got, min),
            ConfigError::Parse(msg) =>
                write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced to the caller of the agent
#[derive(Clone, Debug, PartialEq)]
pub enum AgentError {
    /// Move symbol outside R/P/S.
    UnknownSymbol(String),
    /// An opponent move arrived before any new-match signal.
    MatchNotStarted,
    /// A cycling opponent was given no moves.
    EmptyCycle,
    /// Agent configuration was rejected.
    InvalidConfig(ConfigError),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::UnknownSymbol(s) =>
                write!(f, "unknown move symbol {:?} (expected R, P or S)", s),
            AgentError::MatchNotStarted =>
                write!(f, "opponent move received before a new match was signaled"),
            AgentError::EmptyCycle =>
                write!(f, "cycle opponent needs at least one move"),
            AgentError::InvalidConfig(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AgentError {
    fn from(e: ConfigError) -> Self {
        AgentError::InvalidConfig(e)
    }
}
