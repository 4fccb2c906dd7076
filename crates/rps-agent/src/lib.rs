//! Adaptive Rock-Paper-Scissors agent
//!
//! Learns online, within a single match, which move to play against the
//! current opponent using a small Q-learning table over recent history.
//! This crate is compiled to:
//! - Native (library and the `rps-duel` CLI)
//! - WASM (for browser play and duel replay)

mod action;
mod agent;
mod config;
mod duel;
mod error;
mod policy;
mod random;
mod state;
mod table;

#[cfg(feature = "wasm")]
mod wasm;

pub use action::{Move, ACTION_COUNT};
pub use agent::{QAgent, Signal};
pub use config::{AgentConfig, MIN_BOOTSTRAP_WINDOW};
pub use duel::{run_duel, DuelResult, Opponent, RoundRecord};
pub use error::{AgentError, ConfigError};
pub use policy::{Choice, Regime};
pub use random::SeededRng;
pub use state::{encode, State, Transition, STATE_COUNT};
pub use table::ValueTable;

/// Reward for `own` against `opponent`: +1 win, 0 tie, -1 loss
pub fn reward(own: Move, opponent: Move) -> i8 {
    if own == opponent {
        0
    } else if own.beats() == opponent {
        1
    } else {
        -1
    }
}
