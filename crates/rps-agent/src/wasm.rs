//! WASM bindings for browser play and duel replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{run_duel, AgentConfig, Opponent, QAgent};

/// Agent handle exposed to JavaScript
#[wasm_bindgen]
pub struct WasmAgent {
    inner: QAgent,
}

#[wasm_bindgen]
impl WasmAgent {
    /// Agent with the default learning parameters
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WasmAgent {
        WasmAgent { inner: QAgent::with_seed(seed) }
    }

    /// Agent from a (possibly partial) JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str, seed: u64) -> Result<WasmAgent, JsError> {
        let config = AgentConfig::from_json(config_json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let inner = QAgent::new(config, seed)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmAgent { inner })
    }

    /// Play one round
    ///
    /// `previous` is the opponent's last move ("R", "P" or "S"); pass
    /// nothing or "" to start a new match. Returns the agent's move symbol.
    pub fn play(&mut self, previous: Option<String>) -> Result<String, JsError> {
        let m = self.inner
            .play_symbol(previous.as_deref())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(m.to_string())
    }

    #[wasm_bindgen(js_name = explorationRate)]
    pub fn exploration_rate(&self) -> f64 {
        self.inner.exploration_rate()
    }

    /// Value table as a 27×3 nested array
    #[wasm_bindgen(js_name = valueTable)]
    pub fn value_table(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.value_table().rows())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// Replay a duel with full round-by-round details
///
/// # Arguments
/// * `opponent_json` - JSON serialized Opponent, e.g. `"BeatLast"` or `{"Constant": "Rock"}`
/// * `rounds` - Number of rounds
/// * `seed` - Seed shared by the agent and the opponent
///
/// # Returns
/// JSON serialized DuelResult
#[wasm_bindgen]
pub fn replay_duel(opponent_json: &str, rounds: u32, seed: u64) -> Result<JsValue, JsError> {
    let opponent: Opponent = serde_json::from_str(opponent_json)
        .map_err(|e| JsError::new(&format!("Invalid opponent: {}", e)))?;

    let mut agent = QAgent::with_seed(seed);
    let result = run_duel(&mut agent, &opponent, rounds, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct OpponentInfo {
    id: String,
    name: String,
    description: String,
}

/// Get the scripted opponents available for replay
#[wasm_bindgen]
pub fn get_opponent_types() -> Result<JsValue, JsError> {
    let catalog = [
        ("BeatLast", "Beat Last", Opponent::BeatLast),
        ("Frequency", "Frequency", Opponent::Frequency),
        ("Random", "Random", Opponent::Random),
    ];

    let types: Vec<OpponentInfo> = catalog
        .iter()
        .map(|(id, name, opponent)| OpponentInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: opponent.describe(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
