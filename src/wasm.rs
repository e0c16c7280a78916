//! WASM bindings for Wiresim Core.
//!
//! This module provides JavaScript-friendly bindings for the browser
//! simulation panel: circuit JSON in, simulation report JSON out.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSim } from 'wiresim_core';
//!
//! await init();
//!
//! const sim = new WasmCircuitSim(circuitJson);
//! const report = JSON.parse(sim.simulate(JSON.stringify({ switch: true })));
//! console.log(report.results[0].isPowered);
//! ```

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::sim::Simulator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit simulator.
///
/// Wraps the native [`Simulator`] and speaks JSON on both sides, matching
/// the shapes the web UI already consumes.
#[wasm_bindgen]
pub struct WasmCircuitSim {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuitSim {
    /// Create a new simulator from a circuit JSON string.
    ///
    /// The circuit is validated eagerly; dangling node or control-state
    /// references are reported as a constructor error.
    #[wasm_bindgen(constructor)]
    pub fn new(circuit_json: &str) -> Result<WasmCircuitSim, JsValue> {
        let circuit =
            Circuit::from_json(circuit_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let simulator = Simulator::new(circuit).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCircuitSim { simulator })
    }

    /// Run one simulation.
    ///
    /// # Arguments
    /// * `overrides_json` - JSON object mapping control-state ids to
    ///   booleans, e.g. `{"switch": true}`. Pass `"{}"` for defaults.
    ///
    /// # Returns
    /// The simulation report as a JSON string.
    #[wasm_bindgen]
    pub fn simulate(&self, overrides_json: &str) -> Result<String, JsValue> {
        let overrides: HashMap<String, bool> = serde_json::from_str(overrides_json)
            .map_err(|e| JsValue::from_str(&format!("invalid overrides: {e}")))?;
        let report = self.simulator.run(&overrides);
        report
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ids of the circuit's receptors, in report order.
    #[wasm_bindgen]
    pub fn receptor_ids(&self) -> Vec<String> {
        self.simulator.circuit().receptor_node_ids.clone()
    }

    /// Ids of the circuit's control states, in declaration order.
    #[wasm_bindgen]
    pub fn state_ids(&self) -> Vec<String> {
        self.simulator
            .circuit()
            .states
            .iter()
            .map(|s| s.id.clone())
            .collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
