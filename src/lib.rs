//! # Wiresim Core
//!
//! A power-flow reachability simulator for electrical wiring schematics.
//!
//! This library provides:
//! - A serializable circuit model: nodes, conditional links, control states
//! - Adjacency graph construction and topology validation
//! - State-aware path finding from source to each receptor
//! - Explainable cutoff diagnosis when a receptor is not powered
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit model, adjacency graph, and validation
//! - [`sim`] - Path finding and the simulation orchestrator
//! - [`report`] - The simulation report wire contract
//!
//! ## Usage
//!
//! ```
//! use std::collections::HashMap;
//! use wiresim_core::circuit::fixtures::simple_lighting_circuit;
//! use wiresim_core::simulate_circuit;
//!
//! let circuit = simple_lighting_circuit();
//! let overrides = HashMap::from([("switch".to_string(), true)]);
//! let report = simulate_circuit(&circuit, &overrides).unwrap();
//! assert!(report.results[0].is_powered);
//! ```
//!
//! ## Simulation Method
//!
//! A circuit is a graph of nodes joined by links, each link carrying a
//! conduction rule: always conducting, normally open (conducts while its
//! control state is active), or normally closed (conducts while it is not).
//! For each simulation call:
//!
//! 1. Build a bidirectional adjacency graph from the link list
//! 2. Merge the circuit's control-state defaults with the caller's overrides
//! 3. Depth-first search from the source to each receptor, crossing only
//!    links that conduct under the merged snapshot
//!
//! A receptor is powered iff such a path exists. When none does, the first
//! link that failed its conduction test is reported as the cutoff point with
//! a human-readable reason.

pub mod circuit;
pub mod error;
pub mod report;
pub mod sim;

// Re-export main types for convenience
pub use circuit::{build_graph, validate_circuit, Circuit};
pub use error::{Result, WiresimError};
pub use report::SimulationReport;
pub use sim::{find_path, simulate_circuit, Simulator};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSim;
