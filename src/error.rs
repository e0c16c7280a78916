//! Error types for the Wiresim circuit simulator.
//!
//! This module provides a unified error type [`WiresimError`] that covers
//! all error conditions that can occur during circuit loading, topology
//! validation, and simulation.

use thiserror::Error;

/// Result type alias using [`WiresimError`].
pub type Result<T> = std::result::Result<T, WiresimError>;

/// Unified error type for all Wiresim operations.
#[derive(Error, Debug)]
pub enum WiresimError {
    // ============ Circuit Validation Errors ============
    /// Node not found in circuit
    #[error("Node '{node}' referenced by {referenced_by} not found in circuit")]
    NodeNotFound { node: String, referenced_by: String },

    /// Control state not found in circuit
    #[error("Control state '{state}' referenced by link '{link}' not found in circuit")]
    StateNotFound { state: String, link: String },

    /// Duplicate node id
    #[error("Duplicate node id '{id}'")]
    DuplicateNode { id: String },

    /// Duplicate link id
    #[error("Duplicate link id '{id}'")]
    DuplicateLink { id: String },

    /// Duplicate control state id
    #[error("Duplicate control state id '{id}'")]
    DuplicateState { id: String },

    /// Invalid circuit topology
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ Serialization Errors ============
    /// Error parsing a circuit from JSON
    #[error("Failed to parse circuit JSON: {source}")]
    CircuitParse {
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing a circuit to JSON
    #[error("Failed to serialize circuit: {source}")]
    CircuitSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing a simulation report to JSON
    #[error("Failed to serialize simulation report: {source}")]
    ReportSerialize {
        #[source]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error reading a circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    Wasm { message: String },
}

impl WiresimError {
    /// Create a node-not-found error.
    pub fn node_not_found(node: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::NodeNotFound {
            node: node.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Create a state-not-found error.
    pub fn state_not_found(state: impl Into<String>, link: impl Into<String>) -> Self {
        Self::StateNotFound {
            state: state.into(),
            link: link.into(),
        }
    }

    /// Create an invalid-topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
