//! Simulation report types.
//!
//! These structs are the serialization contract consumed by external
//! renderers (the on-screen simulation panel and the PDF export). Field
//! names are stable camelCase: `circuitId`, `circuitName`, `timestamp`,
//! `states[]`, `results[]` with `receptorId`, `receptorName`, `isPowered`,
//! `activePath`, `cutoffPoint`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WiresimError};

/// A control state as resolved for one simulation call: the override value
/// when given, the circuit's own default otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedState {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

/// One traversed link of a conducting path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLink {
    pub link_id: String,
    pub link_name: String,
    pub is_conducting: bool,
}

/// The link blamed for a receptor not being powered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutoffPoint {
    pub link_id: String,
    pub link_name: String,
    /// Human-readable explanation of why the link blocks conduction.
    pub reason: String,
}

/// Simulation outcome for one receptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceptorResult {
    pub receptor_id: String,
    pub receptor_name: String,
    pub is_powered: bool,
    /// The conducting path from source to receptor, or `null` when the
    /// receptor is not powered.
    pub active_path: Option<Vec<PathLink>>,
    /// Absent when no single link can be blamed; callers treat absence as
    /// "undetermined", not as an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_point: Option<CutoffPoint>,
}

/// Whole-circuit simulation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub circuit_id: String,
    pub circuit_name: String,
    pub timestamp: DateTime<Utc>,
    /// The full resolved control-state snapshot the simulation ran under.
    pub states: Vec<ResolvedState>,
    /// One entry per receptor, in `receptorNodeIds` order.
    pub results: Vec<ReceptorResult>,
}

impl SimulationReport {
    /// Serialize the report to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| WiresimError::ReportSerialize { source })
    }

    /// Serialize the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| WiresimError::ReportSerialize { source })
    }
}
