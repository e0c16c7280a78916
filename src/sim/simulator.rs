//! Main simulator interface.

use std::collections::HashMap;

use chrono::Utc;

use crate::circuit::{build_graph, validate_circuit, Circuit, Link, LinkBehavior};
use crate::error::Result;
use crate::report::{CutoffPoint, PathLink, ReceptorResult, ResolvedState, SimulationReport};

use super::path::{find_path, StateSnapshot};

/// The main circuit simulator.
///
/// Owns a validated circuit and runs any number of simulations against it.
/// Each run is an independent, stateless computation: the adjacency graph is
/// rebuilt per call and the circuit itself is never mutated, so a shared
/// `Simulator` can serve concurrent requests.
pub struct Simulator {
    circuit: Circuit,
}

impl Simulator {
    /// Create a simulator for the given circuit.
    ///
    /// Validates the topology eagerly and fails fast on dangling node or
    /// control-state references.
    pub fn new(circuit: Circuit) -> Result<Self> {
        validate_circuit(&circuit)?;
        Ok(Self { circuit })
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Run one simulation under the given control-state overrides.
    ///
    /// Overrides take precedence per state id; states not present in the
    /// map keep the circuit's own default.
    pub fn run(&self, overrides: &HashMap<String, bool>) -> SimulationReport {
        run_simulation(&self.circuit, overrides)
    }
}

/// Validate a circuit and simulate it in one call.
///
/// Convenience entry point for callers that do not keep a [`Simulator`]
/// around.
pub fn simulate_circuit(
    circuit: &Circuit,
    overrides: &HashMap<String, bool>,
) -> Result<SimulationReport> {
    validate_circuit(circuit)?;
    Ok(run_simulation(circuit, overrides))
}

fn run_simulation(circuit: &Circuit, overrides: &HashMap<String, bool>) -> SimulationReport {
    let graph = build_graph(circuit);
    let snapshot = StateSnapshot::resolve(circuit, overrides);

    let states = circuit
        .states
        .iter()
        .map(|state| ResolvedState {
            id: state.id.clone(),
            name: state.name.clone(),
            is_active: snapshot.is_active(&state.id),
        })
        .collect();

    let results = circuit
        .receptor_node_ids
        .iter()
        .map(|receptor_id| {
            let search = find_path(
                &graph,
                circuit,
                &circuit.source_node_id,
                receptor_id,
                &snapshot,
            );

            let receptor_name = circuit.node_name(receptor_id).to_string();

            if search.found {
                tracing::debug!(receptor = %receptor_id, "receptor powered");
                ReceptorResult {
                    receptor_id: receptor_id.clone(),
                    receptor_name,
                    is_powered: true,
                    // A successful path only ever crosses conducting links.
                    active_path: Some(
                        search
                            .path
                            .iter()
                            .map(|link_id| PathLink {
                                link_id: link_id.clone(),
                                link_name: link_name(circuit, link_id),
                                is_conducting: true,
                            })
                            .collect(),
                    ),
                    cutoff_point: None,
                }
            } else {
                tracing::debug!(
                    receptor = %receptor_id,
                    cutoff = ?search.cutoff_link_id,
                    "receptor not powered"
                );
                ReceptorResult {
                    receptor_id: receptor_id.clone(),
                    receptor_name,
                    is_powered: false,
                    active_path: None,
                    cutoff_point: search.cutoff_link_id.as_deref().and_then(|link_id| {
                        circuit.find_link(link_id).map(|link| CutoffPoint {
                            link_id: link.id.clone(),
                            link_name: link.name.clone(),
                            reason: cutoff_reason(circuit, link),
                        })
                    }),
                }
            }
        })
        .collect();

    SimulationReport {
        circuit_id: circuit.id.clone(),
        circuit_name: circuit.name.clone(),
        timestamp: Utc::now(),
        states,
        results,
    }
}

fn link_name(circuit: &Circuit, link_id: &str) -> String {
    circuit
        .find_link(link_id)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| link_id.to_string())
}

/// Explain why a blocked link does not conduct.
fn cutoff_reason(circuit: &Circuit, link: &Link) -> String {
    match &link.behavior {
        LinkBehavior::NormallyOpen { state_id } => {
            let state_name = state_display_name(circuit, state_id);
            format!(
                "NO contact '{}' is open: control state '{}' is not active",
                link.name, state_name
            )
        }
        LinkBehavior::NormallyClosed { state_id } => {
            let state_name = state_display_name(circuit, state_id);
            format!(
                "NC contact '{}' is open: control state '{}' is active",
                link.name, state_name
            )
        }
        LinkBehavior::AlwaysConducting => {
            format!("link '{}' does not conduct", link.name)
        }
    }
}

fn state_display_name<'a>(circuit: &'a Circuit, state_id: &'a str) -> &'a str {
    circuit
        .find_state(state_id)
        .map(|s| s.name.as_str())
        .unwrap_or(state_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::fixtures::{dual_receptor_circuit, simple_lighting_circuit};

    fn overrides(entries: &[(&str, bool)]) -> HashMap<String, bool> {
        entries
            .iter()
            .map(|(id, v)| (id.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_default_states_switch_is_cutoff() {
        let report = simulate_circuit(&simple_lighting_circuit(), &HashMap::new()).unwrap();

        let lamp = &report.results[0];
        assert!(!lamp.is_powered);
        assert!(lamp.active_path.is_none());

        let cutoff = lamp.cutoff_point.as_ref().unwrap();
        assert_eq!(cutoff.link_id, "l2");
        assert!(cutoff.reason.contains("NO contact"));
        assert!(cutoff.reason.contains("not active"));
    }

    #[test]
    fn test_closed_switch_powers_lamp() {
        let report =
            simulate_circuit(&simple_lighting_circuit(), &overrides(&[("switch", true)])).unwrap();

        let lamp = &report.results[0];
        assert!(lamp.is_powered);
        assert!(lamp.cutoff_point.is_none());

        let path = lamp.active_path.as_ref().unwrap();
        assert!(!path.is_empty());
        assert_eq!(path[0].link_id, "l1");
        assert_eq!(path[1].link_id, "l2");
        assert!(path.iter().all(|step| step.is_conducting));
    }

    #[test]
    fn test_tripped_breaker_is_cutoff() {
        let report = simulate_circuit(
            &simple_lighting_circuit(),
            &overrides(&[("switch", true), ("breaker", true)]),
        )
        .unwrap();

        let lamp = &report.results[0];
        assert!(!lamp.is_powered);

        let cutoff = lamp.cutoff_point.as_ref().unwrap();
        assert_eq!(cutoff.link_id, "l1");
        assert!(cutoff.reason.contains("NC contact"));
        assert!(cutoff.reason.contains("active"));
    }

    #[test]
    fn test_report_completeness() {
        let circuit = simple_lighting_circuit();
        let report = simulate_circuit(&circuit, &HashMap::new()).unwrap();

        assert_eq!(report.results.len(), circuit.receptor_node_ids.len());
        assert_eq!(report.states.len(), circuit.states.len());
        assert_eq!(report.circuit_id, circuit.id);
        assert_eq!(report.circuit_name, circuit.name);
    }

    #[test]
    fn test_untouched_states_keep_their_default() {
        let mut circuit = simple_lighting_circuit();
        circuit.states[0].is_active = true; // breaker tripped by default

        let report = simulate_circuit(&circuit, &overrides(&[("switch", true)])).unwrap();

        let breaker = report.states.iter().find(|s| s.id == "breaker").unwrap();
        assert!(breaker.is_active);
        let switch = report.states.iter().find(|s| s.id == "switch").unwrap();
        assert!(switch.is_active);
    }

    #[test]
    fn test_receptors_are_independent() {
        let circuit = dual_receptor_circuit();

        let before = simulate_circuit(&circuit, &overrides(&[("sw2", true)])).unwrap();
        let after =
            simulate_circuit(&circuit, &overrides(&[("sw1", true), ("sw2", true)])).unwrap();

        // lamp2 is untouched by sw1
        assert!(before.results[1].is_powered);
        assert!(after.results[1].is_powered);
        assert_eq!(before.results[1].active_path, after.results[1].active_path);

        // lamp1 flips with sw1
        assert!(!before.results[0].is_powered);
        assert!(after.results[0].is_powered);
    }

    #[test]
    fn test_determinism() {
        let circuit = simple_lighting_circuit();
        let a = simulate_circuit(&circuit, &overrides(&[("switch", true)])).unwrap();
        let b = simulate_circuit(&circuit, &overrides(&[("switch", true)])).unwrap();

        for (ra, rb) in a.results.iter().zip(&b.results) {
            assert_eq!(ra, rb);
        }
        assert_eq!(a.states, b.states);
    }

    #[test]
    fn test_simulator_rejects_malformed_circuit() {
        let mut circuit = simple_lighting_circuit();
        circuit.links[0].to_node_id = "nowhere".to_string();

        assert!(Simulator::new(circuit).is_err());
    }

    #[test]
    fn test_simulator_reuse_matches_one_shot() {
        let circuit = simple_lighting_circuit();
        let sim = Simulator::new(circuit.clone()).unwrap();

        let from_sim = sim.run(&overrides(&[("switch", true)]));
        let one_shot = simulate_circuit(&circuit, &overrides(&[("switch", true)])).unwrap();

        assert_eq!(from_sim.results, one_shot.results);
    }
}
