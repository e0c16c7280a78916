//! Circuit validation.

use std::collections::HashSet;

use crate::error::{Result, WiresimError};

use super::Circuit;

/// Validate a circuit for simulation.
///
/// Checks:
/// - The circuit has at least one node
/// - Node, link, and control state ids are unique
/// - Every link endpoint references an existing node
/// - Every gated link references an existing control state
/// - Source, neutral, and receptor ids reference existing nodes
///
/// Malformed circuits come from the storage layer; failing fast here keeps
/// data-integrity bugs from being masked as "not powered" results.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if circuit.nodes.is_empty() {
        return Err(WiresimError::invalid_topology("Circuit has no nodes"));
    }

    let mut node_ids = HashSet::new();
    for node in &circuit.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(WiresimError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }

    let mut state_ids = HashSet::new();
    for state in &circuit.states {
        if !state_ids.insert(state.id.as_str()) {
            return Err(WiresimError::DuplicateState {
                id: state.id.clone(),
            });
        }
    }

    let mut link_ids = HashSet::new();
    for link in &circuit.links {
        if !link_ids.insert(link.id.as_str()) {
            return Err(WiresimError::DuplicateLink {
                id: link.id.clone(),
            });
        }

        for endpoint in [&link.from_node_id, &link.to_node_id] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(WiresimError::node_not_found(
                    endpoint,
                    format!("link '{}'", link.id),
                ));
            }
        }

        if let Some(state_id) = link.behavior.state_id() {
            if !state_ids.contains(state_id) {
                return Err(WiresimError::state_not_found(state_id, &link.id));
            }
        }
    }

    if !node_ids.contains(circuit.source_node_id.as_str()) {
        return Err(WiresimError::node_not_found(
            &circuit.source_node_id,
            "sourceNodeId",
        ));
    }

    if !node_ids.contains(circuit.neutral_node_id.as_str()) {
        return Err(WiresimError::node_not_found(
            &circuit.neutral_node_id,
            "neutralNodeId",
        ));
    }

    for receptor_id in &circuit.receptor_node_ids {
        if !node_ids.contains(receptor_id.as_str()) {
            return Err(WiresimError::node_not_found(
                receptor_id,
                "receptorNodeIds",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::fixtures::simple_lighting_circuit;
    use crate::circuit::types::{Link, LinkBehavior};

    #[test]
    fn test_valid_circuit_passes() {
        assert!(validate_circuit(&simple_lighting_circuit()).is_ok());
    }

    #[test]
    fn test_empty_circuit_rejected() {
        let mut circuit = simple_lighting_circuit();
        circuit.nodes.clear();
        circuit.links.clear();

        let err = validate_circuit(&circuit).unwrap_err();
        assert!(matches!(err, WiresimError::InvalidTopology { .. }));
    }

    #[test]
    fn test_dangling_link_endpoint_rejected() {
        let mut circuit = simple_lighting_circuit();
        circuit.links.push(Link::new(
            "l9",
            "dangling",
            "source",
            "nowhere",
            LinkBehavior::AlwaysConducting,
        ));

        let err = validate_circuit(&circuit).unwrap_err();
        assert!(matches!(err, WiresimError::NodeNotFound { .. }));
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_orphan_state_reference_rejected() {
        let mut circuit = simple_lighting_circuit();
        circuit.links.push(Link::new(
            "l9",
            "ghost contact",
            "source",
            "neutral",
            LinkBehavior::NormallyOpen {
                state_id: "ghost".to_string(),
            },
        ));

        let err = validate_circuit(&circuit).unwrap_err();
        assert!(matches!(err, WiresimError::StateNotFound { .. }));
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let mut circuit = simple_lighting_circuit();
        let dup = circuit.nodes[0].clone();
        circuit.nodes.push(dup);

        let err = validate_circuit(&circuit).unwrap_err();
        assert!(matches!(err, WiresimError::DuplicateNode { .. }));
    }

    #[test]
    fn test_unknown_receptor_rejected() {
        let mut circuit = simple_lighting_circuit();
        circuit.receptor_node_ids.push("phantom".to_string());

        let err = validate_circuit(&circuit).unwrap_err();
        assert!(matches!(err, WiresimError::NodeNotFound { .. }));
    }
}
