//! Circuit aggregate and adjacency graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{ControlState, Link, Node};
use crate::error::{Result, WiresimError};

/// A complete circuit ready for simulation.
///
/// Nodes, links, and control states live in flat, ordered collections and
/// reference each other by id. The circuit is a pure value: simulation never
/// mutates it, so concurrent simulations over the same circuit are safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub id: String,
    pub name: String,

    /// All terminals, in declaration order.
    pub nodes: Vec<Node>,

    /// All connections, in declaration order. Declaration order is the
    /// tie-break for traversal and cutoff reporting.
    pub links: Vec<Link>,

    /// Control state defaults, in declaration order.
    pub states: Vec<ControlState>,

    /// The "hot" terminal power flows out of.
    pub source_node_id: String,

    /// The return terminal.
    pub neutral_node_id: String,

    /// Nodes whose energization status the simulation reports on.
    pub receptor_node_ids: Vec<String>,
}

impl Circuit {
    /// Find a node by id.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a link by id.
    pub fn find_link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Find a control state by id.
    pub fn find_state(&self, id: &str) -> Option<&ControlState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Get the display name of a node, falling back to its id.
    pub fn node_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.find_node(id).map(|n| n.name.as_str()).unwrap_or(id)
    }

    /// Parse a circuit from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| WiresimError::CircuitParse { source })
    }

    /// Serialize the circuit to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| WiresimError::CircuitSerialize { source })
    }

    /// Load a circuit from a JSON file.
    #[cfg(feature = "cli")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WiresimError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }
}

/// A directed edge in the adjacency graph.
///
/// `link_index` resolves into the circuit's link list; edges never clone
/// links.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The node this edge leads to.
    pub target_node_id: String,
    /// Index of the originating link in `Circuit::links`.
    pub link_index: usize,
}

/// Derived adjacency structure: node id to outgoing edges.
///
/// Ephemeral — built fresh per simulation call from a circuit's link list
/// and discarded on return. Each link contributes one edge per direction, so
/// traversal is effectively undirected despite the links' stored direction.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    edges: HashMap<String, Vec<Edge>>,
}

impl AdjacencyGraph {
    /// Get the outgoing edges of a node, in link declaration order.
    ///
    /// Returns an empty slice for nodes with no connections (or unknown
    /// ids).
    pub fn edges_from(&self, node_id: &str) -> &[Edge] {
        self.edges.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build the adjacency graph for a circuit.
///
/// Pure function; the returned graph borrows nothing and holds indices into
/// the circuit's link list.
pub fn build_graph(circuit: &Circuit) -> AdjacencyGraph {
    let mut edges: HashMap<String, Vec<Edge>> = HashMap::new();

    for (idx, link) in circuit.links.iter().enumerate() {
        edges
            .entry(link.from_node_id.clone())
            .or_default()
            .push(Edge {
                target_node_id: link.to_node_id.clone(),
                link_index: idx,
            });
        edges.entry(link.to_node_id.clone()).or_default().push(Edge {
            target_node_id: link.from_node_id.clone(),
            link_index: idx,
        });
    }

    AdjacencyGraph { edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::types::{LinkBehavior, NodeKind};

    fn two_link_circuit() -> Circuit {
        Circuit {
            id: "c1".to_string(),
            name: "Fan-out".to_string(),
            nodes: vec![
                Node::new("a", "A", NodeKind::Source),
                Node::new("b", "B", NodeKind::Receptor),
                Node::new("c", "C", NodeKind::Receptor),
            ],
            links: vec![
                Link::new("l1", "A-B", "a", "b", LinkBehavior::AlwaysConducting),
                Link::new("l2", "A-C", "a", "c", LinkBehavior::AlwaysConducting),
            ],
            states: vec![],
            source_node_id: "a".to_string(),
            neutral_node_id: "b".to_string(),
            receptor_node_ids: vec!["b".to_string(), "c".to_string()],
        }
    }

    #[test]
    fn test_bidirectional_edges() {
        let circuit = two_link_circuit();
        let graph = build_graph(&circuit);

        let from_a = graph.edges_from("a");
        assert!(from_a.iter().any(|e| e.target_node_id == "b"));

        let from_b = graph.edges_from("b");
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_b[0].target_node_id, "a");
        assert_eq!(from_b[0].link_index, 0);
    }

    #[test]
    fn test_fan_out_preserves_declaration_order() {
        let circuit = two_link_circuit();
        let graph = build_graph(&circuit);

        let from_a = graph.edges_from("a");
        assert_eq!(from_a.len(), 2);
        assert_eq!(from_a[0].target_node_id, "b");
        assert_eq!(from_a[1].target_node_id, "c");
    }

    #[test]
    fn test_unknown_node_has_no_edges() {
        let circuit = two_link_circuit();
        let graph = build_graph(&circuit);
        assert!(graph.edges_from("zz").is_empty());
    }

    #[test]
    fn test_circuit_json_round_trip() {
        let circuit = two_link_circuit();
        let json = circuit.to_json().unwrap();

        // Wire contract: camelCase field names
        assert!(json.contains("\"sourceNodeId\""));
        assert!(json.contains("\"receptorNodeIds\""));
        assert!(json.contains("\"fromNodeId\""));
        assert!(json.contains("\"always_conducting\""));

        let parsed = Circuit::from_json(&json).unwrap();
        assert_eq!(parsed, circuit);
    }

    #[test]
    fn test_behavior_json_carries_state_id() {
        let json = r#"{"kind":"normally_open","stateId":"sw1"}"#;
        let behavior: LinkBehavior = serde_json::from_str(json).unwrap();
        assert_eq!(behavior.state_id(), Some("sw1"));
    }
}
