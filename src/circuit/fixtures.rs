//! Reference circuits used by tests and documentation.

use super::graph::Circuit;
use super::types::{ControlState, Link, LinkBehavior, Node, NodeKind};

/// The canonical single-lamp lighting circuit.
///
/// ```text
/// source --(l1: breaker, NC)--> j1 --(l2: switch, NO)--> lamp --(l3)--> neutral
/// ```
///
/// Both control states default to inactive, so out of the box the breaker
/// conducts (NC) and the switch blocks (NO): the lamp is not powered and the
/// switch is the cutoff point.
pub fn simple_lighting_circuit() -> Circuit {
    Circuit {
        id: "lighting-demo".to_string(),
        name: "Simple lighting circuit".to_string(),
        nodes: vec![
            Node::new("source", "Phase", NodeKind::Source),
            Node::new("j1", "Junction", NodeKind::Intermediate),
            Node::new("lamp", "Lamp", NodeKind::Receptor),
            Node::new("neutral", "Neutral", NodeKind::Neutral),
        ],
        links: vec![
            Link::new(
                "l1",
                "Circuit breaker",
                "source",
                "j1",
                LinkBehavior::NormallyClosed {
                    state_id: "breaker".to_string(),
                },
            ),
            Link::new(
                "l2",
                "Light switch",
                "j1",
                "lamp",
                LinkBehavior::NormallyOpen {
                    state_id: "switch".to_string(),
                },
            ),
            Link::new(
                "l3",
                "Return wire",
                "lamp",
                "neutral",
                LinkBehavior::AlwaysConducting,
            ),
        ],
        states: vec![
            ControlState::new("breaker", "Circuit breaker", false),
            ControlState::new("switch", "Light switch", false),
        ],
        source_node_id: "source".to_string(),
        neutral_node_id: "neutral".to_string(),
        receptor_node_ids: vec!["lamp".to_string()],
    }
}

/// Two receptors, each gated by its own switch.
///
/// Used to check that toggling one switch leaves the other receptor's
/// result untouched.
pub fn dual_receptor_circuit() -> Circuit {
    Circuit {
        id: "dual-demo".to_string(),
        name: "Two independently switched lamps".to_string(),
        nodes: vec![
            Node::new("source", "Phase", NodeKind::Source),
            Node::new("lamp1", "Lamp 1", NodeKind::Receptor),
            Node::new("lamp2", "Lamp 2", NodeKind::Receptor),
            Node::new("neutral", "Neutral", NodeKind::Neutral),
        ],
        links: vec![
            Link::new(
                "d1",
                "Switch 1",
                "source",
                "lamp1",
                LinkBehavior::NormallyOpen {
                    state_id: "sw1".to_string(),
                },
            ),
            Link::new(
                "d2",
                "Switch 2",
                "source",
                "lamp2",
                LinkBehavior::NormallyOpen {
                    state_id: "sw2".to_string(),
                },
            ),
        ],
        states: vec![
            ControlState::new("sw1", "Switch 1", false),
            ControlState::new("sw2", "Switch 2", false),
        ],
        source_node_id: "source".to_string(),
        neutral_node_id: "neutral".to_string(),
        receptor_node_ids: vec!["lamp1".to_string(), "lamp2".to_string()],
    }
}
