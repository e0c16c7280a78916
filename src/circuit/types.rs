//! Core types for circuit representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a node plays in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The "hot" terminal power flows out of.
    Source,
    /// A power consumer whose energization status is the output of interest.
    Receptor,
    /// A junction or terminal strip with no electrical role of its own.
    Intermediate,
    /// The return terminal.
    Neutral,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Source => write!(f, "source"),
            NodeKind::Receptor => write!(f, "receptor"),
            NodeKind::Intermediate => write!(f, "intermediate"),
            NodeKind::Neutral => write!(f, "neutral"),
        }
    }
}

/// A terminal in the circuit.
///
/// Nodes are immutable once a [`Circuit`](super::Circuit) is constructed;
/// links reference them by id, never by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl Node {
    /// Create a new node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// The conduction rule for a link.
///
/// A link either conducts unconditionally, or is a contact gated by a
/// [`ControlState`]: a normally-open (NO) contact conducts only while its
/// state is active, a normally-closed (NC) contact only while it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkBehavior {
    /// Conducts unconditionally (a plain wire).
    AlwaysConducting,
    /// NO contact: conducts iff the referenced control state is active.
    NormallyOpen {
        #[serde(rename = "stateId")]
        state_id: String,
    },
    /// NC contact: conducts iff the referenced control state is inactive.
    NormallyClosed {
        #[serde(rename = "stateId")]
        state_id: String,
    },
}

impl LinkBehavior {
    /// The control state this behavior depends on, if any.
    pub fn state_id(&self) -> Option<&str> {
        match self {
            LinkBehavior::AlwaysConducting => None,
            LinkBehavior::NormallyOpen { state_id } | LinkBehavior::NormallyClosed { state_id } => {
                Some(state_id)
            }
        }
    }

    /// Whether the link conducts given the resolved activity of its state.
    ///
    /// `state_active` is ignored for [`LinkBehavior::AlwaysConducting`].
    pub fn conducts_when(&self, state_active: bool) -> bool {
        match self {
            LinkBehavior::AlwaysConducting => true,
            LinkBehavior::NormallyOpen { .. } => state_active,
            LinkBehavior::NormallyClosed { .. } => !state_active,
        }
    }
}

/// A connection between two nodes.
///
/// The stored direction is descriptive only: once conducting, current can
/// flow either way across the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub name: String,
    pub from_node_id: String,
    pub to_node_id: String,
    pub behavior: LinkBehavior,
}

impl Link {
    /// Create a new link.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        from_node_id: impl Into<String>,
        to_node_id: impl Into<String>,
        behavior: LinkBehavior,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            from_node_id: from_node_id.into(),
            to_node_id: to_node_id.into(),
            behavior,
        }
    }
}

/// A named boolean toggle (switch, breaker, relay coil).
///
/// `is_active` is the default baked into the circuit; simulation calls may
/// override it without mutating the circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

impl ControlState {
    /// Create a new control state.
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
        }
    }
}
