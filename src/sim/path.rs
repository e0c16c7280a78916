//! State-aware path finding over the adjacency graph.

use std::collections::{HashMap, HashSet};

use crate::circuit::{AdjacencyGraph, Circuit, LinkBehavior};

/// The merged control-state view used for one simulation call.
///
/// Defaults come from the circuit; the caller's overrides take precedence
/// per state id. Computed once per call and read-only afterwards — the
/// circuit's own [`ControlState`](crate::circuit::ControlState) values are
/// never touched.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    resolved: HashMap<String, bool>,
}

impl StateSnapshot {
    /// Merge a circuit's state defaults with per-call overrides.
    ///
    /// Override entries for state ids the circuit does not declare are
    /// ignored.
    pub fn resolve(circuit: &Circuit, overrides: &HashMap<String, bool>) -> Self {
        let resolved = circuit
            .states
            .iter()
            .map(|state| {
                let effective = overrides.get(&state.id).copied().unwrap_or(state.is_active);
                (state.id.clone(), effective)
            })
            .collect();
        Self { resolved }
    }

    /// Effective activity of a state. Undeclared ids resolve to inactive.
    pub fn is_active(&self, state_id: &str) -> bool {
        self.resolved.get(state_id).copied().unwrap_or(false)
    }

    /// Whether a link conducts under this snapshot.
    pub fn conducts(&self, behavior: &LinkBehavior) -> bool {
        let state_active = behavior
            .state_id()
            .map(|id| self.is_active(id))
            .unwrap_or(false);
        behavior.conducts_when(state_active)
    }
}

/// Outcome of a path search between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearch {
    /// Whether the end node was reached.
    pub found: bool,
    /// Link ids of the conducting path, in traversal order. Empty when not
    /// found (and for the trivial start == end search).
    pub path: Vec<String>,
    /// On failure, the first link encountered during traversal that failed
    /// its conduction test. Best-effort diagnostic, not a minimal cut: with
    /// several dead ends the first one in traversal order wins.
    pub cutoff_link_id: Option<String>,
}

/// Search for a conducting path from `start` to `end`.
///
/// Depth-first, following adjacency declaration order, visiting each node at
/// most once. The traversal order is part of the contract: it decides which
/// path is reported when several exist, and which blocked link gets blamed
/// when none does.
///
/// Assumes a validated circuit; dangling references are rejected upstream by
/// [`validate_circuit`](crate::circuit::validate_circuit).
pub fn find_path(
    graph: &AdjacencyGraph,
    circuit: &Circuit,
    start: &str,
    end: &str,
    snapshot: &StateSnapshot,
) -> PathSearch {
    if start == end {
        return PathSearch {
            found: true,
            path: Vec::new(),
            cutoff_link_id: None,
        };
    }

    let mut visited = HashSet::new();
    visited.insert(start.to_string());

    let mut path = Vec::new();
    let mut cutoff: Option<String> = None;

    let found = dfs(
        graph,
        circuit,
        start,
        end,
        snapshot,
        &mut visited,
        &mut path,
        &mut cutoff,
    );

    if found {
        PathSearch {
            found: true,
            path,
            cutoff_link_id: None,
        }
    } else {
        PathSearch {
            found: false,
            path: Vec::new(),
            cutoff_link_id: cutoff,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs(
    graph: &AdjacencyGraph,
    circuit: &Circuit,
    current: &str,
    end: &str,
    snapshot: &StateSnapshot,
    visited: &mut HashSet<String>,
    path: &mut Vec<String>,
    cutoff: &mut Option<String>,
) -> bool {
    for edge in graph.edges_from(current) {
        let link = &circuit.links[edge.link_index];

        if !snapshot.conducts(&link.behavior) {
            tracing::trace!(link = %link.id, "link blocked");
            if cutoff.is_none() {
                *cutoff = Some(link.id.clone());
            }
            continue;
        }

        if visited.contains(edge.target_node_id.as_str()) {
            continue;
        }
        visited.insert(edge.target_node_id.clone());

        path.push(link.id.clone());
        if edge.target_node_id == end {
            return true;
        }
        if dfs(
            graph,
            circuit,
            &edge.target_node_id,
            end,
            snapshot,
            visited,
            path,
            cutoff,
        ) {
            return true;
        }
        path.pop();
    }

    false
}
