//! Circuit representation, adjacency graph, and validation.
//!
//! This module provides the value types a circuit is made of and the
//! derived adjacency structure the simulator traverses. A [`Circuit`] is an
//! arena of nodes, links, and control states referenced by id — flat,
//! immutable, and trivially serializable.

pub mod fixtures;
mod graph;
mod types;
mod validate;

pub use graph::{build_graph, AdjacencyGraph, Circuit, Edge};
pub use types::*;
pub use validate::validate_circuit;
