//! Reachability-based power-flow simulation.
//!
//! Simulation answers one question per receptor: does a conducting path
//! exist from the circuit's source to that receptor under the effective
//! control-state snapshot?
//!
//! The computation is pure, synchronous, and bounded: the adjacency graph is
//! rebuilt per call from the circuit's link list, each node is visited at
//! most once, so the work is linear in the number of links. There is no
//! shared mutable state across calls — simulations on the same circuit can
//! run concurrently without locking.
//!
//! When a receptor is unreachable, the traversal reports the first link it
//! saw fail its conduction test as the cutoff point. That is a diagnostic
//! convenience tied to traversal order, not a minimal cut.

mod path;
mod simulator;

pub use path::{find_path, PathSearch, StateSnapshot};
pub use simulator::{simulate_circuit, Simulator};
