//! Shared board: the card structure of the current age and the military track.
//!
//! ## Key Types
//!
//! - `Graph<T>`: immutable adjacency-matrix graph with optional vertex payloads
//! - `Topology`: constant layout of one age (face-up slots and edges)
//! - `CardStructure`: age graph plus the residual deck, reveals on removal
//! - `MilitaryBoard`: conflict pawn and looting tokens

pub mod graph;
pub mod military;
pub mod structure;
pub mod topology;

pub use graph::Graph;
pub use military::{LootingTokens, MilitaryBoard, SUPREMACY_DISTANCE};
pub use structure::{CardSlot, CardStructure};
pub use topology::{Topology, AGE_I, AGE_II, AGE_III, VERTEX_COUNT};
