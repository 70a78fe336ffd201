//! Graph model: numbering, frontier bookkeeping, and decomposition.
//!
//! This module provides the core types for representing input graphs:
//! - [`EdgeGraph`], the edge-list graph with its fixed vertex/edge numbering
//! - [`FrontierPlan`], the per-edge frontier entry/exit schedule
//! - Bridge finding and biconnected-component extraction in [`decompose`]

pub mod decompose;
pub mod edge_list;
pub mod frontier;
pub mod vertex;

pub use decompose::{BridgeMode, DEFAULT_BRIDGE_CAP, Decomposition, decompose, find_bridges};
pub use edge_list::{EdgeGraph, EdgeIdx, EdgeInfo};
pub use frontier::FrontierPlan;
pub use vertex::{MAX_VERTICES, VertexId};
