//! # orient-dd
//!
//! orient-dd counts and enumerates the acyclic orientations of an undirected
//! graph (edge-direction assignments producing no directed cycle) together
//! with the Eulerian-balanced variant, for combinatorics research where the
//! solution family is astronomically large but compresses into a compact,
//! shareable structure.
//!
//! ## How it works
//! - An input edge list is frozen into a [`graph::EdgeGraph`] with a
//!   deterministic vertex numbering chosen to keep the *frontier* (vertices
//!   with both processed and unprocessed incident edges) narrow.
//! - A [`model::FrontierModel`] tracks exactly the state that must survive
//!   at the frontier (an incremental reachability closure for acyclicity,
//!   or in/out degree counters for balance) and rejects a partial choice
//!   the moment it becomes provably illegal.
//! - The [`dd`] engine compiles a model into a canonical hash-consed
//!   decision diagram whose root-to-terminal paths are exactly the valid
//!   orientations, counted exactly with big integers.
//! - The [`solve`] driver decomposes the graph into biconnected components
//!   and bridges, builds one diagram per component concurrently, and
//!   combines cardinalities multiplicatively with a free factor of 2 per
//!   bridge. A standalone backtracking enumerator provides an independent
//!   correctness baseline.
//!
//! ## Determinism
//! Everything is deterministic for a fixed input edge order: numbering,
//! diagram structure, counts, and enumeration order. Randomized tests fix
//! their seeds explicitly.
//!
//! ## Example
//! ```rust
//! use orient_dd::prelude::*;
//!
//! let g = EdgeGraph::parse_edge_list("a b\nb c\na c\n")?;
//! let report = count_acyclic_orientations(&g, &SolveOptions::default())?;
//! assert_eq!(report.total, 6u32.into());
//! # Ok::<(), orient_dd::OrientError>(())
//! ```

pub mod dd;
pub mod graph;
pub mod model;
pub mod orient_error;
pub mod solve;

pub use orient_error::OrientError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::dd::{Diagram, NodeId, compile};
    pub use crate::graph::{
        BridgeMode, Decomposition, EdgeGraph, FrontierPlan, VertexId, decompose, find_bridges,
    };
    pub use crate::model::{
        AcyclicClosureModel, Direction, EulerianBalanceModel, FrontierModel, Step,
    };
    pub use crate::orient_error::OrientError;
    pub use crate::solve::{
        CountReport, SolveOptions, count_acyclic_orientations, count_by_backtracking,
        count_eulerian_orientations, enumerate_acyclic, orientation_is_acyclic, solve_single,
        write_orientations,
    };
}
