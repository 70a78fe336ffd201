//! Decision-diagram engine: hash-consed node arena, top-down compilation,
//! and diagram queries.
//!
//! The engine knows nothing about graphs: it compiles any
//! [`FrontierModel`](crate::model::FrontierModel) into a canonical shared
//! diagram whose root-to-terminal paths are exactly the assignments the
//! model accepts.

pub mod build;
pub mod diagram;
pub mod node;

pub use build::compile;
pub use diagram::Diagram;
pub use node::{Node, NodeId};
