//! `VertexId`: a strong, zero-cost handle for graph vertices
//!
//! Every vertex of an input graph is renumbered to a positive integer by
//! [`EdgeGraph::update`](crate::graph::EdgeGraph::update). `VertexId` wraps a
//! nonzero `u32` so that 0 stays reserved as an invalid/sentinel value and so
//! vertex handles cannot be confused with edge positions or frontier slots.

use std::{fmt, num::NonZeroU32};

use crate::orient_error::OrientError;

/// Largest vertex number the edge-list numbering will assign.
pub const MAX_VERTICES: usize = u16::MAX as usize;

/// Opaque, nonzero vertex handle.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU32`, so `Option<VertexId>` is
/// pointer-niche optimized and a `VertexId` slice can be viewed as raw `u32`s.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(NonZeroU32);

impl VertexId {
    /// Creates a new `VertexId` from a raw `u32` value.
    ///
    /// # Errors
    /// Returns [`OrientError::InvalidVertexId`] if `raw == 0`.
    #[inline]
    pub fn new(raw: u32) -> Result<Self, OrientError> {
        NonZeroU32::new(raw)
            .map(VertexId)
            .ok_or(OrientError::InvalidVertexId)
    }

    /// Returns the inner `u32` value of this `VertexId`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the value as a `usize`, convenient for indexing per-vertex tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.get()).finish()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
