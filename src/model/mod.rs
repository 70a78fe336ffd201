//! Frontier state machines for orientation constraints.
//!
//! Each model implements the one contract the diagram compiler consumes:
//! a root state at the top level, and a transition that applies one edge
//! direction, folds newly entering vertices in, purges leaving vertices,
//! and reports whether the branch survives. Levels count down from the
//! edge count `m` to 1; the edge decided at level `l` is `m - l`, and a
//! surviving transition at level 1 is terminal: every path that reaches
//! the terminal without rejection is one valid orientation.
//!
//! State is owned per branch: the compiler clones it before each branch
//! split, so a transition may mutate its state freely without interfering
//! with sibling branches.

pub mod acyclic;
pub mod eulerian;

pub use acyclic::AcyclicClosureModel;
pub use eulerian::EulerianBalanceModel;

use std::fmt::Debug;
use std::hash::Hash;

/// Direction assigned to an edge `(v1, v2)` with `v1 < v2`.
///
/// `Forward` is the 0-branch (`v1 -> v2`), `Reverse` the 1-branch
/// (`v2 -> v1`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Both directions in branch order (0-branch first).
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Reverse];

    /// Branch value of this direction: `Forward` = 0, `Reverse` = 1.
    #[inline]
    pub fn branch(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => 1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Outcome of applying one edge direction to a state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The branch corresponds to no valid complete orientation.
    Reject,
    /// The branch survives; continue at the given (lower) level.
    Next(usize),
    /// The branch survives and the sequence is exhausted: one valid
    /// orientation per path reaching here.
    Terminal,
}

/// State-machine contract consumed by the diagram compiler.
pub trait FrontierModel {
    /// Per-branch state. Cloned on every branch split; hashing and equality
    /// drive state merging, so equal states must be indistinguishable for
    /// all remaining edges.
    type State: Clone + Eq + Hash + Debug;

    /// State before any edge is decided, and the top level (the edge count).
    fn root(&self) -> (Self::State, usize);

    /// Apply the direction chosen for the edge at `level` to `state`.
    fn child(&self, state: &mut Self::State, level: usize, dir: Direction) -> Step;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_values_match_arc_convention() {
        assert_eq!(Direction::Forward.branch(), 0);
        assert_eq!(Direction::Reverse.branch(), 1);
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
    }
}
