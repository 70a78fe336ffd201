//! Compiled diagram queries: exact counting, enumeration, and dot dumps.

use std::io::{self, Write};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::dd::node::{Node, NodeArena, NodeId};
use crate::model::Direction;

/// Canonical, shared representation of every assignment that reaches the
/// accepting terminal without rejection.
///
/// Levels count down from [`Diagram::level_count`] to 1; the assignment for
/// the edge at position `a` lives at level `m - a`. A level absent from a
/// root-to-terminal path (zero-suppressed) is a forced 0-branch
/// ([`Direction::Forward`]).
#[derive(Clone, Debug)]
pub struct Diagram {
    arena: NodeArena,
    root: NodeId,
    level_count: usize,
}

impl Diagram {
    pub(crate) fn new(arena: NodeArena, root: NodeId, level_count: usize) -> Self {
        Diagram {
            arena,
            root,
            level_count,
        }
    }

    /// Diagram over zero levels holding exactly the empty assignment.
    pub(crate) fn trivial_accept() -> Self {
        Diagram {
            arena: NodeArena::new(),
            root: NodeId::ONE,
            level_count: 0,
        }
    }

    /// Root handle (may be a terminal for degenerate diagrams).
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of levels (the edge count of the compiled graph).
    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Branching node behind `id`; `None` for terminals.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        (!id.is_terminal()).then(|| self.arena.node(id))
    }

    /// Number of branching (non-terminal) nodes.
    pub fn node_count(&self) -> usize {
        self.arena.len() - 2
    }

    /// Exact number of assignments represented.
    ///
    /// Children are always interned before parents, so a single ascending
    /// sweep over the arena resolves every count without recursion.
    pub fn cardinality(&self) -> BigUint {
        let mut memo: Vec<BigUint> = Vec::with_capacity(self.arena.len());
        memo.push(BigUint::zero()); // ⊥
        memo.push(BigUint::one()); // ⊤
        for i in 2..self.arena.len() {
            let node = self.arena.node(NodeId::at(i));
            let count = &memo[node.lo.index()] + &memo[node.hi.index()];
            memo.push(count);
        }
        memo[self.root.index()].clone()
    }

    /// Materialize every represented assignment, one [`Direction`] per edge
    /// position.
    ///
    /// Output size is the cardinality; callers should bound it themselves.
    pub fn solutions(&self) -> Vec<Vec<Direction>> {
        let mut out = Vec::new();
        if self.root == NodeId::ZERO {
            return out;
        }
        let mut path = vec![Direction::Forward; self.level_count];
        self.walk(self.root, self.level_count, &mut path, &mut out);
        out
    }

    fn walk(
        &self,
        id: NodeId,
        expected: usize,
        path: &mut Vec<Direction>,
        out: &mut Vec<Vec<Direction>>,
    ) {
        let m = self.level_count;
        if id == NodeId::ZERO {
            return;
        }
        if id == NodeId::ONE {
            // Suppressed levels below are forced 0-branches.
            for level in 1..=expected {
                path[m - level] = Direction::Forward;
            }
            out.push(path.clone());
            return;
        }
        let node = *self.arena.node(id);
        let level = node.level as usize;
        for skipped in (level + 1)..=expected {
            path[m - skipped] = Direction::Forward;
        }
        path[m - level] = Direction::Forward;
        self.walk(node.lo, level - 1, path, out);
        path[m - level] = Direction::Reverse;
        self.walk(node.hi, level - 1, path, out);
    }

    /// Write the diagram in Graphviz `dot` form: 0-arcs dashed, 1-arcs
    /// solid, terminals boxed.
    pub fn dump_dot<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "digraph {{")?;
        writeln!(w, "  t1 [label=\"⊤\",shape=box];")?;
        if self.root == NodeId::ONE {
            writeln!(w, "}}")?;
            return Ok(());
        }
        writeln!(w, "  t0 [label=\"⊥\",shape=box];")?;
        for i in 2..self.arena.len() {
            let node = self.arena.node(NodeId::at(i));
            writeln!(w, "  n{i} [label=\"{}\"];", node.level)?;
            writeln!(w, "  n{i} -> {} [style=dashed];", dot_name(node.lo))?;
            writeln!(w, "  n{i} -> {};", dot_name(node.hi))?;
        }
        writeln!(w, "}}")
    }
}

fn dot_name(id: NodeId) -> String {
    match id {
        NodeId::ZERO => "t0".to_string(),
        NodeId::ONE => "t1".to_string(),
        other => format!("n{}", other.index()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dd::build::compile;
    use crate::graph::EdgeGraph;
    use crate::model::AcyclicClosureModel;
    use num_traits::ToPrimitive;

    #[test]
    fn single_edge_has_two_solutions() {
        let g = EdgeGraph::from_pairs([("a", "b")]).unwrap();
        let dd = compile(&AcyclicClosureModel::new(&g));
        assert_eq!(dd.cardinality().to_u64(), Some(2));
        let mut sols = dd.solutions();
        sols.sort();
        assert_eq!(
            sols,
            vec![vec![Direction::Forward], vec![Direction::Reverse]]
        );
    }

    #[test]
    fn triangle_enumerates_six_acyclic_orientations() {
        let g = EdgeGraph::from_pairs([("a", "b"), ("b", "c"), ("a", "c")]).unwrap();
        let dd = compile(&AcyclicClosureModel::new(&g));
        assert_eq!(dd.cardinality().to_u64(), Some(6));
        let sols = dd.solutions();
        assert_eq!(sols.len(), 6);
        // Solutions are distinct full assignments.
        let mut dedup = sols.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 6);
    }

    #[test]
    fn dot_dump_names_every_node() {
        let g = EdgeGraph::from_pairs([("a", "b"), ("b", "c"), ("a", "c")]).unwrap();
        let dd = compile(&AcyclicClosureModel::new(&g));
        let mut out = Vec::new();
        dd.dump_dot(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("digraph {"));
        assert_eq!(
            text.matches(" [label=").count(),
            dd.node_count() + 2,
            "one label per node plus terminals"
        );
    }
}
