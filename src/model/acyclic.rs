//! Acyclic-orientation constraint: incremental transitive closure over the
//! frontier.
//!
//! The state is a reachability relation restricted to alive (frontier)
//! vertices: `rel[u]` is the set of vertices reachable from `u` along the
//! directed edges decided so far, reflexive for every vertex that has had
//! an incident edge decided. Directing `u -> v` is illegal exactly when `v`
//! already reaches `u`; on acceptance, everything that reaches `u` absorbs
//! everything `v` reaches. When a vertex leaves the frontier its entry is
//! dropped and it is removed from every other entry, so memory is bounded
//! by frontier width rather than graph size.
//!
//! Ordered collections keep the state canonical: two branches with the
//! same relation over the same alive vertices compare and hash equal, and
//! the compiler merges them.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::edge_list::EdgeGraph;
use crate::graph::frontier::FrontierPlan;
use crate::graph::vertex::VertexId;
use crate::model::{Direction, FrontierModel, Step};

/// Reachability relation over alive vertices.
pub type ClosureState = BTreeMap<VertexId, BTreeSet<VertexId>>;

/// Frontier state machine accepting exactly the acyclic orientations.
pub struct AcyclicClosureModel<'g> {
    graph: &'g EdgeGraph,
    plan: FrontierPlan,
    m: usize,
}

impl<'g> AcyclicClosureModel<'g> {
    pub fn new(graph: &'g EdgeGraph) -> Self {
        let plan = FrontierPlan::new(graph);
        let m = graph.edge_count();
        AcyclicClosureModel { graph, plan, m }
    }

    /// Extend the closure with the directed edge `u -> v`.
    fn absorb(rel: &mut ClosureState, u: VertexId, v: VertexId) {
        rel.entry(u).or_default().insert(u);
        rel.entry(v).or_default().insert(v);
        let via: BTreeSet<VertexId> = match rel.get(&v) {
            Some(set) => set.clone(),
            None => return,
        };
        let holders: Vec<VertexId> = rel
            .iter()
            .filter(|(_, set)| set.contains(&u))
            .map(|(w, _)| *w)
            .collect();
        for w in holders {
            if let Some(set) = rel.get_mut(&w) {
                set.extend(via.iter().copied());
            }
        }
    }

    /// Purge a vertex that left the frontier from the whole relation.
    fn drop_vertex(rel: &mut ClosureState, v: VertexId) {
        rel.remove(&v);
        for set in rel.values_mut() {
            set.remove(&v);
        }
    }
}

impl FrontierModel for AcyclicClosureModel<'_> {
    type State = ClosureState;

    fn root(&self) -> (Self::State, usize) {
        (ClosureState::new(), self.m)
    }

    fn child(&self, rel: &mut Self::State, level: usize, dir: Direction) -> Step {
        let a = self.m - level;
        let e = self.graph.edge(a);
        let (u, v) = match dir {
            Direction::Forward => (e.v1, e.v2),
            Direction::Reverse => (e.v2, e.v1),
        };
        // A self-loop closes a cycle under either direction.
        if u == v {
            return Step::Reject;
        }
        // u -> v closes a cycle iff v already reaches u.
        if rel.get(&v).is_some_and(|set| set.contains(&u)) {
            return Step::Reject;
        }
        Self::absorb(rel, u, v);
        for &w in self.plan.leaving(a) {
            Self::drop_vertex(rel, w);
        }
        if level == 1 { Step::Terminal } else { Step::Next(level - 1) }
    }
}
