//! Backtracking enumerator: explicit vertex-by-vertex generation of all
//! acyclic orientations.
//!
//! Independent of the diagram engine, this is the correctness baseline for
//! small instances: vertices are taken in numbering order, and for each one
//! every direction assignment toward its already-processed neighbors is
//! tried, keeping only assignments whose induced orientation on the
//! processed prefix stays acyclic. Pruning a vertex therefore prunes the
//! whole subtree of later choices, instead of filtering complete
//! assignments at the end.
//!
//! The work-list is an explicit frame stack, so depth never touches the
//! call stack regardless of vertex count.

use crate::graph::edge_list::{EdgeGraph, EdgeIdx};
use crate::graph::vertex::VertexId;
use crate::model::Direction;

/// Orientation of one edge by position; `None` while still undecided.
type Partial = Vec<Option<Direction>>;

struct Frame {
    /// Vertex (by number) whose incident directions this frame decides.
    vertex: u32,
    /// Orientation before this vertex's edges are decided.
    base: Partial,
    /// Legal assignments not yet explored, popped back-to-front.
    pending: Vec<Vec<(EdgeIdx, Direction)>>,
}

/// Generate every acyclic orientation of `graph`, one [`Direction`] per
/// edge position.
///
/// Output size is exponential in general; intended for baseline checks on
/// small instances. A graph with no edges yields the single empty
/// orientation.
pub fn enumerate_acyclic(graph: &EdgeGraph) -> Vec<Vec<Direction>> {
    let n = graph.vertex_count() as u32;
    let m = graph.edge_count();
    if n == 0 {
        return vec![Vec::new()];
    }
    // A self-loop closes a cycle under either direction.
    if graph.edges().iter().any(|e| e.v1 == e.v2) {
        return Vec::new();
    }
    let adj = graph.adjacency();

    let mut results = Vec::new();
    let mut stack = vec![make_frame(graph, &adj, 1, vec![None; m])];
    while let Some(top) = stack.last_mut() {
        let Some(assign) = top.pending.pop() else {
            stack.pop();
            continue;
        };
        let mut next = top.base.clone();
        for &(e, d) in &assign {
            next[e] = Some(d);
        }
        if top.vertex == n {
            let full: Vec<Direction> = next.into_iter().flatten().collect();
            debug_assert_eq!(full.len(), m, "complete assignment must cover all edges");
            results.push(full);
        } else {
            let vertex = top.vertex + 1;
            let frame = make_frame(graph, &adj, vertex, next);
            stack.push(frame);
        }
    }
    results
}

/// Number of acyclic orientations found by backtracking.
pub fn count_by_backtracking(graph: &EdgeGraph) -> usize {
    enumerate_acyclic(graph).len()
}

/// Check a complete orientation for acyclicity by in-degree-zero queue
/// elimination.
pub fn orientation_is_acyclic(graph: &EdgeGraph, dirs: &[Direction]) -> bool {
    let decided: Partial = dirs.iter().map(|&d| Some(d)).collect();
    prefix_is_acyclic(graph, &decided, graph.vertex_count() as u32)
}

fn make_frame(
    graph: &EdgeGraph,
    adj: &[Vec<(VertexId, EdgeIdx)>],
    vertex: u32,
    base: Partial,
) -> Frame {
    // Neighbors already processed are exactly those with smaller numbers.
    let processed: Vec<(VertexId, EdgeIdx)> = adj[vertex as usize]
        .iter()
        .copied()
        .filter(|(w, _)| w.get() < vertex)
        .collect();
    let ordered = topo_sort_neighbors(
        graph,
        &base,
        &processed.iter().map(|&(w, _)| w).collect::<Vec<_>>(),
    );
    let edge_of = |w: VertexId| -> Option<EdgeIdx> {
        processed
            .iter()
            .find(|&&(p, _)| p == w)
            .map(|&(_, e)| e)
    };

    let k = ordered.len();
    let mut pending = Vec::new();
    // Descending bit patterns so exploration pops them in ascending order.
    for bits in (0..(1usize << k)).rev() {
        let mut assign = Vec::with_capacity(k);
        for (j, &w) in ordered.iter().enumerate() {
            let Some(e) = edge_of(w) else { continue };
            // Edges store the smaller endpoint first, and w < vertex, so
            // neighbor-to-vertex is the forward direction.
            let dir = if bits >> j & 1 == 1 {
                Direction::Forward
            } else {
                Direction::Reverse
            };
            assign.push((e, dir));
        }
        let mut trial = base.clone();
        for &(e, d) in &assign {
            trial[e] = Some(d);
        }
        if prefix_is_acyclic(graph, &trial, vertex) {
            pending.push(assign);
        }
    }
    Frame {
        vertex,
        base,
        pending,
    }
}

/// Fix a deterministic neighbor order consistent with the directions
/// already decided among the neighbors themselves.
fn topo_sort_neighbors(graph: &EdgeGraph, base: &Partial, neighbors: &[VertexId]) -> Vec<VertexId> {
    let k = neighbors.len();
    if k == 0 {
        return Vec::new();
    }
    let pos = |w: VertexId| neighbors.iter().position(|&x| x == w);
    let mut in_deg = vec![0usize; k];
    let mut succ: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &u) in neighbors.iter().enumerate() {
        for &w in &neighbors[i + 1..] {
            let Some(e) = graph.edge_between(u, w) else {
                continue;
            };
            let Some(dir) = base[e] else { continue };
            let info = graph.edge(e);
            let (src, dst) = match dir {
                Direction::Forward => (info.v1, info.v2),
                Direction::Reverse => (info.v2, info.v1),
            };
            if let (Some(s), Some(d)) = (pos(src), pos(dst)) {
                succ[s].push(d);
                in_deg[d] += 1;
            }
        }
    }
    let mut queue: Vec<usize> = (0..k).filter(|&i| in_deg[i] == 0).collect();
    let mut order = Vec::with_capacity(k);
    let mut head = 0;
    while head < queue.len() {
        let i = queue[head];
        head += 1;
        order.push(neighbors[i]);
        for &d in &succ[i] {
            in_deg[d] -= 1;
            if in_deg[d] == 0 {
                queue.push(d);
            }
        }
    }
    // The decided prefix is acyclic, so the sort always completes.
    debug_assert_eq!(order.len(), k);
    order
}

/// Kahn elimination over the decided edges among vertices `1..=upto`.
fn prefix_is_acyclic(graph: &EdgeGraph, decided: &Partial, upto: u32) -> bool {
    let count = upto as usize;
    let mut in_deg = vec![0usize; count + 1];
    let mut succ: Vec<Vec<u32>> = vec![Vec::new(); count + 1];
    for (a, e) in graph.edges().iter().enumerate() {
        if e.v1.get() > upto || e.v2.get() > upto {
            continue;
        }
        let Some(dir) = decided[a] else { continue };
        let (src, dst) = match dir {
            Direction::Forward => (e.v1, e.v2),
            Direction::Reverse => (e.v2, e.v1),
        };
        succ[src.index()].push(dst.get());
        in_deg[dst.index()] += 1;
    }
    let mut queue: Vec<u32> = (1..=upto).filter(|&v| in_deg[v as usize] == 0).collect();
    let mut processed = 0usize;
    let mut head = 0;
    while head < queue.len() {
        let v = queue[head];
        head += 1;
        processed += 1;
        for &w in &succ[v as usize] {
            in_deg[w as usize] -= 1;
            if in_deg[w as usize] == 0 {
                queue.push(w);
            }
        }
    }
    processed == count
}
