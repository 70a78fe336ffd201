//! Parallel multi-component driver: one diagram per component, combined
//! multiplicatively.
//!
//! Components are statically sharded across a fixed worker pool; each
//! worker processes a contiguous shard sequentially and owns its shard's
//! components exclusively. The only shared state is a write-once results
//! array behind a mutex and an atomic skip counter; combination waits for
//! the parallel map to join before reading anything.
//!
//! Biconnected-component independence guarantees the product of
//! per-component cardinalities equals the whole-graph count, and every
//! merged bridge edge contributes an unconditional factor of 2, since no
//! orientation of a bridge can close a cycle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::dd::{Diagram, compile};
use crate::graph::decompose::{BridgeMode, decompose};
use crate::graph::edge_list::EdgeGraph;
use crate::model::{AcyclicClosureModel, EulerianBalanceModel, FrontierModel};
use crate::orient_error::OrientError;

/// Edge-count ceiling above which a component is skipped, not attempted.
pub const DEFAULT_EDGE_CEILING: usize = 25;

/// Driver configuration.
#[derive(Copy, Clone, Debug)]
pub struct SolveOptions {
    /// Components with more edges than this are skipped preemptively to
    /// bound worst-case state blow-up.
    pub edge_ceiling: usize,
    /// How bridges are packaged and counted.
    pub bridge_mode: BridgeMode,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            edge_ceiling: DEFAULT_EDGE_CEILING,
            bridge_mode: BridgeMode::Merged,
        }
    }
}

/// One component's diagram statistics, produced once and never mutated.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComponentOutcome {
    /// Component id in decomposition order.
    pub index: usize,
    pub vertices: usize,
    pub edges: usize,
    /// Valid orientations of this component alone.
    pub cardinality: BigUint,
    /// Branching nodes in the component's diagram.
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Combined result over all components.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CountReport {
    /// Product of processed component cardinalities times `2^bridge_edges`.
    ///
    /// A component that genuinely reports zero drives the whole product to
    /// zero; it is never substituted by a multiplicative identity.
    pub total: BigUint,
    /// Sum of per-component diagram node counts (informational).
    pub node_total: usize,
    /// Components emitted by decomposition.
    pub components: usize,
    /// Components skipped for exceeding the edge ceiling.
    pub skipped: usize,
    /// Merged bridge edges counted as free factors of 2.
    pub bridge_edges: usize,
    /// False when any component was skipped: `total` is then the product
    /// over a subset of components, a lower bound rather than the true count.
    pub exact: bool,
    /// Per-component statistics in component order (processed only).
    pub outcomes: Vec<ComponentOutcome>,
}

/// A single compiled diagram with its headline statistics.
pub struct SingleSolve {
    pub diagram: Diagram,
    pub cardinality: BigUint,
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Compile one model and collect its statistics.
pub fn solve_single<M: FrontierModel>(model: &M) -> SingleSolve {
    let started = Instant::now();
    let diagram = compile(model);
    let cardinality = diagram.cardinality();
    let node_count = diagram.node_count();
    SingleSolve {
        diagram,
        cardinality,
        node_count,
        elapsed: started.elapsed(),
    }
}

/// Count the acyclic orientations of `graph` by decomposing it, solving
/// components in parallel, and combining multiplicatively.
///
/// # Errors
/// Propagates decomposition errors; rejected branches and skipped
/// components are normal outcomes, not errors.
pub fn count_acyclic_orientations(
    graph: &EdgeGraph,
    opts: &SolveOptions,
) -> Result<CountReport, OrientError> {
    let deco = decompose(graph, opts.bridge_mode)?;
    let (results, skipped) = solve_components(&deco.components, opts);

    let mut total = BigUint::one();
    let mut node_total = 0usize;
    let mut outcomes = Vec::new();
    for outcome in results.into_iter().flatten() {
        if outcome.cardinality.is_zero() {
            log::warn!(
                "component {} reported zero orientations; whole-graph total is zero",
                outcome.index
            );
        }
        total *= &outcome.cardinality;
        node_total += outcome.node_count;
        outcomes.push(outcome);
    }
    total <<= deco.bridge_edges;
    let exact = skipped == 0;
    if !exact {
        log::warn!("{skipped} component(s) skipped; reported total is a partial product");
    }
    Ok(CountReport {
        total,
        node_total,
        components: deco.components.len(),
        skipped,
        bridge_edges: deco.bridge_edges,
        exact,
        outcomes,
    })
}

/// Count the Eulerian-balanced orientations of the whole graph with a
/// single diagram.
///
/// Balance constrains every vertex globally, so the per-component product
/// used for cycle constraints does not apply here.
pub fn count_eulerian_orientations(graph: &EdgeGraph) -> SingleSolve {
    solve_single(&EulerianBalanceModel::new(graph))
}

fn solve_components(
    components: &[EdgeGraph],
    opts: &SolveOptions,
) -> (Vec<Option<ComponentOutcome>>, usize) {
    let count = components.len();
    if count == 0 {
        return (Vec::new(), 0);
    }
    let workers = count.min(rayon::current_num_threads().max(1));
    let shard = count.div_ceil(workers);
    let results: Mutex<Vec<Option<ComponentOutcome>>> = Mutex::new(vec![None; count]);
    let skipped = AtomicUsize::new(0);

    let indexed: Vec<(usize, &EdgeGraph)> = components.iter().enumerate().collect();
    indexed.par_chunks(shard).for_each(|chunk| {
        for &(index, component) in chunk {
            if component.edge_count() > opts.edge_ceiling {
                skipped.fetch_add(1, Ordering::Relaxed);
                log::warn!(
                    "skipping component {index}: {} edges exceeds ceiling {}",
                    component.edge_count(),
                    opts.edge_ceiling
                );
                continue;
            }
            log::debug!(
                "solving component {index}: {} vertices, {} edges",
                component.vertex_count(),
                component.edge_count()
            );
            let solved = solve_single(&AcyclicClosureModel::new(component));
            log::info!(
                "component {index} done: {} orientations, {} nodes, {:?}",
                solved.cardinality,
                solved.node_count,
                solved.elapsed
            );
            let outcome = ComponentOutcome {
                index,
                vertices: component.vertex_count(),
                edges: component.edge_count(),
                cardinality: solved.cardinality,
                node_count: solved.node_count,
                elapsed: solved.elapsed,
            };
            // Each index belongs to exactly one shard: write-once.
            results.lock()[index] = Some(outcome);
        }
    });

    (results.into_inner(), skipped.load(Ordering::Relaxed))
}
