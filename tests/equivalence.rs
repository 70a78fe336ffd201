//! The primary correctness property: the diagram pipeline, the backtracking
//! enumerator, and brute force must agree on every graph small enough to
//! check exhaustively.

mod common;

use common::{brute_force_count, grid, random_graph};
use num_traits::ToPrimitive;
use orient_dd::prelude::*;

#[test]
fn diagram_enumerator_and_brute_force_agree_on_random_graphs() {
    for seed in 0..20u64 {
        let n = 4 + (seed as usize % 5); // 4..=8 vertices
        let m = 3 + (seed as usize % 10); // 3..=12 edges
        let g = random_graph(n, m, seed);
        let brute = brute_force_count(&g);

        let dd = compile(&AcyclicClosureModel::new(&g));
        assert_eq!(
            dd.cardinality().to_usize(),
            Some(brute),
            "diagram vs brute force, seed {seed}"
        );
        assert_eq!(
            count_by_backtracking(&g),
            brute,
            "enumerator vs brute force, seed {seed}"
        );
    }
}

#[test]
fn driver_agrees_with_enumerator_in_both_bridge_modes() {
    for seed in 100..115u64 {
        let g = random_graph(7, 9, seed);
        let brute = brute_force_count(&g);
        for mode in [BridgeMode::Merged, BridgeMode::Capped(3)] {
            let report = count_acyclic_orientations(
                &g,
                &SolveOptions {
                    bridge_mode: mode,
                    ..SolveOptions::default()
                },
            )
            .unwrap();
            assert!(report.exact, "nothing may be skipped at this size");
            assert_eq!(
                report.total.to_usize(),
                Some(brute),
                "driver vs brute force, seed {seed}, mode {mode:?}"
            );
        }
    }
}

#[test]
fn diagram_solutions_match_enumerator_solutions() {
    let g = random_graph(6, 8, 42);
    let dd = compile(&AcyclicClosureModel::new(&g));
    let mut from_diagram = dd.solutions();
    let mut from_backtracking = enumerate_acyclic(&g);
    from_diagram.sort();
    from_backtracking.sort();
    assert_eq!(from_diagram, from_backtracking);
}

#[test]
fn grid_graph_counts_agree() {
    let g = grid(3); // 9 vertices, 12 edges
    let brute = brute_force_count(&g);
    let report = count_acyclic_orientations(&g, &SolveOptions::default()).unwrap();
    assert_eq!(report.total.to_usize(), Some(brute));
    assert_eq!(count_by_backtracking(&g), brute);
}

#[test]
fn repeated_runs_are_identical() {
    let g = random_graph(8, 12, 7);
    let a = count_acyclic_orientations(&g, &SolveOptions::default()).unwrap();
    let b = count_acyclic_orientations(&g, &SolveOptions::default()).unwrap();
    assert_eq!(a.total, b.total);
    assert_eq!(a.node_total, b.node_total);
    assert_eq!(a.components, b.components);
    assert_eq!(a.skipped, b.skipped);
}

#[test]
fn eulerian_diagram_matches_brute_force_balance_filter() {
    for seed in 0..10u64 {
        let g = random_graph(5, 8, seed);
        let m = g.edge_count();
        let brute = (0..(1usize << m))
            .filter(|bits| {
                let mut balance = vec![0i32; g.vertex_count() + 1];
                for (a, e) in g.edges().iter().enumerate() {
                    let (src, dst) = if bits >> a & 1 == 1 {
                        (e.v2, e.v1)
                    } else {
                        (e.v1, e.v2)
                    };
                    balance[src.index()] += 1;
                    balance[dst.index()] -= 1;
                }
                balance.iter().all(|&b| b == 0)
            })
            .count();
        let solved = count_eulerian_orientations(&g);
        assert_eq!(
            solved.cardinality.to_usize(),
            Some(brute),
            "seed {seed}"
        );
    }
}
