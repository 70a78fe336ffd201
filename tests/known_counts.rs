//! Closed-form orientation counts on standard graph families.

mod common;

use common::{cycle, grid, path};
use num_traits::ToPrimitive;
use orient_dd::prelude::*;

fn diagram_count(g: &EdgeGraph) -> u64 {
    let dd = compile(&AcyclicClosureModel::new(g));
    dd.cardinality().to_u64().unwrap()
}

#[test]
fn single_edge_has_two_orientations() {
    let g = EdgeGraph::parse_edge_list("u v\n").unwrap();
    assert_eq!(diagram_count(&g), 2);
}

#[test]
fn triangle_has_six() {
    assert_eq!(diagram_count(&cycle(3)), 6);
}

#[test]
fn paths_count_all_assignments() {
    for k in 1..=10 {
        assert_eq!(diagram_count(&path(k)), 1 << k, "path of {k} edges");
    }
}

#[test]
fn cycles_drop_the_two_rotations() {
    for k in 3..=12 {
        assert_eq!(diagram_count(&cycle(k)), (1 << k) - 2, "cycle of {k}");
    }
}

#[test]
fn square_grid_is_the_four_cycle() {
    assert_eq!(diagram_count(&grid(2)), 14);
}

#[test]
fn driver_agrees_on_known_families() {
    for g in [path(6), cycle(7), grid(3)] {
        let report = count_acyclic_orientations(&g, &SolveOptions::default()).unwrap();
        assert!(report.exact);
        assert_eq!(report.total.to_u64().unwrap(), diagram_count(&g));
    }
}

#[test]
fn eulerian_known_values() {
    // Cycles: the two rotations are the only balanced orientations.
    for k in [3usize, 4, 6, 8] {
        let solved = count_eulerian_orientations(&cycle(k));
        assert_eq!(solved.cardinality.to_u64(), Some(2), "cycle of {k}");
    }
    // Odd-degree endpoints can never balance.
    let solved = count_eulerian_orientations(&path(4));
    assert_eq!(solved.cardinality.to_u64(), Some(0));
    // Two triangles sharing a vertex: each rotates independently.
    let g = EdgeGraph::from_pairs([
        ("a", "b"),
        ("b", "c"),
        ("a", "c"),
        ("c", "d"),
        ("d", "e"),
        ("c", "e"),
    ])
    .unwrap();
    let solved = count_eulerian_orientations(&g);
    assert_eq!(solved.cardinality.to_u64(), Some(4));
}
