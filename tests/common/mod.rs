//! Shared graph builders for integration tests.
#![allow(dead_code)] // each test binary uses its own subset

use orient_dd::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

pub fn path(k: usize) -> EdgeGraph {
    EdgeGraph::from_pairs((0..k).map(|i| (i.to_string(), (i + 1).to_string()))).unwrap()
}

pub fn cycle(k: usize) -> EdgeGraph {
    EdgeGraph::from_pairs((0..k).map(|i| (i.to_string(), ((i + 1) % k).to_string()))).unwrap()
}

pub fn grid(n: usize) -> EdgeGraph {
    let name = |i: usize, j: usize| format!("{i}:{j}");
    let mut g = EdgeGraph::new();
    for i in 0..n {
        for j in 0..n {
            if j + 1 < n {
                g.add_edge(name(i, j), name(i, j + 1));
            }
            if i + 1 < n {
                g.add_edge(name(i, j), name(i + 1, j));
            }
        }
    }
    g.update().unwrap();
    g
}

/// Random simple graph: `m` edges sampled without replacement from the
/// complete graph on `n` vertices. Deterministic per seed.
pub fn random_graph(n: usize, m: usize, seed: u64) -> EdgeGraph {
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            pairs.push((a.to_string(), b.to_string()));
        }
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    pairs.shuffle(&mut rng);
    pairs.truncate(m.min(pairs.len()));
    EdgeGraph::from_pairs(pairs).unwrap()
}

/// Count acyclic orientations by testing all `2^m` assignments.
pub fn brute_force_count(g: &EdgeGraph) -> usize {
    let m = g.edge_count();
    assert!(m < usize::BITS as usize, "graph too large for brute force");
    (0..(1usize << m))
        .filter(|bits| {
            let dirs: Vec<Direction> = (0..m)
                .map(|a| {
                    if bits >> a & 1 == 1 {
                        Direction::Reverse
                    } else {
                        Direction::Forward
                    }
                })
                .collect();
            orientation_is_acyclic(g, &dirs)
        })
        .count()
}
