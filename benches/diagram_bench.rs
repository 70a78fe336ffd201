use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use orient_dd::prelude::*;

fn grid(n: usize) -> EdgeGraph {
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

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for &n in &[3usize, 4] {
        let g = grid(n);
        group.bench_with_input(BenchmarkId::new("grid", n), &g, |b, g| {
            b.iter(|| {
                let dd = compile(&AcyclicClosureModel::new(g));
                dd.cardinality()
            })
        });
    }
    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let g = grid(4);
    c.bench_function("count_acyclic/grid4", |b| {
        b.iter(|| count_acyclic_orientations(&g, &SolveOptions::default()).unwrap())
    });
}

criterion_group!(benches, bench_compile, bench_driver);
criterion_main!(benches);
