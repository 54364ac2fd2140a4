//! Benchmarks for the reduction engine and the greedy phases.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use domsetsolver::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A sparse random graph with expected degree ~4, fixed seed.
fn sparse_random(n: usize) -> SimpleGraph {
    let mut rng = SmallRng::seed_from_u64(0xD0);
    let p = 4.0 / n as f64;
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    SimpleGraph::new(n, edges)
}

/// Benchmark the reduction engine on grids of varying size.
fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reduction");

    for n in [10, 20, 30].iter() {
        let graph = SimpleGraph::grid(*n, *n);
        let budget = ReductionBudget::from_secs(5.0, 5.0);

        group.bench_with_input(BenchmarkId::new("grid", n), n, |b, _| {
            b.iter(|| {
                let mut store = GraphStore::from_graph(black_box(&graph));
                reduce(&mut store, &budget);
                store.fixed().len()
            })
        });
    }

    for n in [500, 2000].iter() {
        let graph = sparse_random(*n);
        let budget = ReductionBudget::from_secs(5.0, 5.0);

        group.bench_with_input(BenchmarkId::new("sparse", n), n, |b, _| {
            b.iter(|| {
                let mut store = GraphStore::from_graph(black_box(&graph));
                reduce(&mut store, &budget);
                store.fixed().len()
            })
        });
    }

    group.finish();
}

/// Benchmark a bounded iterated-greedy run on irreducible-ish inputs.
fn bench_iterated_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("IteratedGreedy");

    for n in [200, 1000].iter() {
        let graph = sparse_random(*n);
        let solver = IteratedGreedy::new().with_seed(7).with_max_iterations(50);

        group.bench_with_input(BenchmarkId::new("sparse", n), n, |b, _| {
            b.iter(|| {
                let mut store = GraphStore::from_graph(black_box(&graph));
                solver.run(&mut store, &TerminationFlag::new())
            })
        });
    }

    group.finish();
}

/// Benchmark the full pipeline, parse included.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");

    let graph = SimpleGraph::grid(25, 25);
    let mut input = format!("p ds {} {}\n", graph.num_vertices(), graph.num_edges());
    for (u, v) in graph.edges() {
        input.push_str(&format!("\t{} {}\n", u + 1, v + 1));
    }

    group.bench_function("grid25", |b| {
        b.iter(|| {
            let instance = parse_pace(black_box(input.as_bytes())).unwrap();
            let mut store = GraphStore::from_instance(&instance);
            let mut solver = HeuristicSolver::new();
            solver.budget = ReductionBudget::from_secs(1.0, 0.5);
            solver.greedy = IteratedGreedy::new().with_seed(7).with_max_iterations(20);
            solver.solve(&mut store, &TerminationFlag::new()).len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_iterated_greedy, bench_pipeline);
criterion_main!(benches);
