use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use transport_planner::core::problem::ProblemInstance;
use transport_planner::optimization::engine::TransportEngine;
use transport_planner::simulation::generator::{generate_instance_with, GeneratorConfig};

fn instance(sources: usize, destinations: usize) -> ProblemInstance {
    let config = GeneratorConfig {
        sources,
        destinations,
        max_quantity: 1_000,
        max_cost: 100,
        ..Default::default()
    };
    generate_instance_with(&mut StdRng::seed_from_u64(2024), &config)
        .expect("benchmark instance")
}

fn bench_northwest_corner(c: &mut Criterion) {
    let small = instance(10, 10);
    let large = instance(200, 200);

    c.bench_function("northwest_corner_10x10", |b| {
        b.iter(|| TransportEngine::solve_northwest_corner(black_box(&small)))
    });
    c.bench_function("northwest_corner_200x200", |b| {
        b.iter(|| TransportEngine::solve_northwest_corner(black_box(&large)))
    });
}

fn bench_least_cost(c: &mut Criterion) {
    let small = instance(10, 10);
    let medium = instance(50, 50);
    let large = instance(200, 200);

    c.bench_function("least_cost_10x10", |b| {
        b.iter(|| TransportEngine::solve_least_cost(black_box(&small)))
    });
    c.bench_function("least_cost_50x50", |b| {
        b.iter(|| TransportEngine::solve_least_cost(black_box(&medium)))
    });
    c.bench_function("least_cost_200x200", |b| {
        b.iter(|| TransportEngine::solve_least_cost(black_box(&large)))
    });
}

criterion_group!(benches, bench_northwest_corner, bench_least_cost);
criterion_main!(benches);
