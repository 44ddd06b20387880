//! Performance benchmarks for ALIFE

use alife::checkpoint::Checkpoint;
use alife::{Config, World};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn world_with(prey: usize, predators: usize) -> World {
    let mut config = Config::default();
    config.prey.population = prey;
    config.predator.population = predators;
    World::new_with_seed(config, 42)
}

fn benchmark_world_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");

    for population in [100, 500, 1000].iter() {
        let mut world = world_with(*population, population / 5);

        // Warm up
        world.run(10);

        group.bench_with_input(
            BenchmarkId::new("population", population),
            population,
            |b, _| {
                b.iter(|| {
                    world.tick();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_neighbors(c: &mut Criterion) {
    let world = world_with(500, 100);

    let first = world.population.get(0).unwrap();

    c.bench_function("neighbors", |b| {
        b.iter(|| first.neighbors(world.population.iter(), black_box(first.vision)));
    });
}

fn benchmark_checkpoint(c: &mut Criterion) {
    let mut world = world_with(500, 100);
    world.run(50);
    let checkpoint = world.create_checkpoint();
    let bytes = bincode::serialize(&checkpoint).unwrap();
    let mut framed = b"ALFE".to_vec();
    framed.extend_from_slice(&bytes);

    c.bench_function("checkpoint_serialize", |b| {
        b.iter(|| bincode::serialize(black_box(&checkpoint)).unwrap());
    });

    c.bench_function("checkpoint_deserialize", |b| {
        b.iter(|| Checkpoint::from_bytes(black_box(&framed)).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_world_tick,
    benchmark_neighbors,
    benchmark_checkpoint
);
criterion_main!(benches);
