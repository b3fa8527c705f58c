//! Benchmarks for correspondence building and morph stepping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hearth_morph::correspondence::build_correspondence_using;
use hearth_morph::material::create_material;
use hearth_morph::mesh::create_mesh;
use hearth_morph::morph::{create_morph_engine, set_control_value, step};
use hearth_morph::{MorphConfig, MorphSourcesData, SearchStrategy};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cloud(rng: &mut StdRng, count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_correspondence");
    let mut rng = StdRng::seed_from_u64(1);

    for count in [500usize, 2_000, 8_000] {
        let source = random_cloud(&mut rng, count);
        let target = random_cloud(&mut rng, count);

        if count <= 2_000 {
            group.bench_with_input(BenchmarkId::new("brute_force", count), &count, |b, _| {
                b.iter(|| {
                    build_correspondence_using(
                        black_box(&source),
                        black_box(&target),
                        SearchStrategy::BruteForce,
                        None,
                        false,
                    )
                })
            });
        }

        group.bench_with_input(BenchmarkId::new("grid", count), &count, |b, _| {
            b.iter(|| {
                build_correspondence_using(
                    black_box(&source),
                    black_box(&target),
                    SearchStrategy::Grid,
                    None,
                    false,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("grid_parallel", count), &count, |b, _| {
            b.iter(|| {
                build_correspondence_using(
                    black_box(&source),
                    black_box(&target),
                    SearchStrategy::Grid,
                    None,
                    true,
                )
            })
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let old_positions = random_cloud(&mut rng, 6_000);
    let new_positions = random_cloud(&mut rng, 9_000);

    let sources = MorphSourcesData {
        old_mesh: create_mesh("old", old_positions, (0..6_000).collect()),
        new_mesh: create_mesh("new", new_positions, (0..9_000).collect()),
        old_material: create_material("old", [1.0; 4]),
        new_material: create_material("new", [0.0; 4]),
    };
    let config = MorphConfig {
        search: SearchStrategy::Grid,
        ..MorphConfig::default()
    };
    let mut engine = match create_morph_engine(sources, config) {
        Ok(engine) => engine,
        Err(e) => panic!("failed to create bench engine: {}", e),
    };

    c.bench_function("morph_step_9000", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t = (t + 0.01) % 1.0;
            set_control_value(&mut engine, t);
            step(black_box(&mut engine))
        })
    });
}

criterion_group!(benches, bench_build, bench_step);
criterion_main!(benches);
