/// Benchmark suite for terrain generation, greedy meshing and streaming
use std::hint::black_box;

use cgmath::Point3;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_terrain::{
    BlockType, Chunk, ChunkCoord, ChunkStore, EngineConfig, GreedyMesher, TerrainConfig,
    TerrainGenerator, CHUNK_DIMENSION,
};

const SEED: u64 = 0xC0FFEE;

fn generator() -> TerrainGenerator {
    TerrainGenerator::new(SEED, CHUNK_DIMENSION, &TerrainConfig::default())
}

fn bench_mesh_uniform_air(c: &mut Criterion) {
    c.bench_function("mesh_uniform_air", |b| {
        let chunk = Chunk::empty(ChunkCoord::new(0, 0), CHUNK_DIMENSION);
        b.iter(|| GreedyMesher::mesh_chunk(black_box(&chunk)));
    });
}

fn bench_mesh_uniform_solid(c: &mut Criterion) {
    c.bench_function("mesh_uniform_solid", |b| {
        let chunk = Chunk::filled(ChunkCoord::new(0, 0), CHUNK_DIMENSION, BlockType::STONE);
        b.iter(|| GreedyMesher::mesh_chunk(black_box(&chunk)));
    });
}

fn bench_mesh_checkerboard(c: &mut Criterion) {
    c.bench_function("mesh_checkerboard", |b| {
        // Worst case for merging: no two neighbouring cells share a state.
        let n = CHUNK_DIMENSION as i32;
        let mut chunk = Chunk::empty(ChunkCoord::new(0, 0), CHUNK_DIMENSION);
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    if (x + y + z) % 2 == 0 {
                        chunk.set(x, y, z, BlockType::DIRT);
                    }
                }
            }
        }
        b.iter(|| GreedyMesher::mesh_chunk(black_box(&chunk)));
    });
}

fn bench_mesh_terrain(c: &mut Criterion) {
    c.bench_function("mesh_terrain", |b| {
        let chunk = generator().generate(ChunkCoord::new(0, 0));
        b.iter(|| GreedyMesher::mesh_chunk(black_box(&chunk)));
    });
}

fn bench_generate_terrain(c: &mut Criterion) {
    c.bench_function("generate_terrain", |b| {
        let generator = generator();
        b.iter(|| generator.generate(black_box(ChunkCoord::new(3, -7))));
    });
}

fn bench_stream_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_radius");

    for radius in [1, 2, 4].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, &radius| {
            let mut config = EngineConfig::default();
            config.world.view_radius = radius;
            b.iter(|| {
                let mut store = ChunkStore::from_config(&config, SEED);
                black_box(store.update(Point3::new(0.0, 0.0, 0.0)))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mesh_uniform_air,
    bench_mesh_uniform_solid,
    bench_mesh_checkerboard,
    bench_mesh_terrain,
    bench_generate_terrain,
    bench_stream_radius
);
criterion_main!(benches);
