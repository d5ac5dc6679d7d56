// Benchmark: discover and fully drain a plantation of floating trees.
//
// Measures the two halves of the pipeline separately: chop-time discovery
// (branch BFS over the grid) and tick-time draining (sort + removal +
// radius-4 rescan per cell).

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use timberfell_sim::config::FellingConfig;
use timberfell_sim::effect::NullSink;
use timberfell_sim::felling::FellingManager;
use timberfell_sim::types::{Facing, VoxelCoord};
use timberfell_sim::world::{VoxelType, VoxelWorld};

/// A grid of floating wood columns with leaf caps. Returns the world and
/// the chop positions (each column's base).
fn plantation(columns: i32, height: i32) -> (VoxelWorld, Vec<VoxelCoord>) {
    let mut world = VoxelWorld::new(256, 64, 256);
    let mut chops = Vec::new();
    for cx in 0..columns {
        for cz in 0..columns {
            let (x, z) = (10 + cx * 12, 10 + cz * 12);
            for y in 10..10 + height {
                world.set(VoxelCoord::new(x, y, z), VoxelType::Log);
            }
            world.set(VoxelCoord::new(x, 10 + height, z), VoxelType::Leaves);
            chops.push(VoxelCoord::new(x, 10, z));
        }
    }
    (world, chops)
}

fn bench_discovery(c: &mut Criterion) {
    let (world, chops) = plantation(4, 24);
    let config = FellingConfig::default();

    c.bench_function("chop_discovery_16_trees", |b| {
        b.iter(|| {
            let mut manager = FellingManager::new(config.clone());
            for &chop in &chops {
                manager.on_chop(&world, black_box(chop), Facing::North);
            }
            black_box(manager.logs_queued_to_fell())
        })
    });
}

fn bench_draining(c: &mut Criterion) {
    let (world, chops) = plantation(4, 24);
    let config = FellingConfig::default();

    c.bench_function("drain_16_trees_to_empty", |b| {
        b.iter(|| {
            let mut manager = FellingManager::new(config.clone());
            for &chop in &chops {
                manager.on_chop(&world, chop, Facing::North);
            }
            let mut sink = NullSink;
            while !manager.is_empty() {
                manager.tick(&world, &mut sink);
            }
        })
    });
}

criterion_group!(benches, bench_discovery, bench_draining);
criterion_main!(benches);
