// timberfell_sim — incremental tree-felling engine for voxel worlds.
//
// A chop event seeds a bounded breadth-first discovery of the connected
// wood structure around it; qualifying branches (canopy-bearing, not
// rooted in the ground, within the size cap) queue their cells for
// removal, and a per-world scheduler drains every live tree one cell per
// tick. Removing a cell rescans its surroundings, so a tree keeps growing
// while it is being felled — the whole flood-fill is spread across ticks
// instead of stalling the host's frame.
//
// The crate is pure and headless: it never owns block storage, never
// renders, and never mutates the world. Hosts implement `Grid` (the
// classifier seam) and `EffectSink` (the outbound falling-log/leaves
// surface) and call `tick()` once per simulation step.
//
// Module overview:
// - `types.rs`:    VoxelCoord (y/z/x total order), Centroid, CellKind, Facing, WorldId.
// - `grid.rs`:     The `Grid` classifier trait — the only world access.
// - `world.rs`:    Dense reference grid (flat Vec storage, OOB-safe).
// - `geometry.rs`: Chebyshev-cube neighbor iteration (radius 1 and 4).
// - `config.rs`:   FellingConfig — size cap, large-tree override, rescan radius.
// - `branch.rs`:   Bounded BFS discovery with canopy/rooting/structure checks.
// - `tree.rs`:     Visited set, staged/committed queues, 3-key removal sort.
// - `felling.rs`:  Per-world scheduler — one removal per tree per tick.
// - `effect.rs`:   EffectSink trait, FellEffect records, EffectLog, NullSink.
// - `registry.rs`: WorldId → FellingManager, explicit lifecycle ownership.
//
// **Critical constraint: determinism.** Single-threaded by design, no RNG,
// no clocks. Frontiers are FIFO, neighborhoods iterate in fixed geometric
// order, and the removal queue is fully sorted by a total key — identical
// grids produce identical effect streams.

pub mod branch;
pub mod config;
pub mod effect;
pub mod felling;
pub mod geometry;
pub mod grid;
pub mod registry;
pub mod tree;
pub mod types;
pub mod world;
