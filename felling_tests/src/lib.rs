// World-building fixtures and a host-side harness for end-to-end felling
// tests.
//
// The harness plays the role a game host would: it clears the chopped
// block itself, notifies the engine, drives ticks, and applies the
// recorded effects back to the voxel world between ticks. Keeping the
// grid mutations out here mirrors the engine's contract that the grid is
// stable for the duration of a tick.

use timberfell_sim::config::FellingConfig;
use timberfell_sim::effect::{EffectLog, FellEffect};
use timberfell_sim::felling::FellingManager;
use timberfell_sim::types::{Facing, VoxelCoord};
use timberfell_sim::world::{VoxelType, VoxelWorld};

/// Applies a batch of recorded effects to the world: every falling log
/// and every shed leaf cell becomes air.
pub fn apply_effects(world: &mut VoxelWorld, effects: &[FellEffect]) {
    for effect in effects {
        match *effect {
            FellEffect::FallingLog { pos, .. } | FellEffect::FallingLeaves { pos, .. } => {
                world.set(pos, VoxelType::Air);
            }
        }
    }
}

/// A single-world host. Owns the grid, the felling manager, and the full
/// effect history.
pub struct FellingHarness {
    pub world: VoxelWorld,
    pub manager: FellingManager,
    pub history: EffectLog,
}

impl FellingHarness {
    pub fn new(world: VoxelWorld) -> Self {
        Self::with_config(world, FellingConfig::default())
    }

    pub fn with_config(world: VoxelWorld, config: FellingConfig) -> Self {
        Self {
            world,
            manager: FellingManager::new(config),
            history: EffectLog::new(),
        }
    }

    /// Breaks the block at `pos` the way a player would: the cell is
    /// already air by the time the engine hears about it.
    pub fn chop(&mut self, pos: VoxelCoord) {
        self.world.set(pos, VoxelType::Air);
        self.manager.on_chop(&self.world, pos, Facing::North);
    }

    /// Runs one engine tick, applies the new effects to the world, and
    /// returns them.
    pub fn tick(&mut self) -> Vec<FellEffect> {
        let mut batch = EffectLog::new();
        self.manager.tick(&self.world, &mut batch);
        apply_effects(&mut self.world, &batch.effects);
        self.history.effects.extend(batch.effects.iter().copied());
        batch.effects
    }

    /// Ticks until the manager has no trees left. Returns the number of
    /// ticks taken; panics if `max_ticks` is not enough.
    pub fn run_to_completion(&mut self, max_ticks: usize) -> usize {
        for ticks in 1..=max_ticks {
            self.tick();
            if self.manager.is_empty() {
                return ticks;
            }
        }
        panic!("felling did not settle within {max_ticks} ticks");
    }
}

/// Lays a vertical log column starting at `base`, `height` cells tall,
/// with a 3x3 leaf layer resting on top. When `rooted`, a soil cell sits
/// directly under the lowest log.
pub fn column_tree(world: &mut VoxelWorld, base: VoxelCoord, height: i32, rooted: bool) {
    if rooted {
        world.set(base.below(), VoxelType::Soil);
    }
    for dy in 0..height {
        world.set(base.offset(0, dy, 0), VoxelType::Log);
    }
    let crown = base.offset(0, height, 0);
    for dx in -1..=1 {
        for dz in -1..=1 {
            world.set(crown.offset(dx, 0, dz), VoxelType::Leaves);
        }
    }
}
