// Outbound effects — the engine's only side channel.
//
// The felling core never mutates the grid. Every removed log and every
// canopy cell found near it is reported through an `EffectSink`, exactly
// once, fire-and-forget: the host decides what a falling log looks like
// (entity spawn, particle burst, plain block clear) and never reports
// back. Hosts that prefer an event-log style can collect into `EffectLog`
// and apply the batch between ticks — the grid contract only promises
// stability within a tick, so deferred application is always safe.
//
// The source system also forwarded the leaf block's material state to the
// leaf effect; that parameter is dropped here. Classification at detection
// time is `Canopy` by construction, and the sink owns the real grid, so it
// can recover any material detail it wants from `pos`.
//
// See also: `tree.rs` for the emit sites, `felling.rs` for the tick that
// threads the sink through.

use crate::types::{Centroid, Facing, VoxelCoord};
use serde::{Deserialize, Serialize};

/// Receiver for felling effects. Implementations must tolerate being
/// called mid-tick and must not touch the grid until the tick returns.
pub trait EffectSink {
    /// One log cell was removed from a tree's committed queue. `centroid`
    /// and `direction` orient the visual fall.
    fn falling_log(&mut self, pos: VoxelCoord, centroid: Centroid, direction: Facing);

    /// A canopy cell was detected within the rescan radius of a removed
    /// log (`origin_log`).
    fn falling_leaves(
        &mut self,
        pos: VoxelCoord,
        origin_log: VoxelCoord,
        centroid: Centroid,
        direction: Facing,
    );
}

/// A recorded felling effect — the event-log shape of the sink calls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FellEffect {
    FallingLog {
        pos: VoxelCoord,
        centroid: Centroid,
        direction: Facing,
    },
    FallingLeaves {
        pos: VoxelCoord,
        origin_log: VoxelCoord,
        centroid: Centroid,
        direction: Facing,
    },
}

/// Sink that records every effect in order. Used by tests and by hosts
/// that apply effects in a deferred batch.
#[derive(Clone, Debug, Default)]
pub struct EffectLog {
    pub effects: Vec<FellEffect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of all recorded falling logs, in emission order.
    pub fn felled_logs(&self) -> Vec<VoxelCoord> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                FellEffect::FallingLog { pos, .. } => Some(*pos),
                FellEffect::FallingLeaves { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl EffectSink for EffectLog {
    fn falling_log(&mut self, pos: VoxelCoord, centroid: Centroid, direction: Facing) {
        self.effects.push(FellEffect::FallingLog {
            pos,
            centroid,
            direction,
        });
    }

    fn falling_leaves(
        &mut self,
        pos: VoxelCoord,
        origin_log: VoxelCoord,
        centroid: Centroid,
        direction: Facing,
    ) {
        self.effects.push(FellEffect::FallingLeaves {
            pos,
            origin_log,
            centroid,
            direction,
        });
    }
}

/// Sink that discards everything. For hosts that only want the grid-side
/// bookkeeping, and for benches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EffectSink for NullSink {
    fn falling_log(&mut self, _pos: VoxelCoord, _centroid: Centroid, _direction: Facing) {}

    fn falling_leaves(
        &mut self,
        _pos: VoxelCoord,
        _origin_log: VoxelCoord,
        _centroid: Centroid,
        _direction: Facing,
    ) {
    }
}
