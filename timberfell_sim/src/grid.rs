// The classifier seam between the felling engine and the hosting world.
//
// The engine never stores a grid reference: every operation that reads the
// world borrows a `&impl Grid` for the duration of that call only. Losing
// the world therefore never leaves a dangling felling manager — the
// Rust reframing of a weakly-keyed world→manager map (see `registry.rs`).

use crate::types::{CellKind, VoxelCoord};

/// Read-only view of the hosting world's block storage.
///
/// `classify` must be pure and total at the time of call: the same
/// coordinate yields the same `CellKind` within one tick, and unknown
/// material classifies as `CellKind::Other`, never an error. The grid may
/// change between ticks — the engine re-reads it every scan.
pub trait Grid {
    fn classify(&self, coord: VoxelCoord) -> CellKind;
}
