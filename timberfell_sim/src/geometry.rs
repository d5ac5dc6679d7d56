// Neighbor iteration over the voxel grid.
//
// Branch discovery expands through the full radius-1 cube around a cell
// (26 neighbors — faces, edges, and corners), and the post-removal rescan
// sweeps a radius-4 cube. Both are Chebyshev cubes centered on a cell,
// excluding the cell itself.
//
// **Critical constraint: determinism.** The iteration order (y-layer, then
// z-row, then x) is fixed. Branch claim order, and therefore cell-set
// insertion order, derives from it.

use crate::types::VoxelCoord;
use smallvec::SmallVec;

/// All cells within Chebyshev distance `radius` of `center`, excluding
/// `center` itself. Yields `(2r + 1)³ - 1` coordinates in a fixed
/// (y, z, x) order.
pub fn cube(center: VoxelCoord, radius: i32) -> impl Iterator<Item = VoxelCoord> {
    debug_assert!(radius >= 1);
    (-radius..=radius).flat_map(move |dy| {
        (-radius..=radius).flat_map(move |dz| {
            (-radius..=radius).filter_map(move |dx| {
                if dx == 0 && dy == 0 && dz == 0 {
                    None
                } else {
                    Some(center.offset(dx, dy, dz))
                }
            })
        })
    })
}

/// The radius-1 cube as a stack-allocated vector. This is the hot path —
/// every accepted cell of every branch scan walks its 26 neighbors.
pub fn neighborhood(center: VoxelCoord) -> SmallVec<[VoxelCoord; 26]> {
    cube(center, 1).collect()
}
