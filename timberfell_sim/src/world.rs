// Dense 3D voxel grid — the reference `Grid` implementation.
//
// The world is stored as a flat `Vec<VoxelType>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write access.
// Out-of-bounds reads return `Air`; out-of-bounds writes are no-ops.
//
// The felling engine itself only sees this type through the `Grid` trait:
// `classify()` folds the material palette down to the five `CellKind`
// categories the algorithm cares about. Hosts with their own block storage
// implement `Grid` directly and never touch this type; the test crate and
// the bench use it as their world substrate.
//
// See also: `grid.rs` for the classifier trait, `felling.rs` for the
// scheduler that reads the grid each tick.

use crate::grid::Grid;
use crate::types::{CellKind, VoxelCoord};
use serde::{Deserialize, Serialize};

/// The material of a single voxel in the reference grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoxelType {
    #[default]
    Air,
    /// Tree trunk or branch wood.
    Log,
    /// Canopy foliage.
    Leaves,
    /// Rooting soil.
    Soil,
    /// Built structure material (turns a tree into a treehouse).
    Planks,
}

impl VoxelType {
    /// Fold the material palette down to the felling classification.
    pub fn cell_kind(self) -> CellKind {
        match self {
            VoxelType::Log => CellKind::Wood,
            VoxelType::Leaves => CellKind::Canopy,
            VoxelType::Soil => CellKind::Ground,
            VoxelType::Planks => CellKind::Structure,
            VoxelType::Air => CellKind::Other,
        }
    }
}

/// Dense 3D voxel grid.
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z.
    voxels: Vec<VoxelType>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl VoxelWorld {
    /// Create a new world filled with `Air`.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            voxels: vec![VoxelType::Air; total],
            size_x,
            size_y,
            size_z,
        }
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as u32) < self.size_x
            && (coord.y as u32) < self.size_y
            && (coord.z as u32) < self.size_z
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            let x = coord.x as usize;
            let y = coord.y as usize;
            let z = coord.z as usize;
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some(x + z * sx + y * sx * sz)
        } else {
            None
        }
    }

    /// Read a voxel. Returns `Air` for out-of-bounds coordinates.
    pub fn get(&self, coord: VoxelCoord) -> VoxelType {
        self.index(coord)
            .map(|i| self.voxels[i])
            .unwrap_or(VoxelType::Air)
    }

    /// Write a voxel. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, voxel: VoxelType) {
        if let Some(i) = self.index(coord) {
            self.voxels[i] = voxel;
        }
    }

    /// Count voxels of the given material. O(volume) — test/diagnostic use.
    pub fn count_of(&self, voxel_type: VoxelType) -> usize {
        self.voxels.iter().filter(|v| **v == voxel_type).count()
    }
}

impl Grid for VoxelWorld {
    fn classify(&self, coord: VoxelCoord) -> CellKind {
        self.get(coord).cell_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_all_air() {
        let world = VoxelWorld::new(4, 4, 4);
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    assert_eq!(world.get(VoxelCoord::new(x, y, z)), VoxelType::Air);
                }
            }
        }
    }

    #[test]
    fn set_and_get() {
        let mut world = VoxelWorld::new(8, 8, 8);
        let coord = VoxelCoord::new(3, 5, 2);
        world.set(coord, VoxelType::Log);
        assert_eq!(world.get(coord), VoxelType::Log);
        // Neighbors are still air.
        assert_eq!(world.get(VoxelCoord::new(3, 5, 3)), VoxelType::Air);
    }

    #[test]
    fn out_of_bounds_read_returns_air() {
        let world = VoxelWorld::new(4, 4, 4);
        assert_eq!(world.get(VoxelCoord::new(-1, 0, 0)), VoxelType::Air);
        assert_eq!(world.get(VoxelCoord::new(0, -1, 0)), VoxelType::Air);
        assert_eq!(world.get(VoxelCoord::new(4, 0, 0)), VoxelType::Air);
        assert_eq!(world.get(VoxelCoord::new(100, 100, 100)), VoxelType::Air);
    }

    #[test]
    fn out_of_bounds_write_is_noop() {
        let mut world = VoxelWorld::new(4, 4, 4);
        // Should not panic.
        world.set(VoxelCoord::new(-1, 0, 0), VoxelType::Log);
        world.set(VoxelCoord::new(100, 0, 0), VoxelType::Log);
        assert_eq!(world.count_of(VoxelType::Log), 0);
    }

    #[test]
    fn indexing_is_correct() {
        // Verify the specific indexing scheme: x + z * size_x + y * size_x * size_z
        let mut world = VoxelWorld::new(10, 8, 6);
        let coord = VoxelCoord::new(5, 3, 4);
        world.set(coord, VoxelType::Leaves);
        assert_eq!(world.get(coord), VoxelType::Leaves);
        // Adjacent coords should still be air.
        assert_eq!(world.get(VoxelCoord::new(4, 3, 4)), VoxelType::Air);
        assert_eq!(world.get(VoxelCoord::new(5, 2, 4)), VoxelType::Air);
        assert_eq!(world.get(VoxelCoord::new(5, 3, 3)), VoxelType::Air);
    }

    #[test]
    fn classification_covers_the_palette() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.set(VoxelCoord::new(1, 1, 1), VoxelType::Log);
        world.set(VoxelCoord::new(2, 1, 1), VoxelType::Leaves);
        world.set(VoxelCoord::new(3, 1, 1), VoxelType::Soil);
        world.set(VoxelCoord::new(4, 1, 1), VoxelType::Planks);

        assert_eq!(world.classify(VoxelCoord::new(1, 1, 1)), CellKind::Wood);
        assert_eq!(world.classify(VoxelCoord::new(2, 1, 1)), CellKind::Canopy);
        assert_eq!(world.classify(VoxelCoord::new(3, 1, 1)), CellKind::Ground);
        assert_eq!(world.classify(VoxelCoord::new(4, 1, 1)), CellKind::Structure);
        // Air and out-of-bounds are both `Other` — the classifier is total.
        assert_eq!(world.classify(VoxelCoord::new(5, 1, 1)), CellKind::Other);
        assert_eq!(world.classify(VoxelCoord::new(-9, 0, 0)), CellKind::Other);
    }
}
