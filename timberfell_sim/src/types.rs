// Core types shared across the felling engine.
//
// Defines spatial coordinates (`VoxelCoord`), the classifier output
// (`CellKind`), the chop orientation (`Facing`), the floating-point tree
// centroid (`Centroid`), and the compact per-world registry key (`WorldId`).
// All types derive `Serialize`/`Deserialize` so hosts can persist or ship
// them across a save/replay boundary.
//
// `VoxelCoord`'s total order is lexicographic by **y, then z, then x** —
// not field order. It is the final tie-break of the removal sort (see
// `tree.rs`), so it is implemented by hand and pinned by a test.
//
// **Critical constraint: determinism.** Every ordering in this crate
// bottoms out in this coordinate order. No hash-iteration order may leak
// into observable behavior.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in voxel units.
///
/// The coordinate system uses right-handed conventions:
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell directly underneath — the rooting probe target.
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    /// This coordinate displaced by the given deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

// Total order: y, then z, then x. Height is the primary removal key, and
// the (z, x) tie-break matches the host engine convention this subsystem
// was reverse-engineered against.
impl Ord for VoxelCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .cmp(&other.y)
            .then_with(|| self.z.cmp(&other.z))
            .then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for VoxelCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Running 3D average of a tree's claimed cells. Floating-point because the
/// average of integer coordinates rarely lands on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Centroid {
    /// Squared euclidean distance from this centroid to a cell.
    pub fn squared_distance_to(self, coord: VoxelCoord) -> f64 {
        let dx = self.x - f64::from(coord.x);
        let dy = self.y - f64::from(coord.y);
        let dz = self.z - f64::from(coord.z);
        dx * dx + dy * dy + dz * dz
    }
}

// ---------------------------------------------------------------------------
// Classification and orientation
// ---------------------------------------------------------------------------

/// What a grid cell is, as far as felling is concerned.
///
/// The classifier is total: anything that is none of the four interesting
/// materials is `Other`, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Fellable tree material — claimed by branch discovery.
    Wood,
    /// Leaf-like canopy material — qualifies a branch for felling.
    Canopy,
    /// Soil the tree can be rooted in.
    Ground,
    /// Built structure material — disqualifies the whole tree (treehouse).
    Structure,
    /// Everything else. Ignored.
    Other,
}

/// One of the six axis directions. Stored immutably on a tree from the
/// triggering chop event and passed through to effects as an opaque
/// orientation; the felling core never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

// ---------------------------------------------------------------------------
// Registry key
// ---------------------------------------------------------------------------

/// Compact identifier for one world context in the felling registry.
/// The host assigns these; the engine only uses them as map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_order_is_y_then_z_then_x() {
        // y dominates.
        assert!(VoxelCoord::new(9, 0, 9) < VoxelCoord::new(0, 1, 0));
        // z breaks y ties.
        assert!(VoxelCoord::new(9, 2, 0) < VoxelCoord::new(0, 2, 1));
        // x breaks (y, z) ties.
        assert!(VoxelCoord::new(0, 2, 3) < VoxelCoord::new(1, 2, 3));
        // Equal coordinates compare equal.
        assert_eq!(
            VoxelCoord::new(1, 2, 3).cmp(&VoxelCoord::new(1, 2, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn coord_sort_is_deterministic() {
        let mut cells = vec![
            VoxelCoord::new(1, 1, 0),
            VoxelCoord::new(0, 0, 1),
            VoxelCoord::new(1, 0, 1),
            VoxelCoord::new(0, 1, 0),
            VoxelCoord::new(0, 0, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                VoxelCoord::new(0, 0, 0),
                VoxelCoord::new(0, 0, 1),
                VoxelCoord::new(1, 0, 1),
                VoxelCoord::new(0, 1, 0),
                VoxelCoord::new(1, 1, 0),
            ]
        );
    }

    #[test]
    fn below_drops_y_only() {
        let c = VoxelCoord::new(3, 7, -2);
        assert_eq!(c.below(), VoxelCoord::new(3, 6, -2));
    }

    #[test]
    fn centroid_squared_distance() {
        let centroid = Centroid {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(centroid.squared_distance_to(VoxelCoord::new(3, 4, 0)), 25.0);
        // Distance is direction-independent.
        assert_eq!(
            centroid.squared_distance_to(VoxelCoord::new(-3, -4, 0)),
            25.0
        );
    }

    #[test]
    fn coord_serialization_roundtrip() {
        let coord = VoxelCoord::new(-5, 60, 12);
        let json = serde_json::to_string(&coord).unwrap();
        let restored: VoxelCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, restored);
    }
}
