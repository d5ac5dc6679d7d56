// Tree aggregation — the connected whole reachable from one chop event.
//
// A `Tree` owns the visited set (`cells`), the committed removal queue
// (`logs_to_fell`), and a staging buffer (`new_logs_to_fell`) that
// freshly-qualified branch scans append to. Once per tick, before any
// removal, `prep_for_felling()` commits the staging buffer: merge,
// recompute the centroid over the full visited set, re-sort the entire
// committed queue, clear staging.
//
// Removal order (ascending iteration of the sorted queue):
//   1. height (`y`) ascending;
//   2. squared distance from the centroid, **descending** — farther cells
//      first, stripping each height band outward-in;
//   3. the coordinate total order (`types.rs`), so exact ties are stable.
// The outward-in band stripping is deliberate visual policy, not an
// implementation accident; keep it exact.
//
// `fell_log` is where the tree grows while it drains: after emitting the
// falling-log effect it rescans a radius-4 cube around the removed cell,
// shedding canopy in range and branch-scanning any wood the tree has not
// visited yet. Material that only becomes reachable after earlier cells
// are cleared is picked up here, one removal at a time, across ticks.
//
// See also: `branch.rs` for the discovery scan, `felling.rs` for the
// scheduler that drives prep/removal, `effect.rs` for the outbound calls.
//
// **Critical constraint: determinism.** The committed queue is fully
// sorted by a total key before every removal, so removal order never
// depends on hash-set iteration.

use crate::branch::Branch;
use crate::config::FellingConfig;
use crate::effect::EffectSink;
use crate::geometry;
use crate::grid::Grid;
use crate::types::{CellKind, Centroid, Facing, VoxelCoord};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// The aggregation of every branch reachable from one chop event.
#[derive(Clone, Debug)]
pub struct Tree {
    /// Every cell ever claimed by any branch of this tree. Only grows.
    cells: FxHashSet<VoxelCoord>,
    /// Committed removal queue, kept sorted; the front is removed next.
    logs_to_fell: VecDeque<VoxelCoord>,
    /// Staging buffer for newly-qualified cells, merged at prep time.
    new_logs_to_fell: Vec<VoxelCoord>,
    /// The cell the triggering chop removed. Claimed, never scheduled.
    chopped_cell: VoxelCoord,
    /// Running average of `cells`, recomputed when staging commits.
    centroid: Centroid,
    /// Treehouse flag. Terminal: once set, the tree has no fellable work.
    disqualified: bool,
    /// Orientation from the chop event, immutable for the tree's life.
    felling_direction: Facing,
}

impl Tree {
    /// Create a tree for a chop at `chopped_cell`. The chopped cell itself
    /// is claimed up front — the host already removed that block, so
    /// growth must never re-discover it — but it is never scheduled.
    pub fn new(chopped_cell: VoxelCoord, felling_direction: Facing) -> Self {
        let mut cells = FxHashSet::default();
        cells.insert(chopped_cell);
        Self {
            cells,
            logs_to_fell: VecDeque::new(),
            new_logs_to_fell: Vec::new(),
            chopped_cell,
            centroid: Centroid::default(),
            disqualified: false,
            felling_direction,
        }
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    pub fn contains(&self, pos: VoxelCoord) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of cells claimed tree-wide (the value the size cap bounds).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn chopped_cell(&self) -> VoxelCoord {
        self.chopped_cell
    }

    pub fn centroid(&self) -> Centroid {
        self.centroid
    }

    pub fn felling_direction(&self) -> Facing {
        self.felling_direction
    }

    pub fn is_disqualified(&self) -> bool {
        self.disqualified
    }

    /// Cells queued for removal, committed and staged together.
    pub fn logs_queued_to_fell(&self) -> usize {
        self.logs_to_fell.len() + self.new_logs_to_fell.len()
    }

    /// Whether the scheduler should keep this tree. Disqualification wins
    /// over any queued work.
    pub fn has_logs_to_fell(&self) -> bool {
        !self.disqualified && (!self.logs_to_fell.is_empty() || !self.new_logs_to_fell.is_empty())
    }

    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------

    /// Initial discovery: every unvisited wood cell in the chopped cell's
    /// radius-1 neighborhood seeds a branch scan. Growth beyond that
    /// happens transitively inside the scans, and later through
    /// `fell_log` rescans.
    pub fn build_tree<G: Grid>(&mut self, grid: &G, config: &FellingConfig) {
        for target in geometry::neighborhood(self.chopped_cell) {
            if !self.contains(target) && grid.classify(target) == CellKind::Wood {
                self.scan_new_branch(target, grid, config);
            }
        }
    }

    fn scan_new_branch<G: Grid>(&mut self, origin: VoxelCoord, grid: &G, config: &FellingConfig) {
        let mut branch = Branch::new(origin);
        branch.scan(self, grid, config);
    }

    pub(crate) fn claim_cell(&mut self, pos: VoxelCoord) {
        self.cells.insert(pos);
    }

    pub(crate) fn disqualify(&mut self) {
        self.disqualified = true;
    }

    pub(crate) fn stage_for_felling(&mut self, cells: impl IntoIterator<Item = VoxelCoord>) {
        self.new_logs_to_fell.extend(cells);
    }

    // -----------------------------------------------------------------------
    // Draining
    // -----------------------------------------------------------------------

    /// Commit the staging buffer into the sorted removal queue. Idempotent;
    /// a no-op when nothing was staged since the last call.
    pub fn prep_for_felling(&mut self) {
        if self.new_logs_to_fell.is_empty() {
            return;
        }
        self.logs_to_fell.extend(self.new_logs_to_fell.drain(..));
        self.update_centroid();

        let centroid = self.centroid;
        self.logs_to_fell.make_contiguous().sort_by(|a, b| {
            a.y.cmp(&b.y)
                .then_with(|| {
                    // Farther from the centroid first: note b before a.
                    centroid
                        .squared_distance_to(*b)
                        .total_cmp(&centroid.squared_distance_to(*a))
                })
                .then_with(|| a.cmp(b))
        });
    }

    fn update_centroid(&mut self) {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut z = 0.0;
        for pos in &self.cells {
            x += f64::from(pos.x);
            y += f64::from(pos.y);
            z += f64::from(pos.z);
        }
        // `cells` is never empty: the chopped cell is claimed at creation.
        let n = self.cells.len() as f64;
        self.centroid = Centroid {
            x: x / n,
            y: y / n,
            z: z / n,
        };
    }

    /// Take the next committed cell, if any. Called by the scheduler after
    /// prep; an empty queue here just means the tree is done for now.
    pub(crate) fn pop_next_log(&mut self) -> Option<VoxelCoord> {
        self.logs_to_fell.pop_front()
    }

    /// Remove one cell: emit the falling-log effect, then rescan the cube
    /// around it — canopy in range sheds as falling leaves, unvisited wood
    /// seeds a new branch scan (this is how the tree grows mid-drain).
    pub(crate) fn fell_log<G: Grid, S: EffectSink>(
        &mut self,
        log: VoxelCoord,
        grid: &G,
        config: &FellingConfig,
        effects: &mut S,
    ) {
        effects.falling_log(log, self.centroid, self.felling_direction);
        for target in geometry::cube(log, config.leaf_scan_radius) {
            match grid.classify(target) {
                CellKind::Canopy => {
                    effects.falling_leaves(target, log, self.centroid, self.felling_direction);
                }
                CellKind::Wood => {
                    if !self.contains(target) {
                        self.scan_new_branch(target, grid, config);
                    }
                }
                CellKind::Ground | CellKind::Structure | CellKind::Other => {}
            }
        }
    }
}
