// Branch discovery — bounded connected-component scan over wood cells.
//
// A `Branch` is one flood-filled component of wood grown breadth-first
// from a single frontier cell. It is transient: built, scanned exactly
// once, then either staged into its tree's removal queue or discarded.
// Either way its cells stay in the tree's visited set, so no cell is ever
// claimed twice by the same tree.
//
// During the scan the branch watches for three things in each accepted
// cell's radius-1 neighborhood:
// - unvisited wood: claimed and expanded, until the tree-wide size cap;
// - canopy material: sets `has_canopy` (a branch with no canopy anywhere
//   is dead wood and is not felled);
// - structure material: marks the whole tree a treehouse, which aborts
//   this scan and permanently disqualifies the tree.
//
// Rooting: a claimed cell sitting directly on ground material (that the
// tree has not itself claimed) marks the branch rooted. Rooted branches
// are never staged — they are still structurally attached, and only the
// detached, canopy-bearing material should fall.
//
// See also: `tree.rs` for the visited set and staging queue this scan
// feeds, `geometry.rs` for the neighborhood iteration, `config.rs` for
// the size cap.
//
// **Critical constraint: determinism.** The frontier is a FIFO queue and
// neighborhoods iterate in fixed geometric order, so claim order is a pure
// function of the grid.

use crate::config::FellingConfig;
use crate::geometry;
use crate::grid::Grid;
use crate::tree::Tree;
use crate::types::{CellKind, VoxelCoord};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// One bounded flood-filled component of wood cells.
#[derive(Clone, Debug)]
pub struct Branch {
    /// The cell the scan grew from.
    origin: VoxelCoord,
    /// Cells claimed by this branch (a subset of the tree's visited set).
    cells: FxHashSet<VoxelCoord>,
    /// True once any canopy material was observed adjacent to a branch cell.
    has_canopy: bool,
    /// True once any branch cell was found directly above ground material.
    /// Sticky — never re-checked or cleared.
    rooted: bool,
}

impl Branch {
    pub fn new(origin: VoxelCoord) -> Self {
        Self {
            origin,
            cells: FxHashSet::default(),
            has_canopy: false,
            rooted: false,
        }
    }

    pub fn origin(&self) -> VoxelCoord {
        self.origin
    }

    pub fn has_canopy(&self) -> bool {
        self.has_canopy
    }

    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    pub fn cells(&self) -> &FxHashSet<VoxelCoord> {
        &self.cells
    }

    /// Run the full discovery pass: claim the origin, expand breadth-first,
    /// then stage the branch's cells on the tree iff it qualifies —
    /// canopy-bearing, not rooted, and within the size cap (unless large
    /// trees may fall).
    pub fn scan<G: Grid>(&mut self, tree: &mut Tree, grid: &G, config: &FellingConfig) {
        self.claim(tree, grid, self.origin);
        self.expand(tree, grid, config);

        if self.has_canopy
            && !self.rooted
            && (tree.cell_count() < config.max_logs_processed || config.can_fell_large_trees)
        {
            tree.stage_for_felling(self.cells.iter().copied());
        }
    }

    /// Claim one cell into the branch and the tree's visited set, probing
    /// the cell below for rooting while the branch is still unrooted.
    fn claim<G: Grid>(&mut self, tree: &mut Tree, grid: &G, pos: VoxelCoord) {
        self.cells.insert(pos);
        tree.claim_cell(pos);

        if !self.rooted {
            let below = pos.below();
            // A cell the tree already claimed is wood, not ground — skip
            // the classifier round-trip.
            if !tree.contains(below) && grid.classify(below) == CellKind::Ground {
                self.rooted = true;
            }
        }
    }

    /// Breadth-first expansion from the origin. Stops accepting new cells
    /// once the tree reaches the cap (the current frontier still drains),
    /// and aborts outright as soon as the tree is disqualified.
    fn expand<G: Grid>(&mut self, tree: &mut Tree, grid: &G, config: &FellingConfig) {
        if tree.cell_count() >= config.max_logs_processed {
            return;
        }

        let mut frontier: VecDeque<VoxelCoord> = VecDeque::new();
        frontier.push_back(self.origin);

        while let Some(cell) = frontier.pop_front() {
            if tree.is_disqualified() {
                break;
            }
            for target in geometry::neighborhood(cell) {
                if tree.contains(target) {
                    continue;
                }
                match grid.classify(target) {
                    CellKind::Wood => {
                        if tree.cell_count() < config.max_logs_processed {
                            self.claim(tree, grid, target);
                            frontier.push_back(target);
                        }
                    }
                    CellKind::Canopy => {
                        self.has_canopy = true;
                    }
                    CellKind::Structure => {
                        tree.disqualify();
                    }
                    CellKind::Ground | CellKind::Other => {}
                }
            }
        }
    }
}
