// The felling scheduler — one manager per world context.
//
// `FellingManager` owns the live trees for one world and advances each of
// them by exactly one removal per tick. A tree's lifecycle is implicit in
// the queue: admitted when a chop discovers fellable work, retained while
// `has_logs_to_fell()`, dropped the first tick it reports none — which
// covers normal completion and treehouse disqualification uniformly.
//
// Fairness is insertion order: the queue is a plain `Vec` iterated front
// to back, every live tree gets its one removal, and no tree is
// prioritized by size. Large and small trees drain at the same per-tick
// rate, so wall-clock completion scales with tree size by design.
//
// The manager never stores the grid. `tick` and `on_chop` borrow it for
// the duration of the call, which is what binds the manager's usefulness —
// but not its memory — to the world's lifetime (see `registry.rs`).
//
// Overlap caveat, preserved from the source system: two chops that reach
// the same wood before either finishes felling create two trees with
// overlapping visited sets, and cells in the overlap produce duplicate
// effects. Hosts that care should debounce chop events themselves.
//
// See also: `tree.rs` for prep/removal, `effect.rs` for the sink the tick
// threads through, `config.rs` for the parameters consulted at scan time.

use crate::config::FellingConfig;
use crate::effect::EffectSink;
use crate::grid::Grid;
use crate::tree::Tree;
use crate::types::{Facing, VoxelCoord};

/// Scheduler for all in-progress trees of one world context.
#[derive(Clone, Debug)]
pub struct FellingManager {
    /// Live trees in admission order.
    fell_queue: Vec<Tree>,
    /// Felling parameters. Swappable between ticks; takes effect at the
    /// next branch scan, never retroactively on committed queues.
    pub config: FellingConfig,
}

impl FellingManager {
    pub fn new(config: FellingConfig) -> Self {
        Self {
            fell_queue: Vec::new(),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        self.fell_queue.is_empty()
    }

    /// Number of live trees.
    pub fn trees_queued_to_fell(&self) -> usize {
        self.fell_queue.len()
    }

    /// Total cells queued for removal across all live trees, committed and
    /// staged alike.
    pub fn logs_queued_to_fell(&self) -> usize {
        self.fell_queue.iter().map(Tree::logs_queued_to_fell).sum()
    }

    /// The live trees, in admission order.
    pub fn trees(&self) -> &[Tree] {
        &self.fell_queue
    }

    // -----------------------------------------------------------------------
    // Inbound events
    // -----------------------------------------------------------------------

    /// A block was chopped: discover the connected tree and admit it if the
    /// discovery found fellable work. Trees with nothing to fell (rooted,
    /// canopyless, over-cap, or disqualified) are discarded here and never
    /// enter the schedule.
    pub fn on_chop<G: Grid>(&mut self, grid: &G, pos: VoxelCoord, direction: Facing) {
        let mut tree = Tree::new(pos, direction);
        tree.build_tree(grid, &self.config);
        if tree.has_logs_to_fell() {
            self.fell_queue.push(tree);
        }
    }

    /// Advance every live tree by at most one removal.
    ///
    /// First pass retires trees with no remaining work; second pass commits
    /// each survivor's staging buffer and removes its front cell. A tree
    /// whose queue is empty after prep is simply done for now — it will be
    /// retired (or regrow) on a later tick. Safe to call with no trees.
    pub fn tick<G: Grid, S: EffectSink>(&mut self, grid: &G, effects: &mut S) {
        self.fell_queue.retain(Tree::has_logs_to_fell);
        let config = &self.config;
        for tree in self.fell_queue.iter_mut() {
            tree.prep_for_felling();
            if let Some(log) = tree.pop_next_log() {
                tree.fell_log(log, grid, config, effects);
            }
        }
    }
}
