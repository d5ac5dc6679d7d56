// Felling configuration.
//
// All tunable parameters live in `FellingConfig`, loadable from JSON at
// startup. The engine reads the config at branch-scan and qualification
// time, so a host that swaps the config sees the change on the next scan —
// never retroactively on queues that were already committed.
//
// See also: `branch.rs` for the size cap and qualification checks,
// `tree.rs` for the post-removal rescan radius, `felling.rs` which owns
// the config alongside the fell queue.

use serde::{Deserialize, Serialize};

/// Tunable felling parameters. Loaded from JSON, never mutated by the
/// engine itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FellingConfig {
    /// Global cap on cells claimed per tree. Reaching it is a graceful
    /// throttle, not an error: expansion stops accepting new cells but the
    /// tree keeps draining whatever was already committed.
    pub max_logs_processed: usize,

    /// When `true`, branches of a tree at or over the cap may still be
    /// staged for felling. When `false`, an over-cap tree keeps its cells
    /// visited but schedules nothing.
    pub can_fell_large_trees: bool,

    /// Chebyshev radius of the rescan around each removed log: canopy in
    /// range sheds as falling leaves, unvisited wood in range seeds a new
    /// branch scan.
    pub leaf_scan_radius: i32,
}

impl Default for FellingConfig {
    fn default() -> Self {
        Self {
            max_logs_processed: 2000,
            can_fell_large_trees: false,
            leaf_scan_radius: 4,
        }
    }
}

impl FellingConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
