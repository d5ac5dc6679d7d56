// Per-world registry of felling managers.
//
// The source system kept a weakly-keyed world→manager map and let garbage
// collection reap managers with their worlds. Here that is an explicit
// ownership contract instead: whichever host component manages world
// lifecycles owns a `FellingRegistry`, and calls `remove` when a world is
// torn down. Managers never hold a grid reference (see `grid.rs`), so
// dropping the entry is all the teardown there is — no dangling borrows
// to chase, no cross-tick state to flush.

use crate::config::FellingConfig;
use crate::felling::FellingManager;
use crate::types::WorldId;
use rustc_hash::FxHashMap;

/// Registry mapping world contexts to their felling managers.
#[derive(Clone, Debug, Default)]
pub struct FellingRegistry {
    managers: FxHashMap<WorldId, FellingManager>,
}

impl FellingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The manager for `world`, created with a clone of `config` on first
    /// touch. Typical call site: the host's chop handler.
    pub fn get_or_create(&mut self, world: WorldId, config: &FellingConfig) -> &mut FellingManager {
        self.managers
            .entry(world)
            .or_insert_with(|| FellingManager::new(config.clone()))
    }

    pub fn get(&self, world: WorldId) -> Option<&FellingManager> {
        self.managers.get(&world)
    }

    pub fn get_mut(&mut self, world: WorldId) -> Option<&mut FellingManager> {
        self.managers.get_mut(&world)
    }

    /// Drop a world's manager — call when the world context is torn down.
    /// All of its in-progress trees are discarded with it.
    pub fn remove(&mut self, world: WorldId) -> Option<FellingManager> {
        self.managers.remove(&world)
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let mut registry = FellingRegistry::new();
        let config = FellingConfig::default();

        registry.get_or_create(WorldId(1), &config);
        registry.get_or_create(WorldId(1), &config);
        registry.get_or_create(WorldId(2), &config);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn managers_are_isolated_per_world() {
        let mut registry = FellingRegistry::new();
        let config = FellingConfig::default();

        registry
            .get_or_create(WorldId(1), &config)
            .config
            .max_logs_processed = 7;

        assert_eq!(registry.get(WorldId(1)).unwrap().config.max_logs_processed, 7);
        // A fresh world still gets the registry-default config.
        let other = registry.get_or_create(WorldId(2), &config);
        assert_eq!(other.config.max_logs_processed, config.max_logs_processed);
    }

    #[test]
    fn remove_discards_the_manager_and_its_trees() {
        let mut registry = FellingRegistry::new();
        let config = FellingConfig::default();
        registry.get_or_create(WorldId(9), &config);

        let removed = registry.remove(WorldId(9));
        assert!(removed.is_some());
        assert!(registry.get(WorldId(9)).is_none());
        assert!(registry.is_empty());
        // Removing twice is a quiet no-op.
        assert!(registry.remove(WorldId(9)).is_none());
    }
}
