//! Global flags for cross-system communication.
//!
//! Used for loop control such as `"quit_game"`, which the main loop polls
//! after every frame.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
