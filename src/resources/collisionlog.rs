//! Record of what the dispatcher resolved.
//!
//! Filled by [`observe_collision_event`](crate::events::collision::observe_collision_event)
//! and by the resolver system when bulk handling reports missing strategies.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::events::collision::CollisionEvent;

#[derive(Resource, Debug, Default)]
pub struct CollisionLog {
    /// Handled collisions in handling order, across all ticks.
    pub resolved: Vec<CollisionEvent>,
    /// Strategy keys that had tracked collisions but no handler.
    pub missing: Vec<String>,
}

impl CollisionLog {
    pub fn record(&mut self, event: CollisionEvent) {
        self.resolved.push(event);
    }

    /// Remember a missing key once.
    pub fn record_missing(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.missing.contains(&key) {
            self.missing.push(key);
        }
    }

    /// Number of handled collisions per strategy key.
    pub fn counts(&self) -> FxHashMap<&str, usize> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for event in &self.resolved {
            *counts.entry(event.key.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
