//! Collision event type and its logging observer.
//!
//! The demo's handling strategies do not touch the world directly. They send
//! a [`CollisionEvent`] through the
//! [`CollisionBridge`](crate::resources::collisionbridge::CollisionBridge);
//! the [`collision_resolver`](crate::systems::collision::collision_resolver)
//! system drains the bridge and triggers the events, in the order the
//! collisions were handled.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::collisionlog::CollisionLog;

/// Fired once per handled collision.
///
/// `one` and `other` keep the order the collision was tracked with; `key` is
/// the strategy key that resolved it.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub one: Entity,
    pub other: Entity,
    pub key: String,
}

/// Global observer that appends every handled collision to [`CollisionLog`].
pub fn observe_collision_event(trigger: On<CollisionEvent>, mut log: ResMut<CollisionLog>) {
    let event = trigger.event();
    debug!(
        "Collision '{}' handled: {:?} -> {:?}",
        event.key, event.one, event.other
    );
    log.record(event.clone());
}
