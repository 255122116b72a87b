//! Collision systems for the demo world.
//!
//! # System Flow
//!
//! Each tick:
//!
//! 1. [`collision_detector`] snapshots every game object into a
//!    [`Body`], runs one-way detection for every friend against every enemy
//!    and tracks each hit at the configured priority.
//! 2. [`collision_resolver`] handles everything tracked in priority order,
//!    clears the tracker, then turns the handlers' reports into
//!    [`CollisionEvent`](crate::events::collision::CollisionEvent)s.
//!
//! Only the friend → enemy direction is tested, so only `"FriendEnemy"`
//! strategies fire. Enemies still contribute `"EnemyFriend"` strategies;
//! they stay registered but unused unless another system asks for that
//! direction.

use bevy_ecs::prelude::*;
use log::{debug, error, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{Body, GameObjectKind};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::dispatch::collision::Collision;
use crate::dispatch::error::CollisionError;
use crate::resources::collisionbridge::CollisionBridge;
use crate::resources::collisionlog::CollisionLog;
use crate::resources::dispatcher::CollisionDispatcher;
use crate::resources::gameconfig::GameConfig;

/// Detects friend/enemy collisions and tracks them.
pub fn collision_detector(
    query: Query<(Entity, &GameObjectKind, &Group, &MapPosition, &BoxCollider)>,
    mut dispatcher: ResMut<CollisionDispatcher>,
    bridge: Res<CollisionBridge>,
    config: Res<GameConfig>,
) {
    let mut friends: Vec<Body> = Vec::new();
    let mut enemies: Vec<Body> = Vec::new();
    for (entity, kind, group, position, collider) in query.iter() {
        let body =
            Body::from_components(entity, *kind, group, position, collider, bridge.tx.clone());
        match kind {
            GameObjectKind::Friend => friends.push(body),
            GameObjectKind::Enemy => enemies.push(body),
        }
    }
    // Query order is not guaranteed; equal priorities are handled in tracking order.
    friends.sort_by_key(|body| body.entity);
    enemies.sort_by_key(|body| body.entity);

    for one in &friends {
        for other in &enemies {
            if dispatcher.detect_collision(one, other) {
                let collision =
                    Collision::with_priority(one.clone(), other.clone(), config.collision_priority);
                if !dispatcher.track_collision(collision) {
                    debug!("Collision {:?} -> {:?} already tracked", one.entity, other.entity);
                }
            }
        }
    }
}

/// Handles all tracked collisions, clears the tracker and emits
/// [`CollisionEvent`](crate::events::collision::CollisionEvent)s for what was
/// handled.
pub fn collision_resolver(
    mut dispatcher: ResMut<CollisionDispatcher>,
    bridge: Res<CollisionBridge>,
    mut log: ResMut<CollisionLog>,
    mut commands: Commands,
) {
    match dispatcher.handle_and_clear() {
        Ok(0) => {}
        Ok(handled) => debug!("Handled {} collisions", handled),
        Err(CollisionError::MissingStrategy { keys, handled }) => {
            warn!(
                "Handled {} collisions, no handler for {:?}",
                handled,
                keys.as_slice()
            );
            for key in keys {
                log.record_missing(key);
            }
        }
        Err(e) => error!("Collision handling failed: {}", e),
    }

    for event in bridge.drain() {
        commands.trigger(event);
    }
}
