//! Demo game objects and their collision contributions.
//!
//! Every game object is tagged with a [`GameObjectKind`]. Each kind owns the
//! strategies for collisions where it is "one": friends know how to detect and
//! respond to enemies (`"FriendEnemy"`), enemies know about friends
//! (`"EnemyFriend"`).
//!
//! The dispatcher works on [`Body`] snapshots rather than on entities. A body
//! is rebuilt from the entity's components every tick and carries the channel
//! its handlers report through.

use bevy_ecs::prelude::{Component, Entity};
use crossbeam_channel::Sender;
use log::info;

use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::dispatch::collidable::{Collidable, DetectFn, HandleFn};
use crate::dispatch::key::pair_key;
use crate::dispatch::registry::StrategyMap;
use crate::events::collision::CollisionEvent;

/// The kinds of object living in the demo world.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameObjectKind {
    Friend,
    Enemy,
}

impl GameObjectKind {
    pub const FRIEND_KEY: &'static str = "Friend";
    pub const ENEMY_KEY: &'static str = "Enemy";

    /// Collision key of this kind.
    pub fn collision_key(self) -> &'static str {
        match self {
            GameObjectKind::Friend => Self::FRIEND_KEY,
            GameObjectKind::Enemy => Self::ENEMY_KEY,
        }
    }

    /// The kind this one collides with.
    pub fn opponent(self) -> GameObjectKind {
        match self {
            GameObjectKind::Friend => GameObjectKind::Enemy,
            GameObjectKind::Enemy => GameObjectKind::Friend,
        }
    }

    /// Where the first object of this kind is placed.
    pub fn default_position(self) -> MapPosition {
        match self {
            GameObjectKind::Friend => MapPosition::new(225.0, 245.0),
            GameObjectKind::Enemy => MapPosition::new(240.0, 230.0),
        }
    }

    pub fn default_size(self) -> f32 {
        match self {
            GameObjectKind::Friend => 50.0,
            GameObjectKind::Enemy => 100.0,
        }
    }

    /// Strategy key for collisions where this kind is "one".
    pub fn strategy_key(self) -> String {
        pair_key(self.collision_key(), self.opponent().collision_key())
    }

    fn response(self) -> &'static str {
        match self {
            GameObjectKind::Friend => "Performing the collision response for a friend and an enemy",
            GameObjectKind::Enemy => "Performing the collision response for an enemy and a friend",
        }
    }
}

/// Per-tick collision snapshot of a game object.
///
/// The collision key comes from the entity's [`Group`]; the strategies it
/// contributes come from its kind.
#[derive(Clone, Debug)]
pub struct Body {
    pub entity: Entity,
    pub kind: GameObjectKind,
    pub group: Group,
    pub bounds: Rect,
    outbox: Sender<CollisionEvent>,
}

impl Body {
    /// Body grouped under its kind's own collision key.
    pub fn new(entity: Entity, kind: GameObjectKind, bounds: Rect, outbox: Sender<CollisionEvent>) -> Self {
        Self {
            entity,
            kind,
            group: Group::new(kind.collision_key()),
            bounds,
            outbox,
        }
    }

    /// Snapshot of an entity from its components.
    pub fn from_components(
        entity: Entity,
        kind: GameObjectKind,
        group: &Group,
        position: &MapPosition,
        collider: &BoxCollider,
        outbox: Sender<CollisionEvent>,
    ) -> Self {
        Self {
            entity,
            kind,
            group: group.clone(),
            bounds: collider.rect_at(position),
            outbox,
        }
    }

    /// Report a resolved collision between `self` ("one") and `other`.
    fn report(&self, other: &Body) {
        let event = CollisionEvent {
            one: self.entity,
            other: other.entity,
            key: pair_key(self.collision_key(), other.collision_key()),
        };
        // The receiving side lives as long as the world; a closed channel only
        // happens during teardown.
        let _ = self.outbox.send(event);
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl Collidable for Body {
    type Shape = Rect;

    fn collision_key(&self) -> &str {
        self.group.name()
    }

    fn bounding_shape(&self) -> &Rect {
        &self.bounds
    }

    fn detection_strategies(&self) -> StrategyMap<DetectFn<Self>> {
        let mut detectors: StrategyMap<DetectFn<Self>> = StrategyMap::default();
        detectors.insert(
            self.kind.strategy_key(),
            Box::new(|a: &Body, b: &Body| a.bounding_shape().intersects(b.bounding_shape())),
        );
        detectors
    }

    fn handling_strategies(&self) -> StrategyMap<HandleFn<Self>> {
        let response = self.kind.response();
        let mut handlers: StrategyMap<HandleFn<Self>> = StrategyMap::default();
        handlers.insert(
            self.kind.strategy_key(),
            Box::new(move |a: &Body, b: &Body| {
                info!("{} ({:?} -> {:?})", response, a.entity, b.entity);
                a.report(b);
            }),
        );
        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;
    use crossbeam_channel::unbounded;

    fn body(world: &mut World, kind: GameObjectKind, bounds: Rect, tx: &Sender<CollisionEvent>) -> Body {
        Body::new(world.spawn_empty().id(), kind, bounds, tx.clone())
    }

    #[test]
    fn test_strategy_keys_are_one_way() {
        assert_eq!(GameObjectKind::Friend.strategy_key(), "FriendEnemy");
        assert_eq!(GameObjectKind::Enemy.strategy_key(), "EnemyFriend");
    }

    #[test]
    fn test_contributions_use_own_key() {
        let mut world = World::new();
        let (tx, _rx) = unbounded();
        let friend = body(&mut world, GameObjectKind::Friend, Rect::new(0.0, 0.0, 1.0, 1.0), &tx);
        assert!(friend.detection_strategies().contains_key("FriendEnemy"));
        assert!(friend.handling_strategies().contains_key("FriendEnemy"));
        assert!(!friend.detection_strategies().contains_key("EnemyFriend"));
    }

    #[test]
    fn test_detection_uses_bounds() {
        let mut world = World::new();
        let (tx, _rx) = unbounded();
        let friend = body(&mut world, GameObjectKind::Friend, Rect::new(225.0, 245.0, 50.0, 50.0), &tx);
        let near = body(&mut world, GameObjectKind::Enemy, Rect::new(240.0, 230.0, 100.0, 100.0), &tx);
        let far = body(&mut world, GameObjectKind::Enemy, Rect::new(900.0, 900.0, 10.0, 10.0), &tx);
        let detectors = friend.detection_strategies();
        let detect = &detectors["FriendEnemy"];
        assert!(detect(&friend, &near));
        assert!(!detect(&friend, &far));
    }

    #[test]
    fn test_handler_reports_through_outbox() {
        let mut world = World::new();
        let (tx, rx) = unbounded();
        let friend = body(&mut world, GameObjectKind::Friend, Rect::new(0.0, 0.0, 1.0, 1.0), &tx);
        let enemy = body(&mut world, GameObjectKind::Enemy, Rect::new(0.0, 0.0, 1.0, 1.0), &tx);
        let mut handlers = friend.handling_strategies();
        let handle = handlers.get_mut("FriendEnemy").unwrap();
        handle(&friend, &enemy);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.one, friend.entity);
        assert_eq!(event.other, enemy.entity);
        assert_eq!(event.key, "FriendEnemy");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_body_identity_is_entity() {
        let mut world = World::new();
        let (tx, _rx) = unbounded();
        let a = body(&mut world, GameObjectKind::Friend, Rect::new(0.0, 0.0, 1.0, 1.0), &tx);
        let moved = Body::new(a.entity, GameObjectKind::Friend, Rect::new(5.0, 5.0, 1.0, 1.0), tx.clone());
        let b = body(&mut world, GameObjectKind::Friend, Rect::new(0.0, 0.0, 1.0, 1.0), &tx);
        assert_eq!(a, moved);
        assert_ne!(a, b);
    }
}
