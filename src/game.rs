//! Demo game world.
//!
//! A small world of friends and enemies that exercises the dispatcher the way
//! a game would: strategies are registered once at setup, then every tick
//! moves objects, detects and tracks collisions, and handles them in priority
//! order.
//!
//! # Tick
//!
//! 1. [`update_world_time`] advances the clock
//! 2. [`movement`] moves bodies
//! 3. [`collision_detector`] tracks friend → enemy hits
//! 4. [`collision_resolver`] handles and clears them, emitting events

use bevy_ecs::prelude::*;
use log::info;
use serde::Serialize;

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{Body, GameObjectKind};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::observe_collision_event;
use crate::resources::collisionbridge::CollisionBridge;
use crate::resources::collisionlog::CollisionLog;
use crate::resources::dispatcher::CollisionDispatcher;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{collision_detector, collision_resolver};
use crate::systems::movement::movement;
use crate::systems::time::update_world_time;

/// Maximum speed of scattered objects, in world units per second.
const SCATTER_SPEED: f32 = 40.0;

/// Spawn one game object and return its entity.
pub fn spawn_game_object(
    world: &mut World,
    kind: GameObjectKind,
    position: MapPosition,
    size: f32,
    body: RigidBody,
) -> Entity {
    world
        .spawn((
            kind,
            Group::new(kind.collision_key()),
            position,
            BoxCollider::square(size),
            body,
        ))
        .id()
}

/// Insert the resources and observers the demo needs, spawn the configured
/// objects and register their strategies.
///
/// The first friend and the first enemy are placed so they overlap; any
/// further objects are scattered with the configured seed.
pub fn setup(world: &mut World, config: GameConfig) {
    let mut rng = fastrand::Rng::with_seed(config.seed);

    world.insert_resource(WorldTime::default());
    world.insert_resource(CollisionBridge::new());
    world.insert_resource(CollisionLog::default());
    world.insert_resource(CollisionDispatcher::default());
    world.add_observer(observe_collision_event);

    let mut spawned = Vec::new();
    for (kind, count) in [
        (GameObjectKind::Friend, config.friends),
        (GameObjectKind::Enemy, config.enemies),
    ] {
        for index in 0..count {
            let (position, body) = if index == 0 {
                (kind.default_position(), RigidBody::new())
            } else {
                let position = MapPosition::new(
                    rng.f32() * config.world_width,
                    rng.f32() * config.world_height,
                );
                let body = RigidBody::with_velocity(
                    (rng.f32() * 2.0 - 1.0) * SCATTER_SPEED,
                    (rng.f32() * 2.0 - 1.0) * SCATTER_SPEED,
                );
                (position, body)
            };
            let entity = spawn_game_object(world, kind, position, kind.default_size(), body);
            spawned.push((entity, kind, position));
        }
    }

    register_strategies(world, &spawned);
    world.insert_resource(config);
    world.flush();

    info!("Game world ready with {} objects", spawned.len());
}

/// Merge every spawned object's contributed strategies into the dispatcher.
fn register_strategies(world: &mut World, spawned: &[(Entity, GameObjectKind, MapPosition)]) {
    let tx = world.resource::<CollisionBridge>().tx.clone();
    let mut dispatcher = world.resource_mut::<CollisionDispatcher>();
    for (entity, kind, position) in spawned {
        let body = Body::from_components(
            *entity,
            *kind,
            &Group::new(kind.collision_key()),
            position,
            &BoxCollider::square(kind.default_size()),
            tx.clone(),
        );
        dispatcher.register_collidable(&body);
    }
}

/// Systems run every tick, in order.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision_detector, collision_resolver).chain());
    schedule
}

/// Outcome of a run, as printed by the binary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: f32,
    pub handled: usize,
    pub handled_by_key: Vec<(String, usize)>,
    pub missing: Vec<String>,
}

/// A world plus the schedule that drives it.
pub struct GameWorld {
    world: World,
    schedule: Schedule,
}

impl GameWorld {
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        setup(&mut world, config);
        Self {
            world,
            schedule: build_schedule(),
        }
    }

    /// Advance the world by one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    /// Run `ticks` ticks using the configured delta.
    pub fn run(&mut self, ticks: u32) {
        let dt = self.world.resource::<GameConfig>().delta;
        for _ in 0..ticks {
            self.tick(dt);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn summary(&self) -> RunSummary {
        let time = self.world.resource::<WorldTime>();
        let log = self.world.resource::<CollisionLog>();
        let mut handled_by_key: Vec<(String, usize)> = log
            .counts()
            .into_iter()
            .map(|(key, count)| (key.to_owned(), count))
            .collect();
        handled_by_key.sort();
        RunSummary {
            ticks: time.frame_count,
            elapsed: time.elapsed,
            handled: log.resolved.len(),
            handled_by_key,
            missing: log.missing.clone(),
        }
    }
}
