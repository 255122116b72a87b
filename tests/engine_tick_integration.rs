//! Demo world tick integration tests: movement, detection, tracked handling
//! and collision events.

use bevy_ecs::prelude::*;

use collidascope::components::gameobject::{Body, GameObjectKind};
use collidascope::components::mapposition::MapPosition;
use collidascope::components::rigidbody::RigidBody;
use collidascope::dispatch::collision::{Collision, Priority};
use collidascope::game::{GameWorld, build_schedule, setup, spawn_game_object};
use collidascope::resources::collisionbridge::CollisionBridge;
use collidascope::resources::collisionlog::CollisionLog;
use collidascope::resources::dispatcher::CollisionDispatcher;
use collidascope::resources::gameconfig::GameConfig;
use collidascope::resources::worldtime::WorldTime;
use collidascope::systems::collision::{collision_detector, collision_resolver};
use collidascope::systems::movement::movement;
use collidascope::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn config(friends: u32, enemies: u32) -> GameConfig {
    GameConfig {
        friends,
        enemies,
        ..GameConfig::new()
    }
}

fn make_world(friends: u32, enemies: u32) -> World {
    let mut world = World::new();
    setup(&mut world, config(friends, enemies));
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = build_schedule();
    schedule.run(world);
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn tick_collision_resolver(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_resolver);
    schedule.run(world);
}

fn entity_of(world: &mut World, kind: GameObjectKind) -> Entity {
    let mut query = world.query::<(Entity, &GameObjectKind)>();
    let mut found: Vec<Entity> = query
        .iter(world)
        .filter(|(_, k)| **k == kind)
        .map(|(e, _)| e)
        .collect();
    found.sort();
    found[0]
}

#[test]
fn setup_registers_contributed_strategies() {
    let world = make_world(1, 1);
    let dispatcher = world.resource::<CollisionDispatcher>();
    assert!(dispatcher.detector().strategies().contains("FriendEnemy"));
    assert!(dispatcher.detector().strategies().contains("EnemyFriend"));
    assert!(dispatcher.handler().strategies().contains("FriendEnemy"));
    assert!(dispatcher.handler().strategies().contains("EnemyFriend"));
    assert!(dispatcher.tracked().is_empty());
}

#[test]
fn movement_applies_velocity() {
    let mut world = make_world(0, 0);
    let entity = spawn_game_object(
        &mut world,
        GameObjectKind::Friend,
        MapPosition::new(0.0, 0.0),
        10.0,
        RigidBody::with_velocity(10.0, -2.0),
    );

    update_world_time(&mut world, 0.5);
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.x, 5.0));
    assert!(approx_eq(pos.y, -1.0));
}

#[test]
fn update_world_time_counts_frames() {
    let mut world = make_world(0, 0);
    assert!(approx_eq(world.resource::<WorldTime>().time_scale, 1.0));
    update_world_time(&mut world, 0.25);
    update_world_time(&mut world, 0.25);
    let time = world.resource::<WorldTime>();
    assert!(approx_eq(time.elapsed, 0.5));
    assert!(approx_eq(time.delta, 0.25));
    assert_eq!(time.frame_count, 2);
}

#[test]
fn detector_tracks_overlapping_friend_enemy_once() {
    let mut world = make_world(1, 1);
    tick_collision_detector(&mut world);

    let friend = entity_of(&mut world, GameObjectKind::Friend);
    let enemy = entity_of(&mut world, GameObjectKind::Enemy);
    let dispatcher = world.resource::<CollisionDispatcher>();
    let tracked: Vec<_> = dispatcher.tracked().iter().collect();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].one().entity, friend);
    assert_eq!(tracked[0].other().entity, enemy);
    assert_eq!(tracked[0].collision_key(), "FriendEnemy");
    assert_eq!(tracked[0].priority(), Priority::HIGHEST);
}

#[test]
fn detector_ignores_separated_objects() {
    let mut world = make_world(1, 0);
    spawn_game_object(
        &mut world,
        GameObjectKind::Enemy,
        MapPosition::new(1000.0, 1000.0),
        10.0,
        RigidBody::new(),
    );
    tick_collision_detector(&mut world);
    assert!(world.resource::<CollisionDispatcher>().tracked().is_empty());
}

#[test]
fn full_tick_handles_and_clears() {
    let mut world = make_world(1, 1);
    tick(&mut world, 0.016);

    let friend = entity_of(&mut world, GameObjectKind::Friend);
    let enemy = entity_of(&mut world, GameObjectKind::Enemy);
    let log = world.resource::<CollisionLog>();
    assert_eq!(log.resolved.len(), 1);
    assert_eq!(log.resolved[0].one, friend);
    assert_eq!(log.resolved[0].other, enemy);
    assert_eq!(log.resolved[0].key, "FriendEnemy");
    assert!(log.missing.is_empty());
    assert!(world.resource::<CollisionDispatcher>().tracked().is_empty());
}

#[test]
fn resolver_on_empty_tracker_emits_nothing() {
    let mut world = make_world(1, 1);
    tick_collision_resolver(&mut world);
    assert!(world.resource::<CollisionLog>().resolved.is_empty());
}

#[test]
fn resolver_records_missing_handler_and_handles_the_rest() {
    let mut world = make_world(1, 1);
    let friend = entity_of(&mut world, GameObjectKind::Friend);
    let enemy = entity_of(&mut world, GameObjectKind::Enemy);
    let tx = world.resource::<CollisionBridge>().tx.clone();

    // A pair with no strategies: two friends.
    let stray = spawn_game_object(
        &mut world,
        GameObjectKind::Friend,
        MapPosition::new(0.0, 0.0),
        5.0,
        RigidBody::new(),
    );
    let rect = collidascope::components::boxcollider::Rect::new(0.0, 0.0, 5.0, 5.0);
    let body = |entity, kind| Body::new(entity, kind, rect, tx.clone());
    {
        let mut dispatcher = world.resource_mut::<CollisionDispatcher>();
        dispatcher.track_collision(Collision::with_priority(
            body(stray, GameObjectKind::Friend),
            body(friend, GameObjectKind::Friend),
            Priority::HIGHEST,
        ));
        dispatcher.track_collision(Collision::new(
            body(friend, GameObjectKind::Friend),
            body(enemy, GameObjectKind::Enemy),
        ));
    }

    tick_collision_resolver(&mut world);

    let log = world.resource::<CollisionLog>();
    assert_eq!(log.missing, vec!["FriendFriend".to_owned()]);
    assert_eq!(log.resolved.len(), 1);
    assert_eq!(log.resolved[0].key, "FriendEnemy");
    assert!(world.resource::<CollisionDispatcher>().tracked().is_empty());
}

#[test]
fn events_follow_priority_order() {
    let mut world = make_world(1, 2);
    let friend = entity_of(&mut world, GameObjectKind::Friend);
    let enemy = entity_of(&mut world, GameObjectKind::Enemy);
    let tx = world.resource::<CollisionBridge>().tx.clone();
    let rect = collidascope::components::boxcollider::Rect::new(0.0, 0.0, 5.0, 5.0);
    let body = |entity, kind| Body::new(entity, kind, rect, tx.clone());

    {
        let mut dispatcher = world.resource_mut::<CollisionDispatcher>();
        dispatcher.track_collision(Collision::with_priority(
            body(enemy, GameObjectKind::Enemy),
            body(friend, GameObjectKind::Friend),
            Priority::LOWEST,
        ));
        dispatcher.track_collision(Collision::with_priority(
            body(friend, GameObjectKind::Friend),
            body(enemy, GameObjectKind::Enemy),
            Priority::HIGHEST,
        ));
    }
    tick_collision_resolver(&mut world);

    let keys: Vec<&str> = world
        .resource::<CollisionLog>()
        .resolved
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, vec!["FriendEnemy", "EnemyFriend"]);
}

#[test]
fn game_world_runs_configured_ticks() {
    let mut game = GameWorld::new(GameConfig {
        ticks: 4,
        ..config(1, 1)
    });
    game.run(4);

    let summary = game.summary();
    assert_eq!(summary.ticks, 4);
    assert_eq!(summary.handled, 4);
    assert_eq!(summary.handled_by_key, vec![("FriendEnemy".to_owned(), 4)]);
    assert!(summary.missing.is_empty());
}

#[test]
fn scattered_worlds_are_reproducible() {
    let run = || {
        let mut game = GameWorld::new(GameConfig {
            seed: 7,
            ..config(4, 4)
        });
        game.run(10);
        game.summary()
    };
    assert_eq!(run(), run());
}

#[test]
fn summary_serializes_to_json() {
    let mut game = GameWorld::new(config(1, 1));
    game.run(1);
    let json = serde_json::to_value(game.summary()).unwrap();
    assert_eq!(json["ticks"], 1);
    assert_eq!(json["handled"], 1);
    assert_eq!(json["handled_by_key"][0][0], "FriendEnemy");
}
