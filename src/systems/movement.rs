use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Moves every body by its velocity over the current tick.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        let (dx, dy) = rigidbody.displacement(time.delta);
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        position.x += dx;
        position.y += dy;
    }
}
