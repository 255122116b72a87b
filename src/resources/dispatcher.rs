//! The world's collision dispatcher.
//!
//! Strategies are registered once by [`game::setup`](crate::game::setup) and
//! stay for the lifetime of the world. The tracker inside is filled by
//! [`collision_detector`](crate::systems::collision::collision_detector) and
//! emptied every tick by
//! [`collision_resolver`](crate::systems::collision::collision_resolver).

use std::ops::{Deref, DerefMut};

use bevy_ecs::prelude::Resource;

use crate::components::gameobject::Body;
use crate::dispatch::collider::Collider;

#[derive(Resource, Default)]
pub struct CollisionDispatcher(pub Collider<Body>);

impl Deref for CollisionDispatcher {
    type Target = Collider<Body>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CollisionDispatcher {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
