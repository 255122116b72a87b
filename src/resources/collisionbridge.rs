//! Channel between handling strategies and the ECS world.
//!
//! Handling strategies only see the two colliders, so they report through the
//! sender carried by each [`Body`](crate::components::gameobject::Body). The
//! [`collision_resolver`](crate::systems::collision::collision_resolver)
//! system drains the receiver after every bulk handling pass.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::collision::CollisionEvent;

/// Shared bridge between handling strategies and the world.
#[derive(Resource)]
pub struct CollisionBridge {
    /// Cloned into every body snapshot.
    pub tx: Sender<CollisionEvent>,
    /// Polled by the resolver system.
    pub rx: Receiver<CollisionEvent>,
}

impl Default for CollisionBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionBridge {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<CollisionEvent>();
        Self { tx, rx }
    }

    /// Everything reported since the last drain, in send order.
    pub fn drain(&self) -> Vec<CollisionEvent> {
        self.rx.try_iter().collect()
    }
}
