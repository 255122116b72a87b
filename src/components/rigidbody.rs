//! Kinematic body component.
//!
//! The [`RigidBody`] stores a constant velocity consumed by the
//! [`movement`](crate::systems::movement::movement) system. The `frozen` flag
//! keeps the entity in place without removing its velocity.

use bevy_ecs::prelude::Component;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    /// Body at rest.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity_x: f32, velocity_y: f32) -> Self {
        Self {
            velocity_x,
            velocity_y,
            frozen: false,
        }
    }

    /// Displacement over `delta` seconds; zero when frozen.
    pub fn displacement(&self, delta: f32) -> (f32, f32) {
        if self.frozen {
            return (0.0, 0.0);
        }
        (self.velocity_x * delta, self.velocity_y * delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.displacement(1.0), (0.0, 0.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn test_displacement_scales_with_delta() {
        let rb = RigidBody::with_velocity(10.0, -4.0);
        assert_eq!(rb.displacement(0.5), (5.0, -2.0));
    }

    #[test]
    fn test_frozen_body_does_not_move() {
        let mut rb = RigidBody::with_velocity(10.0, 10.0);
        rb.frozen = true;
        assert_eq!(rb.displacement(1.0), (0.0, 0.0));
    }
}
