//! Capability contract for anything that takes part in collisions.
//!
//! The dispatcher never inspects a collider beyond its collision key. The
//! bounding shape is only handed through to client strategies, and the
//! strategy maps a collider contributes are merged explicitly by
//! [`Collider::register_collidable`](crate::dispatch::collider::Collider::register_collidable).

use crate::dispatch::registry::StrategyMap;

/// Detection strategy: did `one` collide with `other`?
pub type DetectFn<C> = Box<dyn Fn(&C, &C) -> bool + Send + Sync>;

/// Handling strategy: resolve a collision between `one` and `other`.
pub type HandleFn<C> = Box<dyn FnMut(&C, &C) + Send + Sync>;

/// An entity that can be detected against and handled with other colliders
/// of the same type.
pub trait Collidable: Sized {
    /// Shape handed to detection strategies.
    type Shape;

    /// Stable, non-empty key used verbatim when building strategy keys.
    ///
    /// Colliders meant to share strategies must return identical keys.
    fn collision_key(&self) -> &str;

    /// Bounding shape used by client detection strategies.
    fn bounding_shape(&self) -> &Self::Shape;

    /// Detection strategies this collider contributes, keyed by pair key.
    fn detection_strategies(&self) -> StrategyMap<DetectFn<Self>> {
        StrategyMap::default()
    }

    /// Handling strategies this collider contributes, keyed by pair key.
    fn handling_strategies(&self) -> StrategyMap<HandleFn<Self>> {
        StrategyMap::default()
    }
}
