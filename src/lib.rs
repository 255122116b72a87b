//! Collidascope: pluggable collision detection and handling.
//!
//! The [`dispatch`] module is the engine: a keyed registry of client-written
//! detection predicates and handling actions, a priority-ordered tracker of
//! pending collisions, and the [`Collider`](dispatch::Collider) that ties them
//! together.
//!
//! The remaining modules build a small `bevy_ecs` demo world on top of it and
//! are used by the binary and the integration tests.

pub mod components;
pub mod dispatch;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
