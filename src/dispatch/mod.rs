//! Pluggable collision detection and handling.
//!
//! The dispatcher does not know any geometry. Clients register detection
//! predicates and handling actions under a *pair key* (the two colliders'
//! collision keys concatenated, `one` first), then per tick:
//!
//! 1. ask [`Collider::detect_collision`] about candidate pairs,
//! 2. track each hit as a prioritized [`Collision`],
//! 3. resolve them all with [`Collider::handle_and_clear`] (or
//!    [`Collider::handle_all_tracked`] followed by an explicit clear).
//!
//! Submodules:
//! - [`collidable`] – capability contract and strategy signatures
//! - [`key`] – pair key derivation
//! - [`registry`] – keyed strategy storage
//! - [`detector`] – detection predicates
//! - [`handler`] – handling actions, single and bulk
//! - [`collision`] – collision record and priority
//! - [`tracker`] – priority-ordered pending collisions
//! - [`collider`] – the orchestrator
//! - [`error`] – error type
pub mod collidable;
pub mod collider;
pub mod collision;
pub mod detector;
pub mod error;
pub mod handler;
pub mod key;
pub mod registry;
pub mod tracker;

pub use collidable::{Collidable, DetectFn, HandleFn};
pub use collider::Collider;
pub use collision::{Collision, Priority};
pub use error::CollisionError;
pub use key::collision_key;
pub use registry::StrategyMap;
pub use tracker::Tracker;
