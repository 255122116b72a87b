//! ECS components of the demo world.
//!
//! - [`boxcollider`] – axis-aligned collider and the [`Rect`](boxcollider::Rect) bounding shape
//! - [`gameobject`] – friend/enemy kinds and the [`Body`](gameobject::Body) collision snapshot
//! - [`group`] – collision group tag
//! - [`mapposition`] – world position
//! - [`rigidbody`] – velocity
pub mod boxcollider;
pub mod gameobject;
pub mod group;
pub mod mapposition;
pub mod rigidbody;
