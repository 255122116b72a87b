//! ECS systems of the demo world.
//!
//! - [`collision`] – detection/tracking and prioritized handling
//! - [`movement`] – applies velocities
//! - [`time`] – advances [`WorldTime`](crate::resources::worldtime::WorldTime)
pub mod collision;
pub mod movement;
pub mod time;
