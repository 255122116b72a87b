//! ECS resources of the demo world.
//!
//! Overview
//! - `collisionbridge` – channel carrying handler reports back into the world
//! - `collisionlog` – every handled collision and every missing handler key
//! - `dispatcher` – the world's collision dispatcher
//! - `gameconfig` – INI-backed world configuration
//! - `worldtime` – simulation time and delta
pub mod collisionbridge;
pub mod collisionlog;
pub mod dispatcher;
pub mod gameconfig;
pub mod worldtime;
