//! Event types and observers used by the demo world.
//!
//! Submodules:
//! - [`collision`] – notifications for every collision the dispatcher handled
pub mod collision;
