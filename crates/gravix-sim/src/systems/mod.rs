//! ECS systems that operate on the launch world.
//!
//! Systems are plain functions that take `&mut World`. They do not own state;
//! all per-launch state lives in components.

pub mod cleanup;
pub mod flight;
