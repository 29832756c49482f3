//! Core types and definitions for the gravix simulation.
//!
//! This crate defines the vocabulary shared by the engine: spherical
//! coordinate math, launch requests, observations, ECS components,
//! configuration, constants and errors. It has no runtime dependencies
//! beyond serde, glam and thiserror.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geo;
pub mod types;
