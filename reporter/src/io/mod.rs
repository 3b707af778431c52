//! Boundary adapters for reporter commands.

pub mod config;
pub mod input;
pub mod render;
