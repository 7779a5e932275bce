//! Space Atlas - Interactive Solar System
//!
//! A library crate exposing the atlas simulation, rendering, and interaction
//! components for testing and integration purposes.

pub mod catalog;
pub mod input;
pub mod render;
pub mod sim;
pub mod types;
pub mod ui;

#[cfg(test)]
mod proptest_sim;
