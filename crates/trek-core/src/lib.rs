//! Core types and definitions for the trek simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! entities, commands, game state, events, and constants. It carries
//! no engine logic and no dependency on any presentation layer.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod position;
pub mod range;
pub mod state;

#[cfg(test)]
mod tests;
