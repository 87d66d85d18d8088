//! Action modules: each mutates the game state aggregate under the
//! engine's single-writer discipline and returns what the turn machine
//! needs to know.

pub mod combat;
pub mod enemy;
pub mod movement;
pub mod repair;
pub mod sensors;
pub mod shields;
pub mod targeting;
pub mod warp;
