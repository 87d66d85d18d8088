//! Simulation engine for the trek game.
//!
//! `GameEngine` owns the game state aggregate, processes player commands,
//! runs the turn state machine, and resolves combat, movement, repair and
//! sensor effects. Completely headless (no presentation dependency),
//! enabling deterministic testing.

pub mod actions;
pub mod engine;
pub mod world_setup;
