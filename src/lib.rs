//! Flappy - a minimal real-time arcade game library
//!
//! This module exposes the simulation core for the terminal front-end, the
//! headless simulator and tests.

pub mod build_info;
pub mod core;
pub mod game;
pub mod simulator;

pub use crate::core::{GameConfig, FRAME_INTERVAL_MS, SPAWN_INTERVAL_MS};
pub use game::{
    draw_frame, frame_tick, process_input, spawn_tick, GameInput, GameOverCause, GameState,
    Renderer, Sprite, TickEvent,
};
