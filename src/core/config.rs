//! Runtime configuration for the simulation.
//!
//! Every tunable lives here so a [`GameState`](crate::game::GameState) can
//! carry its own copy. The defaults reproduce the classic 360x640 board.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Tunable parameters of one game. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: f64,
    pub board_height: f64,

    pub bird_width: f64,
    pub bird_height: f64,
    pub bird_start_x: f64,
    pub bird_start_y: f64,

    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Reference y the random top-pipe band is measured from.
    pub pipe_base_y: f64,
    pub opening_divisor: f64,

    /// Horizontal pipe speed per frame (negative = leftward).
    pub scroll_velocity_x: f64,
    /// Downward acceleration per frame.
    pub gravity: f64,
    /// Velocity set (not added) by a jump.
    pub jump_velocity: f64,

    pub frame_interval_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_base_y: PIPE_BASE_Y,
            opening_divisor: OPENING_DIVISOR,
            scroll_velocity_x: SCROLL_VELOCITY_X,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            frame_interval_ms: FRAME_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Vertical gap between a top and bottom pipe.
    pub fn opening_space(&self) -> f64 {
        self.board_height / self.opening_divisor
    }

    /// Upper edge of the band the top pipe's y is drawn from.
    ///
    /// The band is `[top - pipe_height / 2, top]`, i.e. the base y shifted up
    /// by a quarter pipe and spanning half a pipe.
    pub fn top_pipe_band_top(&self) -> f64 {
        self.pipe_base_y - self.pipe_height / 4.0
    }

    /// Height of the random band for the top pipe's y.
    pub fn top_pipe_band_span(&self) -> f64 {
        self.pipe_height / 2.0
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Returns an error if the file can't be read,
    /// isn't valid JSON, or describes an unplayable board.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject parameter sets the simulation can't run with.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: &str| -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::InvalidInput, msg.to_string()))
        };

        if self.board_width <= 0.0 || self.board_height <= 0.0 {
            return invalid("board dimensions must be positive");
        }
        if self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return invalid("bird dimensions must be positive");
        }
        if self.pipe_width <= 0.0 || self.pipe_height <= 0.0 {
            return invalid("pipe dimensions must be positive");
        }
        if self.opening_divisor <= 0.0 {
            return invalid("opening_divisor must be positive");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if self.scroll_velocity_x >= 0.0 {
            return invalid("scroll_velocity_x must be negative");
        }
        if self.frame_interval_ms == 0 || self.spawn_interval_ms == 0 {
            return invalid("timer intervals must be non-zero");
        }
        Ok(())
    }
}
