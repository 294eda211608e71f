//! Simulation configuration.

use crate::core::GameConfig;

/// How the simulated player decides to jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Never jump. The bird free-falls off the board.
    Idle,
    /// Jump when falling below the centre of the next gap.
    Autopilot,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Frame cap per game before it counts as survived
    pub max_frames: u64,

    pub policy: Policy,

    /// Tuning the games are played with
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            // One minute of play at ~60 fps
            max_frames: 3_750,
            policy: Policy::Autopilot,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}
