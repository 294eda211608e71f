// Board
pub const BOARD_WIDTH: f64 = 360.0;
pub const BOARD_HEIGHT: f64 = 640.0;

// Bird (408x228 sprite scaled down, 17/12 ratio)
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const BIRD_START_X: f64 = BOARD_WIDTH / 8.0;
pub const BIRD_START_Y: f64 = BOARD_HEIGHT / 2.0;

// Pipes (384x3072 sprite scaled down, 1/8 ratio)
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_HEIGHT: f64 = 512.0;
pub const PIPE_BASE_Y: f64 = 0.0;
/// Opening between a top and bottom pipe is `BOARD_HEIGHT / OPENING_DIVISOR`.
pub const OPENING_DIVISOR: f64 = 4.0;

// Physics, per frame
pub const SCROLL_VELOCITY_X: f64 = -2.0;
pub const GRAVITY: f64 = 0.4;
pub const JUMP_VELOCITY: f64 = -6.0;

// Timing
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

/// Score awarded per pipe. Top and bottom pass separately, so a gap is worth 1.
pub const SCORE_PER_PIPE: f64 = 0.5;

// HUD text anchors
pub const SCORE_TEXT_POS: (f64, f64) = (5.0, 45.0);
pub const GAME_OVER_TEXT_POS: (f64, f64) = (5.0, 90.0);
pub const GAME_OVER_TEXT: &str = "GAME OVER";
