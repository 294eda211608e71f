//! Bird physics: gravity integration and the board boundaries.

use super::types::GameState;

/// Advance the bird by one frame.
///
/// Velocity accumulates without a terminal cap, and clamping at the ceiling
/// does not zero it. Falling below the board latches `game_over`.
/// Returns true if the bird fell off the board this frame.
pub fn step_bird(game: &mut GameState) -> bool {
    let bird = &mut game.bird;
    bird.velocity_y += game.config.gravity;
    bird.y = (bird.y + bird.velocity_y).max(0.0);

    if bird.y > game.config.board_height {
        game.game_over = true;
        return true;
    }
    false
}
