//! Pipe spawning, scrolling and recycling.

use super::types::{GameState, Pipe, PipeKind};
use crate::core::GameConfig;
use rand::Rng;

/// Pick the top pipe's y uniformly from
/// `[base - height/4 - height/2, base - height/4]`.
pub fn random_top_y<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f64 {
    let unit: f64 = rng.gen();
    config.top_pipe_band_top() - unit * config.top_pipe_band_span()
}

/// Spawn timer callback. Adds a pipe pair off the right edge unless the game
/// is over. Returns true if a pair was spawned.
pub fn spawn_tick<R: Rng + ?Sized>(game: &mut GameState, rng: &mut R) -> bool {
    if game.game_over {
        return false;
    }
    let top_y = random_top_y(&game.config, rng);
    spawn_pair(game, top_y);
    true
}

/// Append a top/bottom pair whose top pipe sits at `top_y`.
pub fn spawn_pair(game: &mut GameState, top_y: f64) {
    let config = &game.config;
    let x = config.board_width;
    let bottom_y = top_y + config.pipe_height + config.opening_space();

    let pipe = |kind, y| Pipe {
        kind,
        x,
        y,
        width: config.pipe_width,
        height: config.pipe_height,
        passed: false,
    };
    let top = pipe(PipeKind::Top, top_y);
    let bottom = pipe(PipeKind::Bottom, bottom_y);

    log::debug!("spawned pipe pair at x={x} top_y={top_y} bottom_y={bottom_y}");
    game.pipes.push_back(top);
    game.pipes.push_back(bottom);
}

/// Scroll every pipe left by the configured velocity.
pub fn advance_pipes(game: &mut GameState) {
    let dx = game.config.scroll_velocity_x;
    for pipe in &mut game.pipes {
        pipe.x += dx;
    }
}

/// Drop pipes that have fully scrolled past the left edge.
///
/// Pipes are kept oldest-first and all move at the same speed, so only the
/// front ever needs inspecting. Returns the number removed.
pub fn prune_pipes(game: &mut GameState) -> usize {
    let mut removed = 0;
    while let Some(front) = game.pipes.front() {
        if front.x >= -front.width {
            break;
        }
        game.pipes.pop_front();
        removed += 1;
    }
    removed
}
