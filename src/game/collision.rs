//! Collision detection and scoring against live pipes.

use super::types::{GameState, Rect};
use crate::core::SCORE_PER_PIPE;

/// AABB overlap. Boxes that only share an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Latch `game_over` if the bird overlaps any pipe. Returns true on a hit.
pub fn check_collisions(game: &mut GameState) -> bool {
    let bird = game.bird.rect();
    let hit = game.pipes.iter().any(|pipe| overlaps(&bird, &pipe.rect()));
    if hit {
        game.game_over = true;
    }
    hit
}

/// Award [`SCORE_PER_PIPE`] for each pipe whose right edge the bird's x has
/// cleared. Only the bird's left x is compared. Each pipe scores once.
/// Returns the number of pipes scored this call.
pub fn score_passed_pipes(game: &mut GameState) -> u32 {
    let bird_x = game.bird.x;
    let mut scored = 0;
    for pipe in game.pipes.iter_mut() {
        if !pipe.passed && bird_x > pipe.x + pipe.width {
            pipe.passed = true;
            scored += 1;
        }
    }
    game.score += f64::from(scored) * SCORE_PER_PIPE;
    scored
}
