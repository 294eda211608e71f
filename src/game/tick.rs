//! Per-frame orchestration.
//!
//! [`frame_tick`] runs one frame of the simulation in a fixed order: bird
//! physics, pipe advance, pruning, then scoring and collision against the
//! updated positions. It returns the [`TickEvent`]s that happened so the
//! presentation layer can react without the core knowing about it.
//!
//! Spawning runs on its own timer via [`spawn_tick`](super::obstacles::spawn_tick).

use super::collision::{check_collisions, score_passed_pipes};
use super::obstacles::{advance_pipes, prune_pipes};
use super::physics::step_bird;
use super::types::GameState;
use crate::core::SCORE_PER_PIPE;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The bird dropped below the bottom of the board.
    FellOffBoard,
    /// The bird's box overlapped a pipe.
    HitObstacle,
}

/// A single event produced by a frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// A pipe was passed. `score` is the total after awarding it.
    Scored { score: f64 },
    /// The game just ended.
    GameOver { cause: GameOverCause, score: f64 },
}

/// Advance the simulation by one frame.
///
/// Once the game is over the bird is frozen and no scoring or collision runs,
/// but pipes keep scrolling and being pruned.
pub fn frame_tick(game: &mut GameState) -> Vec<TickEvent> {
    let mut events = Vec::new();
    let playing = !game.game_over;

    if playing {
        game.frame_count += 1;
        if step_bird(game) {
            events.push(TickEvent::GameOver {
                cause: GameOverCause::FellOffBoard,
                score: game.score,
            });
        }
    }

    advance_pipes(game);
    prune_pipes(game);

    if !playing {
        return events;
    }

    let before = game.score;
    for n in 1..=score_passed_pipes(game) {
        events.push(TickEvent::Scored {
            score: before + f64::from(n) * SCORE_PER_PIPE,
        });
    }

    let already_over = game.game_over;
    if check_collisions(game) && !already_over {
        events.push(TickEvent::GameOver {
            cause: GameOverCause::HitObstacle,
            score: game.score,
        });
    }

    for event in &events {
        match event {
            TickEvent::Scored { score } => log::trace!("scored, total {score}"),
            TickEvent::GameOver { cause, score } => {
                log::info!("game over ({cause:?}) with score {score}")
            }
        }
    }

    events
}
