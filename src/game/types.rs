//! Flappy Bird data structures.

use crate::core::GameConfig;
use std::collections::VecDeque;

/// Axis-aligned box in board coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which half of a pipe pair an obstacle is. Selects the sprite drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// The player. `x` is fixed after creation; only `y` and `velocity_y` move.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity per frame (positive = downward).
    pub velocity_y: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x,
            y: config.bird_start_y,
            width: config.bird_width,
            height: config.bird_height,
            velocity_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One pipe. Spawned in top/bottom pairs; only `x` and `passed` change.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub kind: PipeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Whether this pipe has already been scored.
    pub passed: bool,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Whole simulation state, passed explicitly to every tick function.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    /// Live pipes, oldest first. Always sorted by `x` ascending.
    pub pipes: VecDeque<Pipe>,
    /// Gaps passed, in half-units (each pipe of a pair is worth 0.5).
    pub score: f64,
    pub game_over: bool,
    /// Frame ticks processed since the last reset.
    pub frame_count: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            bird: Bird::new(&config),
            config,
            pipes: VecDeque::new(),
            score: 0.0,
            game_over: false,
            frame_count: 0,
        }
    }

    /// Restart after a game over. The bird keeps its current velocity.
    pub fn reset(&mut self) {
        self.bird.x = self.config.bird_start_x;
        self.bird.y = self.config.bird_start_y;
        self.pipes.clear();
        self.score = 0.0;
        self.game_over = false;
        self.frame_count = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = GameState::default();
        assert_eq!(game.bird.x, 45.0);
        assert_eq!(game.bird.y, 320.0);
        assert_eq!(game.bird.width, 34.0);
        assert_eq!(game.bird.height, 24.0);
        assert_eq!(game.bird.velocity_y, 0.0);
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 0.0);
        assert!(!game.game_over);
    }

    #[test]
    fn test_reset_restores_start_but_keeps_velocity() {
        let mut game = GameState::default();
        game.bird.y = 700.0;
        game.bird.velocity_y = 9.2;
        game.score = 3.5;
        game.game_over = true;
        game.pipes.push_back(Pipe {
            kind: PipeKind::Top,
            x: 100.0,
            y: -200.0,
            width: 64.0,
            height: 512.0,
            passed: false,
        });

        game.reset();

        assert_eq!(game.bird.y, 320.0);
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 0.0);
        assert!(!game.game_over);
        assert_eq!(game.bird.velocity_y, 9.2);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(45.0, 320.0, 34.0, 24.0);
        assert_eq!(r.right(), 79.0);
        assert_eq!(r.bottom(), 344.0);
    }
}
