//! Render collaborator contract.
//!
//! The core never draws. It describes each frame as sprite and text draw
//! calls against a [`Renderer`] supplied by the front-end.

use super::types::{GameState, PipeKind, Rect};
use crate::core::{GAME_OVER_TEXT, GAME_OVER_TEXT_POS, SCORE_TEXT_POS};

/// Drawable selected by variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Bird,
    TopPipe,
    BottomPipe,
}

impl Sprite {
    /// Image asset backing this sprite.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Bird => "flappybird.png",
            Self::TopPipe => "toppipe.png",
            Self::BottomPipe => "bottompipe.png",
        }
    }
}

impl From<PipeKind> for Sprite {
    fn from(kind: PipeKind) -> Self {
        match kind {
            PipeKind::Top => Self::TopPipe,
            PipeKind::Bottom => Self::BottomPipe,
        }
    }
}

/// Drawing surface implemented by a front-end.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, x: f64, y: f64);
}

/// Score as shown on screen: `0`, `0.5`, `12`.
pub fn format_score(score: f64) -> String {
    format!("{score}")
}

/// Issue the draw calls for one frame: bird, every live pipe, the score, and
/// the game-over banner if the game has ended.
pub fn draw_frame<R: Renderer + ?Sized>(game: &GameState, renderer: &mut R) {
    renderer.clear();
    renderer.draw_sprite(Sprite::Bird, game.bird.rect());
    for pipe in &game.pipes {
        renderer.draw_sprite(pipe.kind.into(), pipe.rect());
    }

    let (x, y) = SCORE_TEXT_POS;
    renderer.draw_text(&format_score(game.score), x, y);
    if game.game_over {
        let (x, y) = GAME_OVER_TEXT_POS;
        renderer.draw_text(GAME_OVER_TEXT, x, y);
    }
}
