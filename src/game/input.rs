//! Player input: jumping while playing, restarting after a game over.

use super::types::GameState;

/// Key names that trigger a jump.
pub const JUMP_KEYS: [&str; 3] = ["Space", "ArrowUp", "KeyX"];

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up arrow or X.
    Jump,
    /// Any other key. Ignored.
    Other,
}

impl GameInput {
    /// Map a key code name (e.g. `"Space"`, `"KeyA"`) to an input.
    pub fn from_key_name(name: &str) -> Self {
        if JUMP_KEYS.contains(&name) {
            Self::Jump
        } else {
            Self::Other
        }
    }
}

/// What an input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Jumped,
    Reset,
    Ignored,
}

/// Process a single input event.
///
/// While playing, a jump sets the bird's velocity to the jump impulse. After a
/// game over the same jump restarts the game instead, and leaves the bird's
/// velocity as it was.
pub fn process_input(game: &mut GameState, input: GameInput) -> InputOutcome {
    match input {
        GameInput::Jump if game.game_over => {
            log::info!("reset after game over (final score {})", game.score);
            game.reset();
            InputOutcome::Reset
        }
        GameInput::Jump => {
            game.bird.velocity_y = game.config.jump_velocity;
            InputOutcome::Jumped
        }
        GameInput::Other => InputOutcome::Ignored,
    }
}
