//! Keyboard handling for the terminal front-end.
//!
//! Translates crossterm key events into the DOM-style key names the core
//! binds to, so the jump bindings live in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flappy::GameInput;

/// What the front-end should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(GameInput),
    Quit,
}

/// DOM `KeyboardEvent.code` name for a key, where one exists.
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(' ') => Some("Space".to_string()),
        KeyCode::Up => Some("ArrowUp".to_string()),
        KeyCode::Down => Some("ArrowDown".to_string()),
        KeyCode::Left => Some("ArrowLeft".to_string()),
        KeyCode::Right => Some("ArrowRight".to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(format!("Key{}", c.to_ascii_uppercase()))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => Some(format!("Digit{c}")),
        _ => None,
    }
}

/// Map a key event. Returns None for releases and repeats.
pub fn map_key_event(key: KeyEvent) -> Option<AppAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppAction::Quit)
        }
        code => {
            let input = key_name(code)
                .map(|name| GameInput::from_key_name(&name))
                .unwrap_or(GameInput::Other);
            Some(AppAction::Game(input))
        }
    }
}
