//! Terminal rendering. Binary-only: the library never depends on ratatui.

mod canvas;
pub mod play_scene;
