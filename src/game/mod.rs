//! Flappy Bird simulation core.
//!
//! A bird falls under gravity, the player jumps, and pipe pairs scroll in from
//! the right on a fixed timer. Two external timers drive it: [`frame_tick`]
//! once per displayed frame and [`spawn_tick`] every spawn interval. Inputs go
//! through [`process_input`] and drawing through [`draw_frame`].

pub mod collision;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod render;
pub mod tick;
pub mod timer;
pub mod types;

pub use input::{process_input, GameInput, InputOutcome};
pub use obstacles::spawn_tick;
pub use render::{draw_frame, Renderer, Sprite};
pub use tick::{frame_tick, GameOverCause, TickEvent};
pub use timer::IntervalTimer;
pub use types::*;
