//! Headless simulator.
//!
//! Plays games without a terminal, driving the same [`frame_tick`] and
//! [`spawn_tick`] the interactive front-end uses, on a simulated clock.
//! Useful for checking tuning changes against many seeded runs.
//!
//! [`frame_tick`]: crate::game::frame_tick
//! [`spawn_tick`]: crate::game::spawn_tick

mod config;
mod report;
mod runner;

pub use config::{Policy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{autopilot_wants_jump, run_simulation, simulate_single_run};
