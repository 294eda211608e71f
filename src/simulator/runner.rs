//! Main simulation runner.
//!
//! Each run plays one game on a simulated clock: every frame advances the
//! spawn timer by one frame interval, lets the policy decide on a jump, then
//! runs the frame tick. Statistics are collected from the returned events.

use super::config::{Policy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::game::{
    frame_tick, process_input, spawn_tick, GameInput, GameState, IntervalTimer, PipeKind,
    TickEvent,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How far below the gap centre the bird may sink before the autopilot jumps.
const AUTOPILOT_SLACK: f64 = 20.0;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed.wrapping_add(u64::from(run_idx)),
            None => rand::thread_rng().gen(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let stats = simulate_single_run(config, seed, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} (seed={}) - score {}, frames {}, {}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.score,
                stats.frames,
                match stats.cause {
                    Some(cause) => format!("{cause:?}"),
                    None => "survived".to_string(),
                }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one game until it ends or reaches the frame cap.
pub fn simulate_single_run<R: Rng + ?Sized>(
    config: &SimConfig,
    seed: u64,
    rng: &mut R,
) -> RunStats {
    let mut game = GameState::new(config.game);
    let mut spawn_timer = IntervalTimer::new(config.game.spawn_interval_ms);
    let frame_ms = config.game.frame_interval_ms;

    let mut stats = RunStats {
        seed,
        frames: 0,
        score: 0.0,
        pairs_spawned: 0,
        jumps: 0,
        cause: None,
    };

    while stats.frames < config.max_frames {
        for _ in 0..spawn_timer.advance(frame_ms) {
            if spawn_tick(&mut game, rng) {
                stats.pairs_spawned += 1;
            }
        }

        if config.policy == Policy::Autopilot && autopilot_wants_jump(&game) {
            process_input(&mut game, GameInput::Jump);
            stats.jumps += 1;
        }

        let events = frame_tick(&mut game);
        stats.frames += 1;

        let ended = events.iter().find_map(|event| match event {
            TickEvent::GameOver { cause, .. } => Some(*cause),
            TickEvent::Scored { .. } => None,
        });
        if let Some(cause) = ended {
            stats.cause = Some(cause);
            break;
        }
    }

    stats.score = game.score;
    stats
}

/// Jump when the bird is falling and has sunk below the centre of the next
/// gap it hasn't cleared yet (or the board centre if no pipe is ahead).
pub fn autopilot_wants_jump(game: &GameState) -> bool {
    let bird = &game.bird;
    let target = game
        .pipes
        .iter()
        .find(|pipe| pipe.kind == PipeKind::Top && pipe.x + pipe.width >= bird.x)
        .map(|top| top.y + top.height + game.config.opening_space() / 2.0)
        .unwrap_or(game.config.board_height / 2.0);

    let centre = bird.y + bird.height / 2.0;
    bird.velocity_y > 0.0 && centre > target + AUTOPILOT_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::obstacles::spawn_pair;
    use crate::game::GameOverCause;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_idle_bird_falls_off_after_forty_frames() {
        let config = SimConfig {
            policy: Policy::Idle,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, 1, &mut create_test_rng());
        // y = 320 + 0.4 * n(n+1)/2 first exceeds 640 at n = 40
        assert_eq!(stats.frames, 40);
        assert_eq!(stats.cause, Some(GameOverCause::FellOffBoard));
        assert_eq!(stats.score, 0.0);
        assert_eq!(stats.jumps, 0);
        assert_eq!(stats.pairs_spawned, 0);
    }

    #[test]
    fn test_autopilot_outlasts_idle() {
        let config = SimConfig::default();
        let stats = simulate_single_run(&config, 1, &mut create_test_rng());
        assert!(stats.frames > 200, "only lasted {} frames", stats.frames);
        assert!(stats.jumps > 0);
        assert!(stats.pairs_spawned > 0);
    }

    #[test]
    fn test_frame_cap_stops_run() {
        let config = SimConfig {
            max_frames: 30,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, 1, &mut create_test_rng());
        assert_eq!(stats.frames, 30);
        assert_eq!(stats.cause, None);
    }

    #[test]
    fn test_runs_are_reproducible_by_seed() {
        let config = SimConfig {
            num_runs: 3,
            max_frames: 1_000,
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
        assert_eq!(a.run_stats[1].seed, 43);
    }

    #[test]
    fn test_seed_sequence_wraps_at_max() {
        let config = SimConfig {
            num_runs: 2,
            seed: Some(u64::MAX),
            max_frames: 5,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.run_stats[0].seed, u64::MAX);
        assert_eq!(report.run_stats[1].seed, 0);
    }

    #[test]
    fn test_autopilot_targets_gap_centre() {
        let mut game = GameState::default();
        // Gap spans 312..472, centre 392
        spawn_pair(&mut game, -200.0);
        game.bird.velocity_y = 1.0;

        game.bird.y = 380.0; // centre 392
        assert!(!autopilot_wants_jump(&game));

        game.bird.y = 410.0; // centre 422
        assert!(autopilot_wants_jump(&game));

        game.bird.velocity_y = -2.0;
        assert!(!autopilot_wants_jump(&game));
    }

    #[test]
    fn test_autopilot_ignores_cleared_pipes() {
        let mut game = GameState::default();
        spawn_pair(&mut game, -380.0);
        game.pipes[0].x = -30.0;
        game.pipes[1].x = -30.0;
        // Cleared pipe ignored: target falls back to board centre 320
        game.bird.velocity_y = 1.0;
        game.bird.y = 300.0;
        assert!(!autopilot_wants_jump(&game));
    }
}
