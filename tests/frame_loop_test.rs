//! Integration test: frame and spawn tick behaviour over long runs.
//!
//! Drives the public tick API the way a front-end does (spawn timer and
//! frame timer fed the same clock) and checks the per-frame invariants.

use flappy::game::{IntervalTimer, PipeKind};
use flappy::{frame_tick, process_input, spawn_tick, GameConfig, GameInput, GameState, TickEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME_MS: u64 = 16;

/// Advance one frame of wall time: spawn ticks due, then the frame tick.
fn simulate_frame(
    game: &mut GameState,
    spawn_timer: &mut IntervalTimer,
    rng: &mut ChaCha8Rng,
) -> Vec<TickEvent> {
    for _ in 0..spawn_timer.advance(FRAME_MS) {
        spawn_tick(game, rng);
    }
    frame_tick(game)
}

fn pipes_sorted_by_x(game: &GameState) -> bool {
    game.pipes
        .iter()
        .zip(game.pipes.iter().skip(1))
        .all(|(a, b)| a.x <= b.x)
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_velocity_grows_by_gravity_each_frame() {
    let mut game = GameState::default();
    let mut previous = game.bird.velocity_y;
    for _ in 0..30 {
        frame_tick(&mut game);
        assert!(!game.game_over);
        assert!((game.bird.velocity_y - previous - 0.4).abs() < 1e-9);
        previous = game.bird.velocity_y;
    }
}

#[test]
fn test_ten_frames_match_closed_form() {
    let mut game = GameState::default();
    for _ in 0..10 {
        frame_tick(&mut game);
    }
    assert!((game.bird.velocity_y - 0.4 * 10.0).abs() < 1e-9);
}

#[test]
fn test_bird_never_above_top_edge() {
    let mut game = GameState::default();
    for _ in 0..200 {
        process_input(&mut game, GameInput::Jump);
        frame_tick(&mut game);
        assert!(game.bird.y >= 0.0);
    }
    assert_eq!(game.bird.y, 0.0);
    assert!(!game.game_over);
}

#[test]
fn test_falling_off_latches_until_reset() {
    let mut game = GameState::default();
    let mut frames = 0;
    while !game.game_over {
        frame_tick(&mut game);
        frames += 1;
        assert!(frames < 1_000, "bird never fell off");
    }
    assert!(game.bird.y > 640.0);

    for _ in 0..100 {
        frame_tick(&mut game);
        assert!(game.game_over);
    }
    process_input(&mut game, GameInput::Other);
    assert!(game.game_over);
}

// =============================================================================
// Obstacles
// =============================================================================

#[test]
fn test_first_pair_spawns_after_interval() {
    let mut game = GameState::default();
    let mut spawn_timer = IntervalTimer::new(1500);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // Jumping every frame pins the bird to the ceiling, which is harmless
    for _ in 0..93 {
        process_input(&mut game, GameInput::Jump);
        simulate_frame(&mut game, &mut spawn_timer, &mut rng);
    }
    assert!(game.pipes.is_empty());

    simulate_frame(&mut game, &mut spawn_timer, &mut rng);
    assert_eq!(game.pipes.len(), 2);
    // Spawned at the right edge, then scrolled by the same frame
    assert_eq!(game.pipes[0].x, 358.0);
}

#[test]
fn test_pipes_stay_sorted_and_get_recycled() {
    // Near gravity-free bird parked off to the left so it never collides
    let config = GameConfig {
        gravity: 1e-9,
        ..Default::default()
    };
    let mut game = GameState::new(config);
    game.bird.y = 0.0;
    game.bird.x = -1_000.0;
    let mut spawn_timer = IntervalTimer::new(config.spawn_interval_ms);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let mut max_live = 0;
    for _ in 0..5_000 {
        simulate_frame(&mut game, &mut spawn_timer, &mut rng);
        assert!(pipes_sorted_by_x(&game));
        assert!(game.pipes.iter().all(|p| p.x >= -p.width));
        max_live = max_live.max(game.pipes.len());
    }
    assert!(!game.game_over);
    // 424px of travel at 2px/frame is 212 frames, about 2.3 spawn intervals
    assert!(max_live <= 6, "pipes not recycled: {max_live} live");
}

#[test]
fn test_every_pair_keeps_opening_space() {
    let mut game = GameState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..100 {
        spawn_tick(&mut game, &mut rng);
    }
    let pipes = game.pipes.make_contiguous();
    for pair in pipes.chunks(2) {
        assert_eq!(pair[0].kind, PipeKind::Top);
        assert_eq!(pair[1].kind, PipeKind::Bottom);
        assert!((pair[1].y - pair[0].y - (512.0 + 160.0)).abs() < 1e-9);
        assert!(pair[0].y >= -384.0 && pair[0].y <= -128.0);
    }
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_clearing_a_gap_scores_one() {
    let mut game = GameState::default();
    flappy::game::obstacles::spawn_pair(&mut game, -200.0);

    let mut events = Vec::new();
    // Hover inside the gap (312..472) until the pair is behind the bird
    for _ in 0..200 {
        if game.bird.y > 400.0 {
            process_input(&mut game, GameInput::Jump);
        }
        events.extend(frame_tick(&mut game));
        assert!(!game.game_over, "bird crashed at y={}", game.bird.y);
    }

    assert_eq!(
        events,
        vec![
            TickEvent::Scored { score: 0.5 },
            TickEvent::Scored { score: 1.0 },
        ]
    );
    assert_eq!(game.score, 1.0);
    assert!(game.pipes.iter().all(|p| p.passed));
}
