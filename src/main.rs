mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::game::{IntervalTimer, InputOutcome};
use flappy::{build_info, frame_tick, process_input, spawn_tick, GameConfig, GameState};
use input::{map_key_event, AppAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Frames simulated at most per loop iteration after a stall.
const MAX_CATCHUP_FRAMES: u64 = 5;

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    log_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!(
        "Flappy - terminal arcade game\n\
         \n\
         Usage: flappy [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --config FILE   Load tuning from a JSON file\n\
         \x20 --seed N        Seed pipe placement\n\
         \x20 --log FILE      Write logs to FILE (filter via RUST_LOG)\n\
         \x20 --version, -v   Show version information\n\
         \x20 --help, -h      Show this help"
    );
}

fn exit_with_usage(message: &str) -> ! {
    eprintln!("{message}");
    print_usage();
    std::process::exit(1);
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => cli.config_path = Some(PathBuf::from(path)),
                    None => exit_with_usage("--config requires a file"),
                }
            }
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => cli.seed = Some(seed),
                    None => exit_with_usage("--seed requires a number"),
                }
            }
            "--log" => {
                i += 1;
                match args.get(i) {
                    Some(path) => cli.log_path = Some(PathBuf::from(path)),
                    None => exit_with_usage("--log requires a file"),
                }
            }
            "--version" | "-v" => {
                println!(
                    "flappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => exit_with_usage(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    cli
}

/// Route logs into a file; stderr would draw over the alternate screen.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    if let Some(path) = &cli.log_path {
        init_logging(path)?;
    }

    let config = match &cli.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("starting (seed={:?})", cli.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, config, &mut rng);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let game = result?;
    println!("Final score: {}", flappy::game::render::format_score(game.score));
    Ok(())
}

/// Drive the game until the player quits. Returns the final state.
///
/// Both timers are fed the same measured wall-clock time; the frame timer
/// bounds how long input polling may block.
fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    config: GameConfig,
    rng: &mut StdRng,
) -> io::Result<GameState> {
    let mut game = GameState::new(config);
    let mut frame_timer = IntervalTimer::new(config.frame_interval_ms);
    let mut spawn_timer = IntervalTimer::new(config.spawn_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        // Poll for input until the next frame is due
        let timeout = Duration::from_millis(frame_timer.remaining_ms());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                match map_key_event(key_event) {
                    Some(AppAction::Quit) => return Ok(game),
                    Some(AppAction::Game(input)) => {
                        if process_input(&mut game, input) == InputOutcome::Reset {
                            log::debug!("restarted by player");
                        }
                    }
                    None => {}
                }
            }
        }

        let elapsed_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(elapsed_ms);
        run_due_ticks(
            &mut game,
            &mut frame_timer,
            &mut spawn_timer,
            rng,
            elapsed_ms,
        );

        terminal.draw(|frame| {
            let area = frame.size();
            ui::play_scene::render_play_scene(frame, area, &game);
        })?;
    }
}

/// Feed `elapsed_ms` to both timers and run the ticks that came due, spawns
/// first. Returns how many frame ticks ran.
fn run_due_ticks<R: Rng + ?Sized>(
    game: &mut GameState,
    frame_timer: &mut IntervalTimer,
    spawn_timer: &mut IntervalTimer,
    rng: &mut R,
    elapsed_ms: u64,
) -> u64 {
    for _ in 0..spawn_timer.advance(elapsed_ms) {
        spawn_tick(game, rng);
    }
    let frames = frame_timer.advance(elapsed_ms).min(MAX_CATCHUP_FRAMES);
    for _ in 0..frames {
        frame_tick(game);
    }
    frames
}
