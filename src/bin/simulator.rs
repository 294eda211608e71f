//! Flappy Headless Simulator
//!
//! Plays seeded games without a terminal using the same tick functions as
//! the real game, then prints a summary.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of games, seeds increment per run (default: 100)
//!   --seed N        First RNG seed (default: 42)
//!   --frames N      Frame cap per game (default: 3750 = 1 minute)
//!   --idle          Never jump instead of using the autopilot
//!   --config FILE   Load tuning from a JSON file
//!   --verbose       One line per run
//!   --quiet         Only the summary

use flappy::simulator::{run_simulation, Policy, SimConfig};
use flappy::GameConfig;
use std::path::Path;

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    print_usage();
    std::process::exit(1);
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| fail(&format!("{flag} requires a number")))
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.num_runs = parse_number(args.get(i), "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number(args.get(i), "--seed"));
            }
            "--frames" => {
                i += 1;
                config.max_frames = parse_number(args.get(i), "--frames");
            }
            "--idle" => config.policy = Policy::Idle,
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .unwrap_or_else(|| fail("--config requires a file"));
                config.game = GameConfig::load(Path::new(path))
                    .unwrap_or_else(|e| fail(&format!("Could not load {path}: {e}")));
            }
            "--verbose" => config.verbosity = 2,
            "--quiet" => config.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Flappy Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of games, seeds increment per run (default: 100)\n\
         \x20 --seed N        First RNG seed (default: 42)\n\
         \x20 --frames N      Frame cap per game (default: 3750)\n\
         \x20 --idle          Never jump instead of using the autopilot\n\
         \x20 --config FILE   Load tuning from a JSON file\n\
         \x20 --verbose       One line per run\n\
         \x20 --quiet         Only the summary\n\
         \x20 --help, -h      Show this help"
    );
}

/// Default `RUST_LOG` filter for a verbosity level. Game-over lines are
/// `info`, so they only show per run with `--verbose`.
fn default_log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        _ => "info",
    }
}

fn main() {
    let config = parse_args();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(config.verbosity)),
    )
    .init();

    if config.verbosity > 0 {
        eprintln!(
            "Flappy Simulator: {} run(s) x {} frames, seed={:?}, policy={:?}",
            config.num_runs, config.max_frames, config.seed, config.policy,
        );
    }

    let report = run_simulation(&config);
    println!("{}", report.summary());
}
