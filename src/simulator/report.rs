//! Simulation report generation.

use crate::game::GameOverCause;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub frames: u64,
    pub score: f64,
    pub pairs_spawned: u32,
    pub jumps: u32,
    /// None if the game hit the frame cap.
    pub cause: Option<GameOverCause>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_survived: u32,
    pub fell_off_board: u32,
    pub hit_obstacle: u32,

    pub avg_score: f64,
    pub best_score: f64,
    pub avg_frames: f64,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |cause: Option<GameOverCause>| {
            runs.iter().filter(|r| r.cause == cause).count() as u32
        };
        let runs_survived = count(None);
        let fell_off_board = count(Some(GameOverCause::FellOffBoard));
        let hit_obstacle = count(Some(GameOverCause::HitObstacle));

        let n = f64::from(num_runs.max(1));
        let avg_score = runs.iter().map(|r| r.score).sum::<f64>() / n;
        let avg_frames = runs.iter().map(|r| r.frames as f64).sum::<f64>() / n;
        let best_score = runs.iter().map(|r| r.score).fold(0.0, f64::max);

        Self {
            num_runs,
            runs_survived,
            fell_off_board,
            hit_obstacle,
            avg_score,
            best_score,
            avg_frames,
            run_stats: runs,
        }
    }

    /// Multi-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Runs: {}\n\
             Survived to frame cap: {}\n\
             Fell off board: {}\n\
             Hit obstacle: {}\n\
             Average score: {:.2}\n\
             Best score: {}\n\
             Average frames: {:.1}",
            self.num_runs,
            self.runs_survived,
            self.fell_off_board,
            self.hit_obstacle,
            self.avg_score,
            self.best_score,
            self.avg_frames,
        )
    }
}
