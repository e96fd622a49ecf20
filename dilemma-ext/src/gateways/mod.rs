mod log_gateway;
mod statsd_gateway;

pub use log_gateway::LogGateway;
pub use statsd_gateway::StatsdGateway;

use dilemma::tournament::LeaderboardEntry;
use dipstick::*;

metrics! {
    ARENA_PROXY: Proxy = "Arena_Proxy" => {
        BEST_SCORE: Gauge = "best-score";
        MEAN_SCORE: Gauge = "mean-score";
        MEAN_COOPERATION: Gauge = "mean-cooperation";
        SURVIVORS: Gauge = "survivors";
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStats {
    pub best_score: f64,
    pub mean_score: f64,
    pub mean_cooperation: f64,
    pub survivors: usize,
}

/// `None` on an empty leaderboard.
pub fn compute_stats(board: &[&LeaderboardEntry], factor: f64) -> Option<GenerationStats> {
    if board.is_empty() {
        return None;
    }
    let count = board.len() as f64;
    let (best, sum, coop_sum) = board.iter().fold(
        (f64::NEG_INFINITY, 0.0, 0.0),
        |(best, sum, coop_sum), entry| {
            let score = entry.score * factor;
            (best.max(score), sum + score, coop_sum + entry.coop_rate_pct)
        },
    );
    Some(GenerationStats {
        best_score: best,
        mean_score: sum / count,
        mean_cooperation: coop_sum / count,
        survivors: board.len(),
    })
}
