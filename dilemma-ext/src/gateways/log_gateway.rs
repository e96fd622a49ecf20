use common::subject_observer::Observer;
use dilemma::evolution::{EventType, EvolutionLoop};
use dipstick::{Input, InputScope, Log, LogScope};

use super::compute_stats;

/// Writes per-bot score gauges and generation aggregates to the `log` output.
pub struct LogGateway {
    scope: LogScope,
}

impl Default for LogGateway {
    fn default() -> Self {
        LogGateway::new(log::Level::Info)
    }
}

impl LogGateway {
    pub fn new(level: log::Level) -> Self {
        LogGateway {
            scope: Log::to_log().level(level).metrics(),
        }
    }
}

impl Observer<EvolutionLoop, EventType> for LogGateway {
    fn update(&self, source: &EvolutionLoop, event: EventType) {
        if let EventType::GenerationEvaluated(generation) = event {
            let board = source.latest_leaderboard();
            let gauge = |name: &str| self.scope.gauge(&format!("generation-{generation}.{name}"));
            for entry in &board {
                gauge(&format!("{}.score", entry.bot)).value(entry.score);
            }
            if let Some(stats) = compute_stats(&board, 1.0) {
                gauge("best-score").value(stats.best_score);
                gauge("mean-score").value(stats.mean_score);
                gauge("mean-cooperation").value(stats.mean_cooperation);
            }
        }
    }
}
