use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::subject_observer::Observer;
use dilemma::evolution::{EventType, EvolutionLoop};
use dipstick::{Input, Statsd};
use log::trace;

use super::{compute_stats, ARENA_PROXY, BEST_SCORE, MEAN_COOPERATION, MEAN_SCORE, SURVIVORS};

/// Pushes per-generation gauges to a statsd server.
pub struct StatsdGateway {
    factor: f64,
}

impl StatsdGateway {
    /// `factor` scales scores before sending, statsd gauges being integral.
    pub fn new<A>(address: A, factor: f64) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        ARENA_PROXY.target(statsd_scope);

        Ok(StatsdGateway { factor })
    }
}

impl Observer<EvolutionLoop, EventType> for StatsdGateway {
    fn update(&self, source: &EvolutionLoop, event: EventType) {
        if let EventType::GenerationEvaluated(generation) = event {
            let board = source.latest_leaderboard();
            if let Some(stats) = compute_stats(&board, self.factor) {
                trace!("Sending metrics for generation {generation}: {stats:?}");
                BEST_SCORE.value(stats.best_score);
                MEAN_SCORE.value(stats.mean_score);
                MEAN_COOPERATION.value(stats.mean_cooperation);
                SURVIVORS.value(stats.survivors);
            }
        }
    }
}
