//! Single-generation round-robin.

mod leaderboard;
mod stats;

pub use leaderboard::{renumber, LeaderboardEntry, LeaderboardSort};
pub use stats::{BotStats, StatsTable};

use log::trace;
use rand::RngCore;
use serde::Serialize;

use crate::{game::MatchEngine, Bot};

/// Score gap under which a match counts as a draw.
pub const DRAW_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchRecord {
    pub generation: u32,
    pub bot_a: String,
    pub bot_b: String,
    pub score_a: f64,
    pub score_b: f64,
    /// `None` on a draw.
    pub winner: Option<String>,
}

#[derive(Debug, Default)]
pub struct Tournament {
    engine: MatchEngine,
    stats: StatsTable,
    records: Vec<MatchRecord>,
}

impl Tournament {
    pub fn new(engine: MatchEngine) -> Self {
        Tournament {
            engine,
            stats: StatsTable::default(),
            records: vec![],
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn stats(&self) -> &StatsTable {
        &self.stats
    }

    /// Records of the last `run`.
    pub fn match_records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn run(
        &mut self,
        population: &mut [Bot],
        rounds_per_match: usize,
        generation: u32,
        rng: &mut dyn RngCore,
    ) -> &StatsTable {
        self.records.clear();
        self.stats = StatsTable::from_names(population.iter().map(Bot::name));

        for i in 0..population.len() {
            for j in (i + 1)..population.len() {
                let (head, tail) = population.split_at_mut(j);
                let (bot_a, bot_b) = (&mut head[i], &mut tail[0]);
                let result = self
                    .engine
                    .play_match(bot_a, bot_b, rounds_per_match, rng);
                let (name_a, name_b) = (bot_a.name(), bot_b.name());
                trace!(
                    "Generation {generation}: {name_a} {} - {} {name_b}",
                    result.score_a,
                    result.score_b
                );

                let winner = if (result.score_a - result.score_b).abs() <= DRAW_EPSILON {
                    self.stats.entry(name_a).draws += 1;
                    self.stats.entry(name_b).draws += 1;
                    None
                } else if result.score_a > result.score_b {
                    self.stats.entry(name_a).wins += 1;
                    self.stats.entry(name_b).losses += 1;
                    Some(name_a.to_string())
                } else {
                    self.stats.entry(name_b).wins += 1;
                    self.stats.entry(name_a).losses += 1;
                    Some(name_b.to_string())
                };

                let stats_a = self.stats.entry(name_a);
                stats_a.total_score += result.score_a;
                stats_a.cooperation_rates.push(result.cooperation_rate_a);
                let stats_b = self.stats.entry(name_b);
                stats_b.total_score += result.score_b;
                stats_b.cooperation_rates.push(result.cooperation_rate_b);

                self.records.push(MatchRecord {
                    generation,
                    bot_a: name_a.to_string(),
                    bot_b: name_b.to_string(),
                    score_a: result.score_a,
                    score_b: result.score_b,
                    winner,
                });
            }
        }

        self.stats.close();
        &self.stats
    }

    pub fn leaderboard(&self, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
        leaderboard::build(&self.stats, sort)
    }
}
