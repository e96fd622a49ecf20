use std::cmp::Ordering;

use serde::Serialize;
use strum::{Display, EnumString};

use super::stats::{BotStats, StatsTable};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LeaderboardSort {
    #[default]
    Score,
    Wins,
    #[strum(serialize = "coop")]
    Cooperation,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub bot: String,
    pub score: f64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub coop_rate_pct: f64,
}

impl From<&BotStats> for LeaderboardEntry {
    fn from(stats: &BotStats) -> Self {
        LeaderboardEntry {
            rank: 0,
            bot: stats.name.clone(),
            score: round_to(stats.total_score, 2),
            wins: stats.wins,
            losses: stats.losses,
            draws: stats.draws,
            coop_rate_pct: round_to(stats.cooperation_rate * 100.0, 1),
        }
    }
}

fn sort_key(stats: &BotStats, sort: LeaderboardSort) -> f64 {
    match sort {
        LeaderboardSort::Score => stats.total_score,
        LeaderboardSort::Wins => stats.wins as f64,
        LeaderboardSort::Cooperation => stats.cooperation_rate,
    }
}

pub(super) fn build(stats: &StatsTable, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
    let mut sorted = stats.iter().collect::<Vec<_>>();
    // Stable: ties keep the table order.
    sorted.sort_by(|a, b| {
        sort_key(b, sort)
            .partial_cmp(&sort_key(a, sort))
            .unwrap_or(Ordering::Equal)
    });
    let mut board = sorted
        .into_iter()
        .map(LeaderboardEntry::from)
        .collect::<Vec<_>>();
    renumber(&mut board);
    board
}

pub fn renumber(board: &mut [LeaderboardEntry]) {
    board
        .iter_mut()
        .enumerate()
        .for_each(|(index, entry)| entry.rank = index + 1);
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
