use std::collections::BTreeMap;

use serde::Serialize;

use crate::tournament::LeaderboardEntry;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BotSnapshot {
    pub score: f64,
    pub coop_rate_pct: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenerationSnapshot {
    pub generation: u32,
    pub bots: BTreeMap<String, BotSnapshot>,
}

impl GenerationSnapshot {
    pub fn from_leaderboard(generation: u32, board: &[LeaderboardEntry]) -> Self {
        GenerationSnapshot {
            generation,
            bots: board
                .iter()
                .map(|entry| {
                    (
                        entry.bot.clone(),
                        BotSnapshot {
                            score: entry.score,
                            coop_rate_pct: entry.coop_rate_pct,
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn get(&self, bot: &str) -> Option<&BotSnapshot> {
        self.bots.get(bot)
    }
}

/// Score and cooperation per bot, one snapshot per generation actually run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenerationHistory {
    snapshots: Vec<GenerationSnapshot>,
}

impl GenerationHistory {
    pub(crate) fn push(&mut self, snapshot: GenerationSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenerationSnapshot> {
        self.snapshots.iter()
    }

    pub fn last(&self) -> Option<&GenerationSnapshot> {
        self.snapshots.last()
    }

    /// Every bot name seen over the run, sorted.
    pub fn bot_names(&self) -> Vec<&str> {
        let mut names = self
            .snapshots
            .iter()
            .flat_map(|snapshot| snapshot.bots.keys().map(String::as_str))
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl FromIterator<GenerationSnapshot> for GenerationHistory {
    fn from_iter<T: IntoIterator<Item = GenerationSnapshot>>(iter: T) -> Self {
        GenerationHistory {
            snapshots: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardRecord {
    pub generation: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}
