use std::collections::BTreeSet;

use common::subject_observer::{SharedObservers, Subject};
use log::{debug, info, warn};
use rand::Rng;
use validator::Validate;

use crate::{
    game::MatchEngine,
    tournament::{
        renumber, LeaderboardEntry, LeaderboardSort, MatchRecord, Tournament,
    },
    Bot, Strategy,
};

use super::{
    history::{GenerationHistory, GenerationSnapshot, LeaderboardRecord},
    reproduction::{reproduce, CloningPool},
    EventType, EvolutionConfig, EvolutionError, EvolutionResult, EvolutionStatus, Termination,
};

/// Drives round-robin tournaments over generations: first-generation
/// banning, survival by rank, then cloning with optional mutation.
pub struct EvolutionLoop {
    observers: SharedObservers<Self, EventType>,
    roster: Vec<Bot>,
    population: Vec<Bot>,
    allowed: BTreeSet<String>,
    banned: Vec<String>,
    tournament: Tournament,
    status: EvolutionStatus,
    generation: u32,
    generation_history: GenerationHistory,
    match_history: Vec<MatchRecord>,
    leaderboard_history: Vec<LeaderboardRecord>,
}

impl Subject<EventType> for EvolutionLoop {
    fn observers(&self) -> &SharedObservers<Self, EventType> {
        &self.observers
    }

    fn observers_mut(&mut self) -> &mut SharedObservers<Self, EventType> {
        &mut self.observers
    }
}

impl EvolutionLoop {
    /// `roster` holds one instance per starting strategy kind.
    pub fn new(
        roster: Vec<Box<dyn Strategy>>,
        engine: MatchEngine,
    ) -> Result<Self, EvolutionError> {
        if roster.is_empty() {
            return Err(EvolutionError::EmptyRoster);
        }
        let roster = roster.into_iter().map(Bot::new).collect::<Vec<_>>();
        let allowed = roster.iter().map(|bot| bot.name().to_string()).collect();
        Ok(EvolutionLoop {
            observers: vec![],
            roster,
            population: vec![],
            allowed,
            banned: vec![],
            tournament: Tournament::new(engine),
            status: EvolutionStatus::Idle,
            generation: 0,
            generation_history: GenerationHistory::default(),
            match_history: vec![],
            leaderboard_history: vec![],
        })
    }

    pub fn population_size(&self) -> usize {
        self.roster.len()
    }

    pub fn population(&self) -> &[Bot] {
        &self.population
    }

    pub fn status(&self) -> EvolutionStatus {
        self.status
    }

    /// Last generation started, 1-based.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn banned(&self) -> &[String] {
        &self.banned
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    pub fn generation_history(&self) -> &GenerationHistory {
        &self.generation_history
    }

    pub fn match_history(&self) -> &[MatchRecord] {
        &self.match_history
    }

    pub fn leaderboard_history(&self) -> &[LeaderboardRecord] {
        &self.leaderboard_history
    }

    /// Rank-ordered entries of the most recent generation.
    pub fn latest_leaderboard(&self) -> Vec<&LeaderboardEntry> {
        self.leaderboard_history
            .iter()
            .filter(|record| record.generation == self.generation)
            .map(|record| &record.entry)
            .collect()
    }

    fn change_status(&mut self, status: EvolutionStatus) {
        if self.status != status {
            debug!("Evolution status: {:?} -> {:?}", self.status, status);
            self.status = status;
            self.notify_observers(EventType::StatusChanged(status));
        }
    }

    fn reset(&mut self) {
        self.population = self.roster.iter().map(Bot::spawn).collect();
        self.allowed = self
            .roster
            .iter()
            .map(|bot| bot.name().to_string())
            .collect();
        self.banned.clear();
        self.generation = 0;
        self.generation_history = GenerationHistory::default();
        self.match_history.clear();
        self.leaderboard_history.clear();
    }

    pub fn run(&mut self, config: &EvolutionConfig, rng: &mut impl Rng) -> EvolutionResult {
        config.validate()?;
        self.reset();
        self.change_status(EvolutionStatus::Running);

        let population_size = self.population_size();
        for generation in 1..=config.generations {
            self.generation = generation;
            self.notify_observers(EventType::GenerationStarted(generation));

            let board = self.evaluate(config, generation, rng);

            if board.len() <= 1 {
                match board.first() {
                    Some(entry) => info!(
                        "Generation {generation}: {} is the last strategy standing",
                        entry.bot
                    ),
                    None => info!("Generation {generation}: no strategy survived"),
                }
                self.change_status(EvolutionStatus::Terminated(Termination::Converged));
                return Ok(self.generation_history.clone());
            }

            let pool = CloningPool::from_config(config, board.len(), population_size);
            let templates = board[..pool.survivors]
                .iter()
                .filter_map(|entry| self.population.iter().find(|bot| bot.name() == entry.bot))
                .collect::<Vec<_>>();
            debug!(
                "Generation {generation}: {} survivors, {} clones each",
                templates.len(),
                pool.clones_per_survivor
            );
            self.population = reproduce(&templates, &pool, population_size, rng);
        }

        self.change_status(EvolutionStatus::Terminated(Termination::Exhausted));
        Ok(self.generation_history.clone())
    }

    /// Plays one generation and records it; returns the filtered leaderboard.
    fn evaluate(
        &mut self,
        config: &EvolutionConfig,
        generation: u32,
        rng: &mut impl Rng,
    ) -> Vec<LeaderboardEntry> {
        self.population.retain(|bot| self.allowed.contains(bot.name()));
        self.tournament
            .run(&mut self.population, config.rounds_per_match, generation, rng);
        self.match_history
            .extend_from_slice(self.tournament.match_records());

        let mut board = self
            .tournament
            .leaderboard(LeaderboardSort::Score)
            .into_iter()
            .filter(|entry| self.allowed.contains(&entry.bot))
            .collect::<Vec<_>>();

        if generation == 1 {
            let banned = board
                .iter()
                .filter(|entry| entry.coop_rate_pct < config.ban_threshold)
                .map(|entry| entry.bot.clone())
                .collect::<Vec<_>>();
            if !banned.is_empty() {
                for name in &banned {
                    warn!(
                        "Banning {name}: cooperation under {}% in generation 1",
                        config.ban_threshold
                    );
                    self.allowed.remove(name);
                }
                board.retain(|entry| !banned.contains(&entry.bot));
                self.banned.extend(banned.iter().cloned());
                self.notify_observers(EventType::StrategiesBanned(banned));
            }
        }
        renumber(&mut board);

        info!("=== Generation {generation} ===");
        for entry in &board {
            info!(
                "{:22} | Score: {:>8.0} | Coop: {:>5.1}%",
                entry.bot, entry.score, entry.coop_rate_pct
            );
        }

        self.leaderboard_history
            .extend(board.iter().cloned().map(|entry| LeaderboardRecord { generation, entry }));
        if !board.is_empty() {
            self.generation_history
                .push(GenerationSnapshot::from_leaderboard(generation, &board));
        }
        self.notify_observers(EventType::GenerationEvaluated(generation));
        board
    }
}
