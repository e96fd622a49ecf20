mod evolution_loop;
mod history;
mod reproduction;

pub use evolution_loop::EvolutionLoop;
pub use history::{BotSnapshot, GenerationHistory, GenerationSnapshot, LeaderboardRecord};

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::game::GameError;

pub const DEFAULT_BAN_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum EventType {
    StatusChanged(EvolutionStatus),
    GenerationStarted(u32),
    GenerationEvaluated(u32),
    StrategiesBanned(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvolutionStatus {
    #[default]
    Idle,
    Running,
    Terminated(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// At most one strategy kind is left standing.
    Converged,
    /// The configured number of generations ran out.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct EvolutionConfig {
    pub generations: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub survival_rate: f64,
    pub rounds_per_match: usize,
    pub mutate: bool,
    /// Generation-1 cooperation percentage under which a kind gets banned.
    #[validate(range(min = 0.0, max = 100.0))]
    pub ban_threshold: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            generations: 10,
            survival_rate: 0.5,
            rounds_per_match: 200,
            mutate: true,
            ban_threshold: DEFAULT_BAN_THRESHOLD,
        }
    }
}

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ValidationErrors),
    #[error("Cannot evolve an empty roster")]
    EmptyRoster,
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type EvolutionResult = Result<GenerationHistory, EvolutionError>;

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::EvolutionConfig;

    #[test]
    fn test_evolution_config_default_should_be_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_evolution_config_should_reject_out_of_range_rates() {
        // Given
        let config = EvolutionConfig {
            survival_rate: 1.5,
            ..Default::default()
        };

        // When
        let result = config.validate();

        // Then
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("survival_rate"));

        // Given
        let config = EvolutionConfig {
            ban_threshold: -1.0,
            ..Default::default()
        };

        // Then
        assert!(config.validate().is_err());
    }
}
