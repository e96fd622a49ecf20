use dilemma::{evolution::EvolutionError, game::GameError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Cannot reach metrics server: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error(transparent)]
    Strategy(#[from] anyhow::Error),
}
