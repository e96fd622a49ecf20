//! Moves, payoffs and the match engine.

mod match_engine;

pub use match_engine::{MatchEngine, MatchResult};

use serde::Serialize;
use strum::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Move {
    #[strum(serialize = "C")]
    Cooperate,
    #[strum(serialize = "D")]
    Defect,
}

impl Move {
    pub fn flipped(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }

    pub fn is_cooperation(self) -> bool {
        self == Move::Cooperate
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("Invalid noise rate: {0} is not within [0, 1]")]
    InvalidNoiseRate(f64),
}

/// Temptation, reward, punishment and sucker payoffs.
///
/// The usual ordering T > R > P > S is assumed by some strategies but not
/// enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PayoffMatrix {
    pub temptation: f64,
    pub reward: f64,
    pub punishment: f64,
    pub sucker: f64,
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        PayoffMatrix {
            temptation: 4.0,
            reward: 3.0,
            punishment: 1.0,
            sucker: 0.0,
        }
    }
}

impl PayoffMatrix {
    /// Returns (own payoff, opponent payoff).
    pub fn payoffs(&self, own: Move, opponent: Move) -> (f64, f64) {
        match (own, opponent) {
            (Move::Cooperate, Move::Cooperate) => (self.reward, self.reward),
            (Move::Cooperate, Move::Defect) => (self.sucker, self.temptation),
            (Move::Defect, Move::Cooperate) => (self.temptation, self.sucker),
            (Move::Defect, Move::Defect) => (self.punishment, self.punishment),
        }
    }
}
