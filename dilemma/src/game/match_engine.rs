use rand::{Rng, RngCore};
use serde::Serialize;

use crate::{Bot, Move, PayoffMatrix};

use super::GameError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub score_a: f64,
    pub score_b: f64,
    pub cooperation_rate_a: f64,
    pub cooperation_rate_b: f64,
    pub rounds: usize,
}

/// Plays fixed-length matches under a payoff matrix, flipping each produced
/// move with probability `noise_rate` to model execution errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchEngine {
    noise_rate: f64,
    payoffs: PayoffMatrix,
}

impl Default for MatchEngine {
    fn default() -> Self {
        MatchEngine {
            noise_rate: 0.03,
            payoffs: PayoffMatrix::default(),
        }
    }
}

impl MatchEngine {
    pub fn new(noise_rate: f64, payoffs: PayoffMatrix) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&noise_rate) {
            return Err(GameError::InvalidNoiseRate(noise_rate));
        }
        Ok(MatchEngine {
            noise_rate,
            payoffs,
        })
    }

    pub fn noise_rate(&self) -> f64 {
        self.noise_rate
    }

    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    fn apply_noise(&self, intended: Move, rng: &mut dyn RngCore) -> Move {
        if rng.gen::<f64>() < self.noise_rate {
            intended.flipped()
        } else {
            intended
        }
    }

    pub fn play_match(
        &self,
        bot_a: &mut Bot,
        bot_b: &mut Bot,
        rounds: usize,
        rng: &mut dyn RngCore,
    ) -> MatchResult {
        bot_a.reset();
        bot_b.reset();

        let (mut score_a, mut score_b) = (0.0, 0.0);
        let (mut cooperations_a, mut cooperations_b) = (0usize, 0usize);

        for round in 0..rounds {
            let intended_a = bot_a.get_move(round, rng);
            let move_a = self.apply_noise(intended_a, rng);
            let intended_b = bot_b.get_move(round, rng);
            let move_b = self.apply_noise(intended_b, rng);

            let (payoff_a, payoff_b) = self.payoffs.payoffs(move_a, move_b);
            score_a += payoff_a;
            score_b += payoff_b;

            if move_a.is_cooperation() {
                cooperations_a += 1;
            }
            if move_b.is_cooperation() {
                cooperations_b += 1;
            }

            // Histories hold realized moves, not intended ones.
            bot_a.record_result(move_a, move_b);
            bot_b.record_result(move_b, move_a);
        }

        MatchResult {
            score_a,
            score_b,
            cooperation_rate_a: cooperation_rate(cooperations_a, rounds),
            cooperation_rate_b: cooperation_rate(cooperations_b, rounds),
            rounds,
        }
    }
}

fn cooperation_rate(cooperations: usize, rounds: usize) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        cooperations as f64 / rounds as f64
    }
}
