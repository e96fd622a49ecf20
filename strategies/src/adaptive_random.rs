use dilemma::{Move, RoundContext, Strategy};
use rand::{Rng, RngCore};

use crate::StrategyKind;

/// Cooperation probability never drops below this, whatever the opponent does.
pub const BASE_COOPERATION: f64 = 0.3;

/// Cooperates with a probability that grows with the opponent's observed
/// cooperation ratio.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveRandom;

pub fn cooperation_probability(opponent: &[Move]) -> f64 {
    if opponent.is_empty() {
        return 1.0;
    }
    let cooperations = opponent.iter().filter(|m| m.is_cooperation()).count();
    let ratio = cooperations as f64 / opponent.len() as f64;
    BASE_COOPERATION + (1.0 - BASE_COOPERATION) * ratio
}

impl Strategy for AdaptiveRandom {
    fn name(&self) -> &'static str {
        StrategyKind::AdaptiveRandom.name()
    }

    fn decide(&mut self, context: &RoundContext<'_>, rng: &mut dyn RngCore) -> Move {
        if context.opponent.is_empty() {
            return Move::Cooperate;
        }
        if rng.gen::<f64>() < cooperation_probability(context.opponent) {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(AdaptiveRandom)
    }
}
