use dilemma::{Move, RoundContext, Strategy};
use rand::{Rng, RngCore};

use crate::StrategyKind;

/// Fair coin each round, whatever happened before.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl Strategy for RandomBot {
    fn name(&self) -> &'static str {
        StrategyKind::RandomBot.name()
    }

    fn decide(&mut self, _: &RoundContext<'_>, rng: &mut dyn RngCore) -> Move {
        if rng.gen::<bool>() {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(RandomBot)
    }
}
