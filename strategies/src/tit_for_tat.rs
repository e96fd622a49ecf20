use dilemma::{Move, RoundContext, Strategy};
use rand::RngCore;

use crate::StrategyKind;

/// Opens with cooperation, then mirrors the opponent's previous move.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn name(&self) -> &'static str {
        StrategyKind::TitForTat.name()
    }

    fn decide(&mut self, context: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        context.last_opponent_move().unwrap_or(Move::Cooperate)
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(TitForTat)
    }
}
