use dilemma::{Move, RoundContext, Strategy};
use rand::RngCore;

use crate::StrategyKind;

#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn name(&self) -> &'static str {
        StrategyKind::AlwaysCooperate.name()
    }

    fn decide(&mut self, _: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        Move::Cooperate
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(AlwaysCooperate)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn name(&self) -> &'static str {
        StrategyKind::AlwaysDefect.name()
    }

    fn decide(&mut self, _: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        Move::Defect
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(AlwaysDefect)
    }
}
