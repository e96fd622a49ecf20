use dilemma::{Move, PayoffMatrix, RoundContext, Strategy};
use rand::RngCore;

use crate::StrategyKind;

/// Payoff at or above which the last move counts as a win.
pub const WIN_THRESHOLD: f64 = 3.0;

/// Win-stay, lose-shift, judged against the default payoff matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct PavlovBot;

impl Strategy for PavlovBot {
    fn name(&self) -> &'static str {
        StrategyKind::PavlovBot.name()
    }

    fn decide(&mut self, context: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        let (Some(own_last), Some(opponent_last)) =
            (context.last_own_move(), context.last_opponent_move())
        else {
            return Move::Cooperate;
        };

        let (payoff, _) = PayoffMatrix::default().payoffs(own_last, opponent_last);
        if payoff >= WIN_THRESHOLD {
            own_last
        } else {
            own_last.flipped()
        }
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(PavlovBot)
    }
}
