use rand::RngCore;

use crate::{Move, RoundContext, Strategy};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchHistory {
    pub own: Vec<Move>,
    pub opponent: Vec<Move>,
}

impl MatchHistory {
    pub fn clear(&mut self) {
        self.own.clear();
        self.opponent.clear();
    }

    pub fn push(&mut self, own: Move, opponent: Move) {
        self.own.push(own);
        self.opponent.push(opponent);
    }

    pub fn len(&self) -> usize {
        self.own.len()
    }

    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }
}

/// A strategy instance taking part in a population, together with the
/// history of its current match.
#[derive(Debug)]
pub struct Bot {
    strategy: Box<dyn Strategy>,
    history: MatchHistory,
}

impl Bot {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Bot {
            strategy,
            history: MatchHistory::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn get_move(&mut self, round: usize, rng: &mut dyn RngCore) -> Move {
        let context = RoundContext {
            round,
            own: &self.history.own,
            opponent: &self.history.opponent,
        };
        self.strategy.decide(&context, rng)
    }

    pub fn record_result(&mut self, own: Move, opponent: Move) {
        self.history.push(own, opponent);
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    pub fn strategy_mut(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }

    /// New bot of the same kind with default parameters and an empty history.
    pub fn spawn(&self) -> Bot {
        Bot::new(self.strategy.spawn())
    }
}

impl From<Box<dyn Strategy>> for Bot {
    fn from(strategy: Box<dyn Strategy>) -> Self {
        Bot::new(strategy)
    }
}
