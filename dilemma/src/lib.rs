use std::fmt::Debug;

use rand::RngCore;

mod bot;
pub mod evolution;
pub mod game;
pub mod tournament;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bot::{Bot, MatchHistory};
pub use game::{Move, PayoffMatrix};

/// Read-only view handed to a strategy when it has to pick its next move.
///
/// Both histories exclude the move being chosen.
#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    pub round: usize,
    pub own: &'a [Move],
    pub opponent: &'a [Move],
}

impl<'a> RoundContext<'a> {
    pub fn last_own_move(&self) -> Option<Move> {
        self.own.last().copied()
    }

    pub fn last_opponent_move(&self) -> Option<Move> {
        self.opponent.last().copied()
    }
}

pub trait Strategy: Debug {
    /// Aggregation key; every instance of a kind reports the same name.
    fn name(&self) -> &'static str;

    fn decide(&mut self, context: &RoundContext<'_>, rng: &mut dyn RngCore) -> Move;

    /// Fresh, default-constructed instance of the same kind.
    fn spawn(&self) -> Box<dyn Strategy>;

    /// Mutable forgiveness parameter, for kinds that have one.
    fn forgiveness_mut(&mut self) -> Option<&mut f64> {
        None
    }
}
