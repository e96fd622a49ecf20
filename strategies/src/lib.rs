//! Default strategy kinds for the dilemma arena.

pub mod adaptive_random;
pub mod always;
pub mod generous_tit_for_tat;
pub mod pavlov;
pub mod random_bot;
pub mod tit_for_tat;

use anyhow::Result;
use dilemma::Strategy;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub use adaptive_random::AdaptiveRandom;
pub use always::{AlwaysCooperate, AlwaysDefect};
pub use generous_tit_for_tat::GenerousTitForTat;
pub use pavlov::PavlovBot;
pub use random_bot::RandomBot;
pub use tit_for_tat::TitForTat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum StrategyKind {
    TitForTat,
    GenerousTitForTat,
    PavlovBot,
    AdaptiveRandom,
    RandomBot,
    AlwaysCooperate,
    AlwaysDefect,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::TitForTat => Box::new(TitForTat),
            StrategyKind::GenerousTitForTat => Box::<GenerousTitForTat>::default(),
            StrategyKind::PavlovBot => Box::new(PavlovBot),
            StrategyKind::AdaptiveRandom => Box::new(AdaptiveRandom),
            StrategyKind::RandomBot => Box::new(RandomBot),
            StrategyKind::AlwaysCooperate => Box::new(AlwaysCooperate),
            StrategyKind::AlwaysDefect => Box::new(AlwaysDefect),
        }
    }

    /// As `build`, with `forgiveness` overriding the default of the kinds
    /// that have one.
    pub fn build_with(self, forgiveness: Option<f64>) -> Result<Box<dyn Strategy>> {
        match (self, forgiveness) {
            (StrategyKind::GenerousTitForTat, Some(forgiveness)) => {
                Ok(Box::new(GenerousTitForTat::new(forgiveness)?))
            }
            _ => Ok(self.build()),
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// One instance of every kind, in declaration order.
pub fn default_roster() -> Vec<Box<dyn Strategy>> {
    StrategyKind::iter().map(StrategyKind::build).collect()
}

pub fn roster_of(kinds: &[StrategyKind]) -> Vec<Box<dyn Strategy>> {
    kinds.iter().map(|kind| kind.build()).collect()
}

pub fn configured_roster(
    kinds: &[StrategyKind],
    forgiveness: Option<f64>,
) -> Result<Vec<Box<dyn Strategy>>> {
    kinds.iter().map(|kind| kind.build_with(forgiveness)).collect()
}
