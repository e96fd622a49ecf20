use anyhow::{bail, Result};
use dilemma::{Move, RoundContext, Strategy};
use rand::{Rng, RngCore};

use crate::StrategyKind;

pub const DEFAULT_FORGIVENESS: f64 = 0.1;

/// Tit-for-tat that lets a defection slide with probability `forgiveness`.
///
/// Spawned instances start over from the forgiveness given at construction,
/// whatever mutation did to their template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerousTitForTat {
    forgiveness: f64,
    initial_forgiveness: f64,
}

impl Default for GenerousTitForTat {
    fn default() -> Self {
        GenerousTitForTat {
            forgiveness: DEFAULT_FORGIVENESS,
            initial_forgiveness: DEFAULT_FORGIVENESS,
        }
    }
}

impl GenerousTitForTat {
    pub fn new(forgiveness: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&forgiveness) {
            bail!("Invalid forgiveness: {forgiveness}; It must be within [0, 1]");
        }
        Ok(GenerousTitForTat {
            forgiveness,
            initial_forgiveness: forgiveness,
        })
    }

    pub fn forgiveness(&self) -> f64 {
        self.forgiveness
    }
}

impl Strategy for GenerousTitForTat {
    fn name(&self) -> &'static str {
        StrategyKind::GenerousTitForTat.name()
    }

    fn decide(&mut self, context: &RoundContext<'_>, rng: &mut dyn RngCore) -> Move {
        match context.last_opponent_move() {
            None => Move::Cooperate,
            // No draw at zero forgiveness keeps the random stream untouched.
            Some(Move::Defect)
                if self.forgiveness > 0.0 && rng.gen::<f64>() < self.forgiveness =>
            {
                Move::Cooperate
            }
            Some(last) => last,
        }
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(GenerousTitForTat {
            forgiveness: self.initial_forgiveness,
            initial_forgiveness: self.initial_forgiveness,
        })
    }

    fn forgiveness_mut(&mut self) -> Option<&mut f64> {
        Some(&mut self.forgiveness)
    }
}
