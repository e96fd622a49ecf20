use rand::{Rng, RngCore};

use crate::{Move, RoundContext, Strategy};

#[derive(Debug, Clone)]
pub struct Constant {
    name: &'static str,
    choice: Move,
}

impl Constant {
    pub fn cooperator() -> Self {
        Constant {
            name: "Cooperator",
            choice: Move::Cooperate,
        }
    }

    pub fn defector() -> Self {
        Constant {
            name: "Defector",
            choice: Move::Defect,
        }
    }
}

impl Strategy for Constant {
    fn name(&self) -> &'static str {
        self.name
    }

    fn decide(&mut self, _: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        self.choice
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Mirror;

impl Strategy for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn decide(&mut self, context: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        context.last_opponent_move().unwrap_or(Move::Cooperate)
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(Mirror)
    }
}

/// Opens with a defection, then mirrors. Keeps defecting against itself.
#[derive(Debug, Clone)]
pub struct Suspicious;

impl Strategy for Suspicious {
    fn name(&self) -> &'static str {
        "Suspicious"
    }

    fn decide(&mut self, context: &RoundContext<'_>, _: &mut dyn RngCore) -> Move {
        context.last_opponent_move().unwrap_or(Move::Defect)
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(Suspicious)
    }
}

pub const DEFAULT_FORGIVENESS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Forgiving {
    pub forgiveness: f64,
}

impl Default for Forgiving {
    fn default() -> Self {
        Forgiving {
            forgiveness: DEFAULT_FORGIVENESS,
        }
    }
}

impl Strategy for Forgiving {
    fn name(&self) -> &'static str {
        "Forgiving"
    }

    fn decide(&mut self, context: &RoundContext<'_>, rng: &mut dyn RngCore) -> Move {
        match context.last_opponent_move() {
            Some(Move::Defect) if rng.gen::<f64>() >= self.forgiveness => Move::Defect,
            _ => Move::Cooperate,
        }
    }

    fn spawn(&self) -> Box<dyn Strategy> {
        Box::new(Forgiving::default())
    }

    fn forgiveness_mut(&mut self) -> Option<&mut f64> {
        Some(&mut self.forgiveness)
    }
}
