//! [`PlayerAgent`] implementations for automated seats.

use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;
use tenfold_engine::{CardRange, GameField, Move, NoLegalMoveError, PlayerAgent, PlayerId};
use tracing::debug;

use crate::{
    move_evaluator::MoveEvaluator,
    placement_evaluator::{SignalWeights, WeightedPlacementEvaluator},
};

/// Plays the move ranked best by a [`MoveEvaluator`].
#[derive(Debug)]
pub struct HeuristicAgent<'a> {
    name: String,
    evaluator: MoveEvaluator<'a>,
}

impl<'a> HeuristicAgent<'a> {
    #[must_use]
    pub fn new(name: impl Into<String>, evaluator: MoveEvaluator<'a>) -> Self {
        Self {
            name: name.into(),
            evaluator,
        }
    }

    /// Weighted evaluator with the given weights and optional seed.
    #[must_use]
    pub fn with_weights(
        name: impl Into<String>,
        weights: SignalWeights,
        seed: Option<u64>,
    ) -> Self {
        let evaluator = MoveEvaluator::new(Box::new(WeightedPlacementEvaluator::new(weights)));
        let evaluator = match seed {
            Some(seed) => evaluator.with_seed(seed),
            None => evaluator,
        };
        Self::new(name, evaluator)
    }
}

impl PlayerAgent for HeuristicAgent<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(
        &mut self,
        field: &GameField,
        values: CardRange,
        player: PlayerId,
    ) -> Result<Move, NoLegalMoveError> {
        self.evaluator.choose_move(field, values, player)
    }
}

/// Plays a uniformly random card on a uniformly random empty cell.
#[derive(Debug)]
pub struct RandomAgent {
    name: String,
    rng: Pcg32,
}

impl RandomAgent {
    #[must_use]
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            name: name.into(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl PlayerAgent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(
        &mut self,
        field: &GameField,
        values: CardRange,
        player: PlayerId,
    ) -> Result<Move, NoLegalMoveError> {
        let empty: Vec<_> = field.grid().empty_positions().collect();
        let position = *empty.choose(&mut self.rng).ok_or(NoLegalMoveError)?;
        let value = self.rng.random_range(values.values());
        let mv = Move { value, position };
        debug!(%player, %mv, "random move");
        Ok(mv)
    }
}
