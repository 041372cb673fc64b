//! Move evaluation: picking the card and cell to play this turn.
//!
//! [`MoveEvaluator`] is a greedy one-ply search. Every empty position is paired with
//! every available card value, each pair is simulated with [`PlacementAnalysis`] and
//! scored by a [`PlacementEvaluator`]. A uniform perturbation in `[0, jitter)` is
//! added to every score so that equally good moves are not always resolved the same
//! way.
//!
//! Candidates are visited position-major (row-major positions, ascending values
//! within a position) and a later candidate replaces the best only when its total is
//! strictly greater.
//!
//! The random source is a [`Pcg32`]; [`MoveEvaluator::with_seed`] makes choices
//! reproducible.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tenfold_engine::{CardRange, GameField, Move, NoLegalMoveError, PlayerId};
use tracing::debug;

use crate::{
    placement_analysis::PlacementAnalysis,
    placement_evaluator::{PlacementEvaluator, WeightedPlacementEvaluator},
};

#[derive(Debug)]
pub struct MoveEvaluator<'a> {
    placement_evaluator: Box<dyn PlacementEvaluator + 'a>,
    jitter: f32,
    rng: Pcg32,
}

impl Default for MoveEvaluator<'_> {
    fn default() -> Self {
        Self::new(Box::new(WeightedPlacementEvaluator::default()))
    }
}

impl<'a> MoveEvaluator<'a> {
    pub const DEFAULT_JITTER: f32 = 10.0;

    /// Creates an evaluator with the default jitter and an entropy-seeded RNG.
    #[must_use]
    pub fn new(placement_evaluator: Box<dyn PlacementEvaluator + 'a>) -> Self {
        Self {
            placement_evaluator,
            jitter: Self::DEFAULT_JITTER,
            rng: Pcg32::seed_from_u64(rand::rng().random()),
        }
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ..self
        }
    }

    /// Sets the upper bound of the tie-breaking perturbation. Zero disables it.
    #[must_use]
    pub fn with_jitter(self, jitter: f32) -> Self {
        Self {
            jitter: jitter.max(0.0),
            ..self
        }
    }

    #[must_use]
    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    /// Returns the best-scoring move for `player`.
    ///
    /// Fails only when the board has no empty cell.
    pub fn choose_move(
        &mut self,
        field: &GameField,
        values: CardRange,
        player: PlayerId,
    ) -> Result<Move, NoLegalMoveError> {
        let mut best: Option<(f32, Move)> = None;

        for position in field.grid().empty_positions() {
            for value in values.values() {
                let mv = Move { value, position };
                let Ok(analysis) = PlacementAnalysis::from_field(field, mv, player, values) else {
                    continue;
                };
                let score = self.placement_evaluator.evaluate_placement(&analysis) + self.noise();
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, mv));
                }
            }
        }

        let (score, mv) = best.ok_or(NoLegalMoveError)?;
        debug!(%player, %mv, score, "move chosen");
        Ok(mv)
    }

    fn noise(&mut self) -> f32 {
        if self.jitter > 0.0 {
            self.rng.random_range(0.0..self.jitter)
        } else {
            0.0
        }
    }
}
