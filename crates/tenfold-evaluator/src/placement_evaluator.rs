//! Placement evaluation: scoring one candidate placement.
//!
//! The score of a candidate is a linear combination of the raw signals measured by
//! [`PlacementAnalysis`]:
//!
//! ```text
//! score = 100·immediate + 50·future + 75·blocking + 20·positional
//! ```
//!
//! The coefficients live in [`SignalWeights`] and can be replaced, e.g. loaded from
//! JSON:
//!
//! ```
//! use tenfold_evaluator::placement_evaluator::SignalWeights;
//!
//! let weights: SignalWeights = serde_json::from_str(r#"{ "blocking": 120.0 }"#).unwrap();
//! assert_eq!(weights.blocking, 120.0);
//! assert_eq!(weights.immediate, 100.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::placement_analysis::PlacementAnalysis;

/// Assigns a score to a simulated placement (higher is better).
pub trait PlacementEvaluator: fmt::Debug + Send + Sync {
    fn evaluate_placement(&self, analysis: &PlacementAnalysis) -> f32;
}

/// Coefficients of the four placement signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub immediate: f32,
    pub future: f32,
    pub blocking: f32,
    pub positional: f32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            immediate: 100.0,
            future: 50.0,
            blocking: 75.0,
            positional: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeightedPlacementEvaluator {
    weights: SignalWeights,
}

impl WeightedPlacementEvaluator {
    #[must_use]
    pub fn new(weights: SignalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &SignalWeights {
        &self.weights
    }
}

impl PlacementEvaluator for WeightedPlacementEvaluator {
    #[inline]
    #[expect(clippy::cast_precision_loss)]
    fn evaluate_placement(&self, analysis: &PlacementAnalysis) -> f32 {
        let w = &self.weights;
        w.immediate * analysis.immediate_points() as f32
            + w.future * analysis.future_potential() as f32
            + w.blocking * analysis.blocking_value() as f32
            + w.positional * analysis.positional_value()
    }
}

#[cfg(test)]
mod tests {
    use tenfold_engine::{CardRange, GameField, Move, PlayerId, Position};

    use super::*;

    #[test]
    fn test_weighted_sum() {
        let mut field = GameField::new(3, 10).unwrap();
        field
            .place_and_score(Position::new(0, 0), 2, PlayerId::First)
            .unwrap();
        field
            .place_and_score(Position::new(0, 1), 3, PlayerId::Second)
            .unwrap();
        // Completes row 0; the cell is a corner, no other window through it is one short.
        let analysis = PlacementAnalysis::from_field(
            &field,
            Move::new(5, 0, 2),
            PlayerId::First,
            CardRange::STANDARD,
        )
        .unwrap();
        assert_eq!(analysis.immediate_points(), 1);
        assert_eq!(analysis.future_potential(), 0);
        assert_eq!(analysis.blocking_value(), 0);

        let evaluator = WeightedPlacementEvaluator::default();
        assert!((evaluator.evaluate_placement(&analysis) - 100.0).abs() < 1e-4);

        let only_position = WeightedPlacementEvaluator::new(SignalWeights {
            immediate: 0.0,
            future: 0.0,
            blocking: 0.0,
            positional: 1.0,
        });
        assert!(only_position.evaluate_placement(&analysis).abs() < 1e-4);
    }

    #[test]
    fn test_weights_roundtrip_through_json() {
        let weights = SignalWeights {
            positional: 0.0,
            ..SignalWeights::default()
        };
        let json = serde_json::to_string(&weights).unwrap();
        let back: SignalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(back, weights);
    }
}
