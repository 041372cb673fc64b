//! Heuristic move selection for the tenfold AI players.
//!
//! The crate is layered the same way a move is chosen:
//!
//! ```text
//! Move Evaluation (pick the best (value, position) for the turn)
//!     ↓ uses
//! Placement Evaluation (weighted score of one candidate)
//!     ↓ uses
//! Placement Analysis (simulate the candidate, extract raw signals)
//! ```
//!
//! - [`placement_analysis`] - Simulates one candidate on a private copy of the field and
//!   measures immediate points, future potential, blocking and positional value
//! - [`placement_evaluator`] - [`PlacementEvaluator`](placement_evaluator::PlacementEvaluator)
//!   trait and the linear [`WeightedPlacementEvaluator`](placement_evaluator::WeightedPlacementEvaluator)
//! - [`move_evaluator`] - Enumerates every empty cell and card value, adds a small random
//!   perturbation and keeps the strictly best candidate
//! - [`agent`] - [`PlayerAgent`](tenfold_engine::PlayerAgent) implementations backed by the
//!   evaluator, plus a uniformly random player
//!
//! # Example
//!
//! ```
//! use tenfold_engine::{CardRange, GameField, PlayerId};
//! use tenfold_evaluator::move_evaluator::MoveEvaluator;
//!
//! let field = GameField::new(5, 10).unwrap();
//! let mut evaluator = MoveEvaluator::default().with_seed(7);
//! let mv = evaluator
//!     .choose_move(&field, CardRange::STANDARD, PlayerId::First)
//!     .unwrap();
//! assert!(field.grid().is_valid_move(mv.position.row, mv.position.col));
//! ```

pub mod agent;
pub mod move_evaluator;
pub mod placement_analysis;
pub mod placement_evaluator;
