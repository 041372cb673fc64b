//! Match logic built on top of the board structures.
//!
//! - [`GameField`] - Grid plus combination bookkeeping; cheap to clone for simulation
//! - [`CombinationTracker`] - Detects and credits three-card windows summing to the target
//! - [`MatchSession`] - Turn order, scores and end detection for one match
//! - [`MatchController`] - Runs a session with a [`PlayerAgent`] in each seat
//! - [`MatchConfig`] - Board size, target, card range and end policy
//!
//! # Match Flow
//!
//! 1. Build a [`MatchSession`] from a validated [`MatchConfig`]
//! 2. The current player submits a [`Move`]
//! 3. Invalid moves are rejected and the same player tries again
//! 4. Valid moves are placed, new combinations are credited to the mover
//! 5. Play passes to the other seat until the [`EndPolicy`] fires
//!
//! # Example
//!
//! ```
//! use tenfold_engine::{MatchConfig, MatchSession, Move, PlayerId, TurnOutcome};
//!
//! let mut session = MatchSession::new(MatchConfig::default().with_board_size(3)).unwrap();
//! session.submit_move(Move::new(2, 0, 0)).unwrap();
//! session.submit_move(Move::new(3, 0, 1)).unwrap();
//! let outcome = session.submit_move(Move::new(5, 0, 2)).unwrap();
//!
//! assert!(matches!(outcome, TurnOutcome::Placed { points: 1, .. }));
//! assert_eq!(session.scores().get(PlayerId::First), 1);
//! ```

pub use self::{agent::*, config::*, controller::*, game_field::*, session::*, tracker::*};

mod agent;
mod config;
mod controller;
mod game_field;
mod session;
mod tracker;
