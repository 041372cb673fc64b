use std::fmt;

use crate::{
    NoLegalMoveError,
    core::{CardRange, PlayerId},
};

use super::{game_field::GameField, session::Move};

/// Something that decides moves for one seat: a search AI, a random player, a
/// scripted test double.
///
/// Agents receive the field by shared reference and must not assume it stays the
/// same between calls. An agent asked to move on a full board returns
/// [`NoLegalMoveError`].
pub trait PlayerAgent: fmt::Debug {
    /// Display name of the agent.
    fn name(&self) -> &str;

    /// Chooses a `(value, position)` for `player` from the available `values`.
    fn decide_move(
        &mut self,
        field: &GameField,
        values: CardRange,
        player: PlayerId,
    ) -> Result<Move, NoLegalMoveError>;
}
