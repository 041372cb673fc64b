use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, InvalidMoveError,
    core::{Grid, PlayerId, Position},
};

use super::tracker::CombinationTracker;

/// Board state of a match: the grid plus the combination bookkeeping.
///
/// Cloning a field produces a deep copy; placements on the clone never reach
/// the original. The evaluator uses this to simulate candidate moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameField {
    grid: Grid,
    tracker: CombinationTracker,
}

impl GameField {
    pub fn new(size: usize, target_sum: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(size)?,
            tracker: CombinationTracker::new(size, target_sum),
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn tracker(&self) -> &CombinationTracker {
        &self.tracker
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn target_sum(&self) -> u32 {
        self.tracker.target_sum()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Places a card and credits the combinations it completes.
    ///
    /// Returns the number of new points. The card value is not range-checked here;
    /// callers validate it at the input boundary.
    pub fn place_and_score(
        &mut self,
        position: Position,
        value: u8,
        owner: PlayerId,
    ) -> Result<usize, InvalidMoveError> {
        self.grid.try_place(position, value, owner)?;
        Ok(self.tracker.score_after_move(&self.grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_score() {
        let mut field = GameField::new(3, 10).unwrap();
        let p1 = PlayerId::First;
        assert_eq!(field.place_and_score(Position::new(0, 0), 2, p1), Ok(0));
        assert_eq!(field.place_and_score(Position::new(0, 1), 3, p1), Ok(0));
        assert_eq!(field.place_and_score(Position::new(0, 2), 5, p1), Ok(1));
        assert_eq!(
            field.place_and_score(Position::new(0, 2), 5, p1),
            Err(InvalidMoveError::Occupied {
                position: Position::new(0, 2)
            })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut field = GameField::new(3, 10).unwrap();
        field
            .place_and_score(Position::new(0, 0), 2, PlayerId::First)
            .unwrap();
        field
            .place_and_score(Position::new(0, 1), 3, PlayerId::Second)
            .unwrap();
        let before = serde_json::to_string(&field).unwrap();

        let mut copy = field.clone();
        assert_eq!(
            copy.place_and_score(Position::new(0, 2), 5, PlayerId::First),
            Ok(1)
        );
        assert_eq!(copy.tracker().scored_windows().len(), 1);

        assert_eq!(serde_json::to_string(&field).unwrap(), before);
        assert!(field.grid().is_valid_move(0, 2));
        assert!(field.tracker().scored_windows().is_empty());
    }
}
