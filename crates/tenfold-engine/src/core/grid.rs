use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, InvalidMoveError};

use super::{direction::Window, player::PlayerId, position::Position};

/// A card lying on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: u8,
    pub owner: PlayerId,
}

/// Square cell store with occupancy and ownership tracking.
///
/// Cells are written exactly once: [`Grid::try_place`] (and its boolean
/// counterpart [`Grid::place`]) is the only mutation, and it refuses occupied or
/// out-of-bounds targets without touching the grid.
///
/// # Example
///
/// ```
/// use tenfold_engine::{Grid, PlayerId};
///
/// let mut grid = Grid::new(3).unwrap();
/// assert!(grid.place(0, 0, 2, PlayerId::First));
/// assert!(!grid.place(0, 0, 5, PlayerId::Second)); // occupied
/// assert!(!grid.place(3, 0, 5, PlayerId::Second)); // out of bounds
/// assert_eq!(grid.value((0, 0).into()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Card>>,
}

impl Grid {
    pub const MIN_SIZE: usize = 3;
    pub const MAX_SIZE: usize = 10;

    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self::check_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Checks that `size` lies in `MIN_SIZE..=MAX_SIZE`.
    pub fn check_size(size: usize) -> Result<(), ConfigError> {
        if size < Self::MIN_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, position: Position) -> Option<usize> {
        position
            .is_within(self.size)
            .then(|| position.row * self.size + position.col)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Card> {
        self.index(position).and_then(|i| self.cells[i])
    }

    #[must_use]
    pub fn value(&self, position: Position) -> Option<u8> {
        self.cell(position).map(|card| card.value)
    }

    #[must_use]
    pub fn owner(&self, position: Position) -> Option<PlayerId> {
        self.cell(position).map(|card| card.owner)
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cell(position).is_some()
    }

    /// Returns `true` if `(row, col)` is on the board and empty.
    #[must_use]
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_target(Position::new(row, col)).is_ok()
    }

    fn check_target(&self, position: Position) -> Result<usize, InvalidMoveError> {
        let index = self.index(position).ok_or(InvalidMoveError::OutOfBounds {
            position,
            size: self.size,
        })?;
        if self.cells[index].is_some() {
            return Err(InvalidMoveError::Occupied { position });
        }
        Ok(index)
    }

    /// Places a card, refusing out-of-bounds and occupied targets.
    ///
    /// On error the grid is left unchanged.
    pub fn try_place(
        &mut self,
        position: Position,
        value: u8,
        owner: PlayerId,
    ) -> Result<(), InvalidMoveError> {
        let index = self.check_target(position)?;
        self.cells[index] = Some(Card { value, owner });
        Ok(())
    }

    /// Boolean form of [`Self::try_place`].
    pub fn place(&mut self, row: usize, col: usize, value: u8, owner: PlayerId) -> bool {
        self.try_place(Position::new(row, col), value, owner).is_ok()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|p| !self.is_occupied(*p))
    }

    /// Returns the cards of a window's cells, in window order.
    #[must_use]
    pub fn window_cards(&self, window: &Window) -> [Option<Card>; 3] {
        window.cells().map(|p| self.cell(p))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {col:2}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:2}|")?;
            for col in 0..self.size {
                match self.value(Position::new(row, col)) {
                    Some(value) => write!(f, " {value:2}")?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_checks_size_bounds() {
        assert_eq!(
            Grid::new(2),
            Err(ConfigError::BoardTooSmall { size: 2, min: 3 })
        );
        assert_eq!(
            Grid::new(usize::MAX),
            Err(ConfigError::BoardTooLarge {
                size: usize::MAX,
                max: Grid::MAX_SIZE
            })
        );
        assert_eq!(Grid::new(Grid::MAX_SIZE).unwrap().size(), Grid::MAX_SIZE);
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_place_records_value_and_owner() {
        let mut grid = Grid::new(4).unwrap();
        assert!(grid.is_valid_move(1, 2));
        assert!(grid.place(1, 2, 7, PlayerId::Second));
        assert!(!grid.is_valid_move(1, 2));
        assert_eq!(
            grid.cell(Position::new(1, 2)),
            Some(Card {
                value: 7,
                owner: PlayerId::Second
            })
        );
        assert_eq!(grid.owner(Position::new(1, 2)), Some(PlayerId::Second));
        assert_eq!(grid.value(Position::new(0, 0)), None);
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut grid = Grid::new(3).unwrap();
        grid.try_place(Position::new(0, 0), 1, PlayerId::First).unwrap();
        assert_eq!(
            grid.try_place(Position::new(0, 0), 2, PlayerId::Second),
            Err(InvalidMoveError::Occupied {
                position: Position::new(0, 0)
            })
        );
        assert_eq!(
            grid.try_place(Position::new(0, 3), 2, PlayerId::Second),
            Err(InvalidMoveError::OutOfBounds {
                position: Position::new(0, 3),
                size: 3
            })
        );
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(3).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        for (i, pos) in positions.iter().enumerate() {
            assert!(!grid.is_full());
            assert!(grid.place(pos.row, pos.col, 1, PlayerId::ALL[i % 2]));
        }
        assert!(grid.is_full());
        assert_eq!(grid.empty_positions().count(), 0);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(0, 1, 4, PlayerId::First);
        grid.place(2, 2, 4, PlayerId::First);
        let empty: Vec<_> = grid.empty_positions().collect();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], Position::new(0, 0));
        assert_eq!(empty[1], Position::new(0, 2));
        assert_eq!(empty[6], Position::new(2, 1));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(0, 0, 2, PlayerId::First);
        grid.place(1, 2, 8, PlayerId::Second);
        let expected = concat!(
            "     0  1  2\n",
            " 0|  2  .  . |\n",
            " 1|  .  .  8 |\n",
            " 2|  .  .  . |\n",
        );
        assert_eq!(grid.to_string(), expected);
    }

    fn occupied_grid() -> impl Strategy<Value = Grid> {
        (3usize..7).prop_flat_map(|size| {
            proptest::collection::vec(proptest::option::of(1u8..=8), size * size).prop_map(
                move |values| {
                    let mut grid = Grid::new(size).unwrap();
                    for (i, value) in values.into_iter().enumerate() {
                        if let Some(value) = value {
                            grid.place(i / size, i % size, value, PlayerId::ALL[i % 2]);
                        }
                    }
                    grid
                },
            )
        })
    }

    proptest! {
        #[test]
        fn test_rejected_place_leaves_grid_unchanged(
            grid in occupied_grid(),
            row in 0usize..10,
            col in 0usize..10,
            value in 1u8..=8,
        ) {
            let mut after = grid.clone();
            let valid = grid.is_valid_move(row, col);
            let placed = after.place(row, col, value, PlayerId::First);
            prop_assert_eq!(placed, valid);
            if placed {
                prop_assert_eq!(after.value(Position::new(row, col)), Some(value));
                prop_assert_eq!(after.occupied_count(), grid.occupied_count() + 1);
            } else {
                prop_assert_eq!(&after, &grid);
            }
        }
    }
}
