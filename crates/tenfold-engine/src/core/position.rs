use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by `(d_row, d_col)`, or `None` if it would leave
    /// the non-negative quadrant.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_non_negative() {
        let pos = Position::new(1, 0);
        assert_eq!(pos.offset(-1, 1), Some(Position::new(0, 1)));
        assert_eq!(pos.offset(0, -1), None);
        assert_eq!(pos.offset(-2, 0), None);
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(2, 2).is_within(3));
        assert!(!Position::new(3, 0).is_within(3));
        assert!(!Position::new(0, 3).is_within(3));
    }
}
