use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of cells in a scoring window.
pub const WINDOW_LEN: usize = 3;

const WINDOW_OFFSETS: [isize; WINDOW_LEN] = [0, 1, 2];

/// Line direction along which three cells form a window.
///
/// Each direction maps an anchor to the ordered cells of its window:
///
/// ```text
/// Horizontal    Vertical    DiagonalDown    DiagonalUp
///  A → →         A           A                   ↗
///                ↓             ↘               ↗
///                ↓               ↘           A
/// ```
///
/// `DiagonalUp` windows are anchored at their bottom-left cell (row decreases as
/// col increases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    pub const LEN: usize = 4;
    pub const ALL: [Self; Self::LEN] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// `(d_row, d_col)` between consecutive cells of a window.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (-1, 1),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDown => "diagonal-down",
            Self::DiagonalUp => "diagonal-up",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Returns the window anchored at `anchor`, or `None` unless all of its cells
    /// lie on a `size`x`size` board.
    #[must_use]
    pub fn window(self, anchor: Position, size: usize) -> Option<Window> {
        let (d_row, d_col) = self.step();
        let mut cells = [anchor; WINDOW_LEN];
        for (cell, k) in cells.iter_mut().zip(WINDOW_OFFSETS) {
            *cell = anchor.offset(d_row * k, d_col * k)?;
            if !cell.is_within(size) {
                return None;
            }
        }
        Some(Window {
            direction: self,
            anchor,
            cells,
        })
    }

    /// Iterates over every window of this direction, anchors in row-major order.
    pub fn windows(self, size: usize) -> impl Iterator<Item = Window> {
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
            .filter_map(move |anchor| self.window(anchor, size))
    }

    /// Iterates over the windows of this direction that contain `position`.
    ///
    /// At most [`WINDOW_LEN`] windows are yielded, fewer near the edges.
    pub fn windows_through(self, position: Position, size: usize) -> impl Iterator<Item = Window> {
        let (d_row, d_col) = self.step();
        WINDOW_OFFSETS.into_iter().filter_map(move |k| {
            let anchor = position.offset(-d_row * k, -d_col * k)?;
            self.window(anchor, size)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three consecutive cells identified by `(direction, anchor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    direction: Direction,
    anchor: Position,
    cells: [Position; WINDOW_LEN],
}

impl Window {
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub fn cells(&self) -> &[Position; WINDOW_LEN] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.direction, self.anchor)
    }
}

/// Small set of directions stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    pub const EMPTY: Self = Self { bits: 0 };

    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.bits & direction.bit() != 0
    }

    pub const fn insert(&mut self, direction: Direction) {
        self.bits |= direction.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}
