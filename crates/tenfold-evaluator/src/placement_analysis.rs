//! Simulation of a single candidate placement.
//!
//! [`PlacementAnalysis`] places the candidate card on a private clone of the
//! [`GameField`] and measures four raw signals:
//!
//! | Signal       | Measured on       | Meaning                                                      |
//! |--------------|-------------------|--------------------------------------------------------------|
//! | `immediate`  | after placement   | combinations credited by the placement itself                |
//! | `future`     | after placement   | windows through the cell left one card short of the target   |
//! | `blocking`   | before placement  | opponent pairs through the cell that the card cuts off       |
//! | `positional` | n/a               | closeness to the board center, 1.0 at center, 0.0 at corners |
//!
//! The live field is only borrowed; everything the simulation records stays in the
//! clone owned by the analysis.

use arrayvec::ArrayVec;
use tenfold_engine::{
    CardRange, Direction, GameField, Grid, InvalidMoveError, Move, PlayerId, Position, WINDOW_LEN,
    Window,
};

/// Upper bound on the windows containing one cell: every direction contributes at
/// most one window per cell offset.
const MAX_TOUCHING_WINDOWS: usize = Direction::LEN * WINDOW_LEN;

type TouchingWindows = ArrayVec<Window, MAX_TOUCHING_WINDOWS>;

#[derive(Debug, Clone)]
pub struct PlacementAnalysis {
    mv: Move,
    player: PlayerId,
    field: GameField,
    immediate: usize,
    future: usize,
    blocking: usize,
    positional: f32,
}

impl PlacementAnalysis {
    /// Simulates `player` playing `mv` on a copy of `before_placement`.
    ///
    /// `values` is the range the needed-value checks of the future and blocking
    /// signals are made against.
    pub fn from_field(
        before_placement: &GameField,
        mv: Move,
        player: PlayerId,
        values: CardRange,
    ) -> Result<Self, InvalidMoveError> {
        let size = before_placement.size();
        let target = before_placement.target_sum();
        let windows = touching_windows(mv.position, size);

        let blocking = windows
            .iter()
            .filter(|w| blocks_opponent(before_placement.grid(), w, player, target, values))
            .count();

        let mut field = before_placement.clone();
        let immediate = field.place_and_score(mv.position, mv.value, player)?;

        let future = windows
            .iter()
            .filter(|w| is_one_short(field.grid(), w, target, values))
            .count();

        Ok(Self {
            mv,
            player,
            immediate,
            future,
            blocking,
            positional: positional_value(mv.position, size),
            field,
        })
    }

    #[must_use]
    pub fn placement(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The simulated field after the placement.
    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn immediate_points(&self) -> usize {
        self.immediate
    }

    #[must_use]
    pub fn future_potential(&self) -> usize {
        self.future
    }

    #[must_use]
    pub fn blocking_value(&self) -> usize {
        self.blocking
    }

    #[must_use]
    pub fn positional_value(&self) -> f32 {
        self.positional
    }
}

fn touching_windows(position: Position, size: usize) -> TouchingWindows {
    Direction::ALL
        .into_iter()
        .flat_map(|d| d.windows_through(position, size))
        .collect()
}

/// Difference between the target and the sum of the occupied cells.
fn needed_value(filled_sum: u32, target: u32) -> i32 {
    i32::try_from(i64::from(target) - i64::from(filled_sum)).unwrap_or(i32::MIN)
}

/// Exactly one empty cell, and the card that would complete the window is playable.
fn is_one_short(grid: &Grid, window: &Window, target: u32, values: CardRange) -> bool {
    let cards = grid.window_cards(window);
    let empty = cards.iter().filter(|c| c.is_none()).count();
    let sum = cards.iter().flatten().map(|c| u32::from(c.value)).sum();
    empty == 1 && values.contains_needed(needed_value(sum, target))
}

/// Two opponent cards and one empty cell whose completing value is playable.
///
/// Evaluated before the placement, so the empty cell is the candidate's own cell.
fn blocks_opponent(
    grid: &Grid,
    window: &Window,
    player: PlayerId,
    target: u32,
    values: CardRange,
) -> bool {
    let opponent = player.other();
    let cards = grid.window_cards(window);
    let empty = cards.iter().filter(|c| c.is_none()).count();
    let (count, sum) = cards
        .iter()
        .flatten()
        .filter(|c| c.owner == opponent)
        .fold((0, 0), |(n, s), c| (n + 1, s + u32::from(c.value)));
    empty == 1 && count == 2 && values.contains_needed(needed_value(sum, target))
}

/// Normalized inverse Manhattan distance from the board center.
#[expect(clippy::cast_precision_loss)]
fn positional_value(position: Position, size: usize) -> f32 {
    let center = (size - 1) as f32 / 2.0;
    let distance = (position.row as f32 - center).abs() + (position.col as f32 - center).abs();
    1.0 - distance / (size - 1) as f32
}
