use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Direction, DirectionSet, Grid, Position, Window};

/// Detects line-sum combinations and remembers which ones have been paid.
///
/// A window `(direction, anchor)` scores one point when all of the following hold:
///
/// 1. all three cells are occupied,
/// 2. the anchor has not been credited in this direction before,
/// 3. none of the cells has already been used by a credited window of the same
///    direction,
/// 4. the three values sum to the target.
///
/// Crediting a window records the anchor and marks its cells as used in that
/// direction only, so a cell may still take part in combinations along the other
/// three directions.
///
/// The tracker owns plain vectors; cloning it yields fully independent
/// bookkeeping, which is what move simulation relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationTracker {
    size: usize,
    target_sum: u32,
    scored_anchors: Vec<DirectionSet>,
    used_cells: Vec<DirectionSet>,
    scored_windows: Vec<Window>,
}

impl CombinationTracker {
    pub const DEFAULT_TARGET_SUM: u32 = 10;

    /// Bookkeeping for a `size`x`size` board. [`GameField`](super::GameField) pairs
    /// it with its grid.
    #[must_use]
    pub(crate) fn new(size: usize, target_sum: u32) -> Self {
        Self {
            size,
            target_sum,
            scored_anchors: vec![DirectionSet::EMPTY; size * size],
            used_cells: vec![DirectionSet::EMPTY; size * size],
            scored_windows: vec![],
        }
    }

    #[must_use]
    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(position.is_within(self.size));
        position.row * self.size + position.col
    }

    /// Returns `true` if the window's anchor was already credited in its direction.
    #[must_use]
    pub fn is_scored(&self, window: &Window) -> bool {
        self.scored_anchors[self.index(window.anchor())].contains(window.direction())
    }

    /// Returns `true` if `position` already contributed to a credited window of
    /// `direction`.
    #[must_use]
    pub fn is_used(&self, position: Position, direction: Direction) -> bool {
        self.used_cells[self.index(position)].contains(direction)
    }

    /// Directions in which `position` has been consumed.
    #[must_use]
    pub fn used_directions(&self, position: Position) -> DirectionSet {
        self.used_cells[self.index(position)]
    }

    /// Every credited window, in the order they were paid.
    #[must_use]
    pub fn scored_windows(&self) -> &[Window] {
        &self.scored_windows
    }

    /// Checks whether `window` would be credited by the next scan.
    #[must_use]
    pub fn qualifies(&self, grid: &Grid, window: &Window) -> bool {
        let direction = window.direction();
        if self.is_scored(window) {
            return false;
        }
        if window.cells().iter().any(|p| self.is_used(*p, direction)) {
            return false;
        }
        let mut sum = 0;
        for card in grid.window_cards(window) {
            let Some(card) = card else {
                return false;
            };
            sum += u32::from(card.value);
        }
        sum == self.target_sum
    }

    /// Rescans the whole board, credits every qualifying window and returns the
    /// number of new points.
    ///
    /// Scanning an unchanged board a second time yields zero. Only windows of the
    /// tracker's own board size are scanned; cells the grid does not have read as
    /// empty.
    pub fn score_after_move(&mut self, grid: &Grid) -> usize {
        let mut points = 0;
        for direction in Direction::ALL {
            for window in direction.windows(self.size) {
                if !self.qualifies(grid, &window) {
                    continue;
                }
                self.credit(window);
                points += 1;
            }
        }
        points
    }

    /// Number of points [`Self::score_after_move`] would return, without recording
    /// anything.
    #[must_use]
    pub fn peek_new_points(&self, grid: &Grid) -> usize {
        self.clone().score_after_move(grid)
    }

    fn credit(&mut self, window: Window) {
        let direction = window.direction();
        let anchor = self.index(window.anchor());
        self.scored_anchors[anchor].insert(direction);
        for &cell in window.cells() {
            let i = self.index(cell);
            self.used_cells[i].insert(direction);
        }
        debug!(%window, "combination credited");
        self.scored_windows.push(window);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PlayerId;

    use super::*;

    fn place_all(grid: &mut Grid, cards: &[((usize, usize), u8)]) {
        for &((row, col), value) in cards {
            assert!(grid.place(row, col, value, PlayerId::First));
        }
    }

    #[test]
    fn test_single_row_scores_once() {
        let mut grid = Grid::new(3).unwrap();
        let mut tracker = CombinationTracker::new(3, 10);
        place_all(&mut grid, &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5)]);

        assert_eq!(tracker.score_after_move(&grid), 1);
        assert_eq!(tracker.score_after_move(&grid), 0);
        assert_eq!(tracker.scored_windows().len(), 1);
        let window = tracker.scored_windows()[0];
        assert_eq!(window.direction(), Direction::Horizontal);
        assert_eq!(window.anchor(), Position::new(0, 0));
    }

    #[test]
    fn test_incremental_row_scores_after_third_card() {
        let mut grid = Grid::new(5).unwrap();
        let mut tracker = CombinationTracker::new(5, 10);
        let mut points = vec![];
        for (col, value) in [(0, 3), (1, 3), (2, 4)] {
            assert!(grid.place(0, col, value, PlayerId::First));
            points.push(tracker.score_after_move(&grid));
        }
        assert_eq!(points, [0, 0, 1]);
    }

    #[test]
    fn test_wrong_sum_does_not_score() {
        let mut grid = Grid::new(3).unwrap();
        let mut tracker = CombinationTracker::new(3, 10);
        place_all(&mut grid, &[((0, 0), 2), ((0, 1), 3), ((0, 2), 6)]);
        assert_eq!(tracker.score_after_move(&grid), 0);
        assert!(tracker.scored_windows().is_empty());
    }

    #[test]
    fn test_shared_cell_scores_in_two_directions() {
        // Row 1 and column 1 both sum to 10 and share the center cell.
        let mut grid = Grid::new(3).unwrap();
        let mut tracker = CombinationTracker::new(3, 10);
        place_all(
            &mut grid,
            &[((1, 0), 3), ((1, 1), 4), ((1, 2), 3), ((0, 1), 5), ((2, 1), 1)],
        );

        assert_eq!(tracker.score_after_move(&grid), 2);
        assert!(tracker.is_used(Position::new(1, 1), Direction::Horizontal));
        assert!(tracker.is_used(Position::new(1, 1), Direction::Vertical));
        assert!(!tracker.is_used(Position::new(1, 1), Direction::DiagonalDown));
        assert_eq!(
            tracker
                .used_directions(Position::new(1, 1))
                .iter()
                .collect::<Vec<_>>(),
            vec![Direction::Horizontal, Direction::Vertical]
        );
        assert!(tracker.used_directions(Position::new(0, 0)).is_empty());
        assert_eq!(tracker.score_after_move(&grid), 0);
    }

    #[test]
    fn test_used_cell_blocks_overlapping_window_in_same_direction() {
        // 2 3 5 2 3: windows at col 0 and col 2 both sum to 10 but share col 2.
        let mut grid = Grid::new(5).unwrap();
        let mut tracker = CombinationTracker::new(5, 10);
        place_all(
            &mut grid,
            &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5), ((0, 3), 2), ((0, 4), 3)],
        );
        assert_eq!(tracker.score_after_move(&grid), 1);
        assert_eq!(tracker.scored_windows()[0].anchor(), Position::new(0, 0));
        assert_eq!(tracker.score_after_move(&grid), 0);
    }

    #[test]
    fn test_used_cell_blocks_later_window_in_same_direction() {
        let mut grid = Grid::new(5).unwrap();
        let mut tracker = CombinationTracker::new(5, 10);
        place_all(&mut grid, &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5)]);
        assert_eq!(tracker.score_after_move(&grid), 1);

        // (0, 2)..(0, 4) would sum to 10, but (0, 2) is spent horizontally.
        place_all(&mut grid, &[((0, 3), 4), ((0, 4), 1)]);
        assert_eq!(tracker.score_after_move(&grid), 0);

        // The same cell still counts vertically.
        place_all(&mut grid, &[((1, 2), 4), ((2, 2), 1)]);
        assert_eq!(tracker.score_after_move(&grid), 1);
    }

    #[test]
    fn test_diagonals() {
        let mut grid = Grid::new(3).unwrap();
        let mut tracker = CombinationTracker::new(3, 10);
        // Down-right diagonal 1 + 8 + 1 and up-right diagonal 1 + 8 + 1.
        place_all(
            &mut grid,
            &[((0, 0), 1), ((1, 1), 8), ((2, 2), 1), ((2, 0), 1), ((0, 2), 1)],
        );
        assert_eq!(tracker.score_after_move(&grid), 2);
        let directions: Vec<_> = tracker
            .scored_windows()
            .iter()
            .map(|w| (w.direction(), w.anchor()))
            .collect();
        assert_eq!(
            directions,
            vec![
                (Direction::DiagonalDown, Position::new(0, 0)),
                (Direction::DiagonalUp, Position::new(2, 0)),
            ]
        );
    }

    #[test]
    fn test_peek_does_not_record() {
        let mut grid = Grid::new(3).unwrap();
        let tracker = CombinationTracker::new(3, 10);
        place_all(&mut grid, &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5)]);
        assert_eq!(tracker.peek_new_points(&grid), 1);
        assert_eq!(tracker.peek_new_points(&grid), 1);
        assert!(tracker.scored_windows().is_empty());
    }

    #[test]
    fn test_custom_target_sum() {
        let mut grid = Grid::new(3).unwrap();
        let mut tracker = CombinationTracker::new(3, 15);
        place_all(&mut grid, &[((2, 0), 5), ((2, 1), 5), ((2, 2), 5)]);
        assert_eq!(tracker.score_after_move(&grid), 1);
    }

    #[test]
    fn test_mismatched_grid_size_does_not_panic() {
        let mut grid = Grid::new(5).unwrap();
        place_all(
            &mut grid,
            &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5), ((4, 2), 2), ((4, 3), 3), ((4, 4), 5)],
        );
        // The smaller tracker only sees the top-left 3x3 corner.
        let mut small = CombinationTracker::new(3, 10);
        assert_eq!(small.score_after_move(&grid), 1);

        // The larger tracker reads cells beyond a 3x3 grid as empty.
        let mut grid = Grid::new(3).unwrap();
        place_all(&mut grid, &[((0, 0), 2), ((0, 1), 3), ((0, 2), 5)]);
        let mut large = CombinationTracker::new(5, 10);
        assert_eq!(large.score_after_move(&grid), 1);
        assert_eq!(large.score_after_move(&grid), 0);
    }
}
