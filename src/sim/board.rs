//! Board grid and move application
//!
//! The board engine is stateless: every operation takes a board by reference
//! and hands back a new one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::line::{Line, merge_line};
use crate::consts::BOARD_SIZE;
use crate::error::InvalidDirection;

/// Direction the whole board is shifted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }

    /// Map a key name to a direction.
    ///
    /// Accepts arrow key names (`Left`, `ArrowLeft`), WASD and vi keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "left" | "arrowleft" | "a" | "h" => Some(Direction::Left),
            "right" | "arrowright" | "d" | "l" => Some(Direction::Right),
            "up" | "arrowup" | "w" | "k" => Some(Direction::Up),
            "down" | "arrowdown" | "s" | "j" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| InvalidDirection(s.to_string()))
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    /// 0 = Left, 1 = Right, 2 = Up, 3 = Down
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| InvalidDirection(code.to_string()))
    }
}

/// Result of shifting a board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Sum of all tiles created by merges
    pub score_gain: u32,
    /// At least one cell differs from the input board
    pub changed: bool,
    /// Some merge produced the target tile
    pub reached_target: bool,
}

/// A 4x4 grid of tile values, row-major, 0 = empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An all-empty board
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from raw rows.
    ///
    /// Cells are expected to be 0 or powers of two; two `1 << 31` tiles never merge.
    pub fn from_rows(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        Self::positions().filter(|&(r, c)| self.cells[r][c] == 0).collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.count_empty()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Total of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Mirror each row left-to-right
    pub fn reverse_rows(&self) -> Self {
        let mut cells = self.cells;
        for row in &mut cells {
            row.reverse();
        }
        Self { cells }
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in Self::positions() {
            cells[c][r] = self.cells[r][c];
        }
        Self { cells }
    }

    /// Shift every tile in `direction`, merging equal neighbours once per line.
    pub fn apply_move(&self, direction: Direction) -> MoveOutcome {
        let mut next = *self;
        let mut score_gain: u32 = 0;
        let mut reached_target = false;

        for i in 0..BOARD_SIZE {
            let line = self.line(i, direction);
            let merged = merge_line(line);
            score_gain = score_gain.saturating_add(merged.score_gain);
            reached_target |= merged.reached_target;
            next.write_line(i, direction, merged.line);
        }

        MoveOutcome {
            board: next,
            score_gain,
            changed: next != *self,
            reached_target,
        }
    }

    /// Whether shifting in `direction` would change anything
    pub fn can_move(&self, direction: Direction) -> bool {
        self.apply_move(direction).changed
    }

    /// Directions that change the board
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    /// No empty cell and no pair of equal horizontal or vertical neighbours.
    pub fn is_terminal(&self) -> bool {
        for (r, c) in Self::positions() {
            let value = self.cells[r][c];
            if value == 0 {
                return false;
            }
            if c + 1 < BOARD_SIZE && self.cells[r][c + 1] == value {
                return false;
            }
            if r + 1 < BOARD_SIZE && self.cells[r + 1][c] == value {
                return false;
            }
        }
        true
    }

    fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
    }

    /// Extract line `i` ordered so that tiles slide toward index 0
    fn line(&self, i: usize, direction: Direction) -> Line {
        let mut line = [0; BOARD_SIZE];
        for (k, slot) in line.iter_mut().enumerate() {
            let (r, c) = Self::line_cell(i, k, direction);
            *slot = self.cells[r][c];
        }
        line
    }

    fn write_line(&mut self, i: usize, direction: Direction, line: Line) {
        for (k, value) in line.into_iter().enumerate() {
            let (r, c) = Self::line_cell(i, k, direction);
            self.cells[r][c] = value;
        }
    }

    /// Board coordinates of position `k` within line `i`
    #[inline]
    fn line_cell(i: usize, k: usize, direction: Direction) -> (usize, usize) {
        let back = BOARD_SIZE - 1 - k;
        match direction {
            Direction::Left => (i, k),
            Direction::Right => (i, back),
            Direction::Up => (k, i),
            Direction::Down => (back, i),
        }
    }
}

impl From<[[u32; BOARD_SIZE]; BOARD_SIZE]> for Board {
    fn from(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self::from_rows(cells)
    }
}

/// Free-function form of [`Board::apply_move`]
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    board.apply_move(direction)
}

/// Free-function form of [`Board::is_terminal`]
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Full board with no equal neighbours
    fn locked_board() -> Board {
        Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        let tile = prop_oneof![3 => Just(0u32), 5 => (1u32..=10).prop_map(|exp| 1u32 << exp)];
        prop::array::uniform4(prop::array::uniform4(tile)).prop_map(Board::from_rows)
    }

    #[test]
    fn test_move_left() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [0, 4, 0, 4],
            [8, 0, 8, 8],
            [2, 4, 8, 16],
        ]);
        let outcome = board.apply_move(Direction::Left);
        assert_eq!(
            outcome.board.rows(),
            &[[4, 0, 0, 0], [8, 0, 0, 0], [16, 8, 0, 0], [2, 4, 8, 16]]
        );
        assert_eq!(outcome.score_gain, 4 + 8 + 16);
        assert!(outcome.changed);
    }

    #[test]
    fn test_move_right() {
        let board = Board::from_rows([
            [2, 2, 4, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 2],
        ]);
        let outcome = board.apply_move(Direction::Right);
        assert_eq!(outcome.board.rows()[0], [0, 0, 4, 4]);
        assert_eq!(outcome.board.rows()[3], [0, 0, 0, 2]);
        assert_eq!(outcome.score_gain, 4);
    }

    #[test]
    fn test_move_up_and_down() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [0, 0, 0, 8],
        ]);
        let up = board.apply_move(Direction::Up);
        assert_eq!(
            up.board.rows(),
            &[[4, 0, 0, 8], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );

        let down = board.apply_move(Direction::Down);
        assert_eq!(
            down.board.rows(),
            &[[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 8]]
        );
        assert_eq!(down.score_gain, 4);
    }

    #[test]
    fn test_null_move_reports_unchanged() {
        let board = Board::from_rows([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = board.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.board, board);
        assert_eq!(outcome.score_gain, 0);
    }

    #[test]
    fn test_locked_board_is_terminal() {
        let board = locked_board();
        assert!(board.is_terminal());
        for direction in Direction::ALL {
            let outcome = board.apply_move(direction);
            assert!(!outcome.changed, "{direction} should not change a locked board");
            assert_eq!(outcome.board, board);
        }
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_full_board_with_vertical_pair_is_not_terminal() {
        let mut board = locked_board();
        board.set(3, 3, 4);
        assert!(board.is_full());
        assert!(!board.is_terminal());
        assert!(board.can_move(Direction::Up));
    }

    #[test]
    fn test_full_board_with_horizontal_pair_is_not_terminal() {
        let mut board = locked_board();
        board.set(0, 1, 2);
        assert!(!board.is_terminal());
        assert!(board.can_move(Direction::Left));
    }

    #[test]
    fn test_board_with_empty_cell_is_not_terminal() {
        let mut board = locked_board();
        board.set(1, 1, 0);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_move_reports_target() {
        let board = Board::from_rows([
            [0, 0, 0, 0],
            [0, 1024, 0, 0],
            [0, 1024, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = board.apply_move(Direction::Down);
        assert!(outcome.reached_target);
        assert_eq!(outcome.board.get(3, 1), 2048);
        assert_eq!(outcome.score_gain, 2048);
    }

    #[test]
    fn test_oversized_tiles_do_not_overflow() {
        let top = 1u32 << 31;
        let board = Board::from_rows([
            [top, top, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = board.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_gain, 0);
        assert!(board.can_move(Direction::Right));
    }

    #[test]
    fn test_board_queries() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 64, 0],
            [0, 0, 0, 4],
        ]);
        assert_eq!(board.count_empty(), 13);
        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.max_tile(), 64);
        assert_eq!(board.sum(), 70);
        assert_eq!(board.empty_cells().len(), 13);
        assert!(!board.empty_cells().contains(&(2, 2)));
        assert_eq!(board.transpose().get(3, 2), 0);
        assert_eq!(board.transpose().get(2, 2), 64);
        assert_eq!(board.reverse_rows().get(0, 3), 2);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::from_key("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("s"), Some(Direction::Down));
        assert_eq!(Direction::from_key("l"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Escape"), None);
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_direction_from_code() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Left));
        assert_eq!(Direction::try_from(3), Ok(Direction::Down));
        assert_eq!(
            Direction::try_from(4),
            Err(InvalidDirection("4".to_string()))
        );
    }

    proptest! {
        #[test]
        fn prop_right_mirrors_left(board in arb_board()) {
            let right = board.apply_move(Direction::Right);
            let left = board.reverse_rows().apply_move(Direction::Left);
            prop_assert_eq!(right.board, left.board.reverse_rows());
            prop_assert_eq!(right.score_gain, left.score_gain);
        }

        #[test]
        fn prop_up_is_transposed_left(board in arb_board()) {
            let up = board.apply_move(Direction::Up);
            let left = board.transpose().apply_move(Direction::Left);
            prop_assert_eq!(up.board, left.board.transpose());
        }

        #[test]
        fn prop_down_is_transposed_right(board in arb_board()) {
            let down = board.apply_move(Direction::Down);
            let right = board.transpose().apply_move(Direction::Right);
            prop_assert_eq!(down.board, right.board.transpose());
        }

        #[test]
        fn prop_move_conserves_total(board in arb_board(), code in 0u8..4) {
            let direction = Direction::try_from(code).unwrap();
            let outcome = board.apply_move(direction);
            prop_assert_eq!(outcome.board.sum(), board.sum());
            prop_assert_eq!(outcome.changed, outcome.board != board);
        }

        #[test]
        fn prop_effective_move_leaves_room(board in arb_board(), code in 0u8..4) {
            let direction = Direction::try_from(code).unwrap();
            let outcome = board.apply_move(direction);
            if outcome.changed {
                prop_assert!(outcome.board.count_empty() > 0);
            }
        }

        #[test]
        fn prop_terminal_means_no_legal_move(board in arb_board()) {
            prop_assume!(board.tile_count() > 0);
            prop_assert_eq!(board.is_terminal(), board.legal_moves().is_empty());
        }
    }
}
