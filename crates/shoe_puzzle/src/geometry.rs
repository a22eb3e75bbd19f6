//! Board cells and the four cardinal directions.

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The number of rows and columns of the board.
pub const BOARD_SIZE: i32 = 3;

/// A direction in which the block can be moved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the `(row, col)` change of this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Returns the row change of this direction.
    pub const fn row_change(self) -> i32 {
        self.delta().0
    }

    /// Returns the column change of this direction.
    pub const fn col_change(self) -> i32 {
        self.delta().1
    }

    /// Looks up the direction with the given coordinate change.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownDirection` error if the change is not one of the
    /// four unit steps.
    #[instrument]
    pub fn of(row_change: i32, col_change: i32) -> Result<Self, PuzzleError> {
        Self::ALL
            .into_iter()
            .find(|d| d.delta() == (row_change, col_change))
            .ok_or_else(|| PuzzleError::unknown_direction(row_change, col_change))
    }
}

/// A cell of the board, addressed by row and column.
///
/// Positions off the board are representable; [`Position::is_on_board`]
/// tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Returns the column.
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Returns the neighbouring position in the given direction.
    pub const fn shift(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Equivalent to `shift(Direction::Up)`.
    pub const fn up(self) -> Self {
        self.shift(Direction::Up)
    }

    /// Equivalent to `shift(Direction::Right)`.
    pub const fn right(self) -> Self {
        self.shift(Direction::Right)
    }

    /// Equivalent to `shift(Direction::Down)`.
    pub const fn down(self) -> Self {
        self.shift(Direction::Down)
    }

    /// Equivalent to `shift(Direction::Left)`.
    pub const fn left(self) -> Self {
        self.shift(Direction::Left)
    }

    /// Checks whether the position lies on the board.
    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
