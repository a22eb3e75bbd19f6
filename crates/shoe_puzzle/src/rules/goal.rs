//! Goal detection.

use crate::{Board, Piece};

/// Checks if the puzzle is solved: the red and blue shoes share a cell.
pub fn is_goal(board: &Board) -> bool {
    board.coincide(Piece::RedShoe, Piece::BlueShoe)
}
