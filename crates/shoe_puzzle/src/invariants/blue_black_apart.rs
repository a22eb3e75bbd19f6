//! The blue and black shoes never share a cell.

use super::Invariant;
use crate::{Board, Piece, PuzzleState};

/// Invariant: blue and black shoes occupy different cells.
pub struct BlueBlackApart;

impl Invariant<Board> for BlueBlackApart {
    fn holds(board: &Board) -> bool {
        !board.coincide(Piece::BlueShoe, Piece::BlackShoe)
    }

    fn description() -> &'static str {
        "Blue and black shoes never share a cell"
    }
}

impl Invariant<PuzzleState> for BlueBlackApart {
    fn holds(state: &PuzzleState) -> bool {
        <Self as Invariant<Board>>::holds(&state.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
