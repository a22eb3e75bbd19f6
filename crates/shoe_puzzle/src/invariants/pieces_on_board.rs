//! Every piece stays inside the 3x3 board.

use super::Invariant;
use crate::{Board, PuzzleState};

/// Invariant: all four pieces are on the board.
pub struct PiecesOnBoard;

impl Invariant<Board> for PiecesOnBoard {
    fn holds(board: &Board) -> bool {
        board.positions().iter().all(|p| p.is_on_board())
    }

    fn description() -> &'static str {
        "Every piece lies on the board"
    }
}

impl Invariant<PuzzleState> for PiecesOnBoard {
    fn holds(state: &PuzzleState) -> bool {
        <Self as Invariant<Board>>::holds(&state.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_off_board_piece_violates() {
        let board = Board::new([
            Position::new(0, 0),
            Position::new(2, 0),
            Position::new(1, 1),
            Position::new(-1, 2),
        ]);
        assert!(!PiecesOnBoard::holds(&board));
    }
}
