//! Legality predicates, one per direction.

use super::carry::carried_shoes;
use crate::{BOARD_SIZE, Board, Direction, Piece};
use tracing::instrument;

/// Checks whether the block can be moved in the given direction.
///
/// Besides the per-direction predicate, every piece that would move must
/// land on the board.
#[instrument(skip(board), fields(board = %board))]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let allowed = match direction {
        Direction::Up => can_move_up(board),
        Direction::Right => can_move_right(board),
        Direction::Down => can_move_down(board),
        Direction::Left => can_move_left(board),
    };
    allowed && destinations_on_board(board, direction)
}

fn can_move_up(board: &Board) -> bool {
    let block = board.block();
    block.row() > 0 && board.is_empty(block.up())
}

/// The block may step onto the black shoe unless it carries the blue one.
fn can_move_right(board: &Board) -> bool {
    let block = board.block();
    if block.col() == BOARD_SIZE - 1 {
        return false;
    }
    let right = block.right();
    board.is_empty(right)
        || (board.get(Piece::BlackShoe) == right && !board.coincide(Piece::Block, Piece::BlueShoe))
}

fn can_move_down(board: &Board) -> bool {
    let block = board.block();
    if block.row() == BOARD_SIZE - 1 {
        return false;
    }
    let down = block.down();
    if board.is_empty(down) {
        return true;
    }
    if board.coincide(Piece::BlackShoe, Piece::Block) {
        return false;
    }
    board.get(Piece::BlueShoe) == down
        || (board.get(Piece::RedShoe) == down && !board.coincide(Piece::BlueShoe, Piece::Block))
}

fn can_move_left(board: &Board) -> bool {
    let block = board.block();
    block.col() > 0 && board.is_empty(block.left())
}

fn destinations_on_board(board: &Board, direction: Direction) -> bool {
    board.block().shift(direction).is_on_board()
        && carried_shoes(board, direction)
            .into_iter()
            .all(|shoe| board.get(shoe).shift(direction).is_on_board())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board(block: (i32, i32), red: (i32, i32), blue: (i32, i32), black: (i32, i32)) -> Board {
        Board::new([block.into(), red.into(), blue.into(), black.into()])
    }

    #[test]
    fn test_edges_block_every_direction() {
        let top_left = board((0, 0), (2, 2), (2, 1), (1, 2));
        assert!(!can_move(&top_left, Direction::Up));
        assert!(!can_move(&top_left, Direction::Left));

        let bottom_right = board((2, 2), (0, 0), (0, 1), (1, 0));
        assert!(!can_move(&bottom_right, Direction::Down));
        assert!(!can_move(&bottom_right, Direction::Right));
    }

    #[test]
    fn test_up_and_left_need_an_empty_cell() {
        let b = board((1, 1), (0, 1), (1, 0), (2, 2));
        assert!(!can_move(&b, Direction::Up));
        assert!(!can_move(&b, Direction::Left));
    }

    #[test]
    fn test_right_onto_black_shoe() {
        let b = board((0, 1), (2, 0), (1, 1), (0, 2));
        assert!(can_move(&b, Direction::Right));
    }

    #[test]
    fn test_right_onto_black_shoe_while_carrying_blue() {
        let b = board((1, 1), (2, 0), (1, 1), (1, 2));
        assert!(!can_move(&b, Direction::Right));
    }

    #[test]
    fn test_right_onto_other_shoes_is_illegal() {
        let onto_red = board((0, 0), (0, 1), (2, 2), (2, 0));
        assert!(!can_move(&onto_red, Direction::Right));
        let onto_blue = board((0, 0), (2, 2), (0, 1), (2, 0));
        assert!(!can_move(&onto_blue, Direction::Right));
    }

    #[test]
    fn test_down_while_stacked_with_black() {
        let b = board((1, 2), (2, 0), (2, 2), (1, 2));
        assert!(!can_move(&b, Direction::Down));

        let empty_below = board((1, 2), (2, 0), (1, 1), (1, 2));
        assert!(can_move(&empty_below, Direction::Down));
    }

    #[test]
    fn test_down_onto_red_while_carrying_blue() {
        let b = board((1, 0), (2, 0), (1, 0), (0, 2));
        assert!(!can_move(&b, Direction::Down));

        let without_blue = board((1, 0), (2, 0), (1, 1), (0, 2));
        assert!(can_move(&without_blue, Direction::Down));
    }

    #[test]
    fn test_down_onto_blue() {
        let b = board((0, 1), (2, 0), (1, 1), (0, 2));
        assert!(can_move(&b, Direction::Down));
    }

    #[test]
    fn test_down_onto_black_alone() {
        let b = board((0, 0), (2, 2), (2, 1), (1, 0));
        assert!(!can_move(&b, Direction::Down));
    }

    #[test]
    fn test_destinations_follow_block() {
        let b = board((1, 1), (1, 1), (1, 1), (0, 0));
        for d in Direction::ALL {
            let dest = Position::new(1, 1).shift(d);
            assert!(dest.is_on_board());
            assert!(destinations_on_board(&b, d));
        }
        let corner = board((2, 2), (2, 2), (0, 0), (2, 2));
        assert!(!destinations_on_board(&corner, Direction::Down));
    }
}
