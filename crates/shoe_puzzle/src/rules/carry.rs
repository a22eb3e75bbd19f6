//! Which shoes ride along with the block.

use crate::{Board, Direction, Piece};

/// Shoes that move with the block when stacked on it, per direction.
///
/// `Up` is handled separately in [`carried_shoes`].
const fn candidates(direction: Direction) -> &'static [Piece] {
    match direction {
        Direction::Up => &[Piece::BlackShoe],
        Direction::Right | Direction::Down => {
            &[Piece::RedShoe, Piece::BlueShoe, Piece::BlackShoe]
        }
        Direction::Left => &[Piece::RedShoe, Piece::BlueShoe],
    }
}

/// Returns the shoes that a move in `direction` carries, in ordinal order.
///
/// A shoe is carried when it shares the block's cell and the direction
/// admits it. Moving up lifts the black shoe, and the red shoe only when
/// block, red and black are all stacked together.
pub fn carried_shoes(board: &Board, direction: Direction) -> Vec<Piece> {
    let mut carried: Vec<Piece> = candidates(direction)
        .iter()
        .copied()
        .filter(|shoe| board.coincide(*shoe, Piece::Block))
        .collect();

    if direction == Direction::Up
        && board.coincide(Piece::BlackShoe, Piece::Block)
        && board.coincide(Piece::RedShoe, Piece::Block)
    {
        carried.insert(0, Piece::RedShoe);
    }

    carried
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn stacked(pieces: &[Piece]) -> Board {
        // Unstacked pieces go to distinct cells away from (1,1).
        let spare = [Position::new(0, 0), Position::new(0, 2), Position::new(2, 0)];
        let mut positions = [Position::new(1, 1); 4];
        for (i, shoe) in Piece::SHOES.iter().enumerate() {
            if !pieces.contains(shoe) {
                positions[shoe.index()] = spare[i];
            }
        }
        Board::new(positions)
    }

    #[test]
    fn test_up_carries_black_only() {
        let board = stacked(&[Piece::RedShoe, Piece::BlueShoe]);
        assert!(carried_shoes(&board, Direction::Up).is_empty());

        let board = stacked(&[Piece::BlackShoe]);
        assert_eq!(carried_shoes(&board, Direction::Up), vec![Piece::BlackShoe]);
    }

    #[test]
    fn test_up_carries_red_in_triple_stack() {
        let board = stacked(&[Piece::RedShoe, Piece::BlackShoe]);
        assert_eq!(
            carried_shoes(&board, Direction::Up),
            vec![Piece::RedShoe, Piece::BlackShoe]
        );
    }

    #[test]
    fn test_left_leaves_black_behind() {
        let board = stacked(&[Piece::RedShoe, Piece::BlackShoe]);
        assert_eq!(carried_shoes(&board, Direction::Left), vec![Piece::RedShoe]);
    }

    #[test]
    fn test_right_and_down_carry_every_stacked_shoe() {
        let board = stacked(&[Piece::RedShoe, Piece::BlueShoe]);
        for d in [Direction::Right, Direction::Down] {
            assert_eq!(
                carried_shoes(&board, d),
                vec![Piece::RedShoe, Piece::BlueShoe]
            );
        }

        let board = stacked(&[Piece::RedShoe, Piece::BlackShoe]);
        for d in [Direction::Right, Direction::Down] {
            assert_eq!(
                carried_shoes(&board, d),
                vec![Piece::RedShoe, Piece::BlackShoe]
            );
        }
    }

    #[test]
    fn test_nothing_stacked_carries_nothing() {
        let board = stacked(&[]);
        for d in Direction::ALL {
            assert!(carried_shoes(&board, d).is_empty());
        }
    }
}
