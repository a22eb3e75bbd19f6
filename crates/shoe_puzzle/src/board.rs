//! Piece layout on the 3x3 board.

use crate::{Piece, Position};
use serde::{Deserialize, Serialize};

/// Positions of the four pieces, indexed by piece ordinal.
///
/// Pieces may share a cell. A board value carries no rules; legality lives
/// in [`rules`](crate::rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    positions: [Position; 4],
}

impl Board {
    /// Creates a board from positions in piece ordinal order.
    pub const fn new(positions: [Position; 4]) -> Self {
        Self { positions }
    }

    /// Returns the position of a piece.
    pub fn get(&self, piece: Piece) -> Position {
        self.positions[piece.index()]
    }

    /// Moves a piece, returning its previous position.
    pub(crate) fn set(&mut self, piece: Piece, position: Position) -> Position {
        std::mem::replace(&mut self.positions[piece.index()], position)
    }

    /// Returns all positions in piece ordinal order.
    pub fn positions(&self) -> &[Position; 4] {
        &self.positions
    }

    /// Position of the block.
    pub fn block(&self) -> Position {
        self.get(Piece::Block)
    }

    /// Checks that no piece occupies the cell.
    pub fn is_empty(&self, position: Position) -> bool {
        self.positions.iter().all(|p| *p != position)
    }

    /// Checks whether two pieces share a cell.
    pub fn coincide(&self, a: Piece, b: Piece) -> bool {
        self.get(a) == self.get(b)
    }

    /// Pieces at the given cell, in ordinal order.
    pub fn pieces_at(&self, position: Position) -> Vec<Piece> {
        Piece::ALL
            .into_iter()
            .filter(|piece| self.get(*piece) == position)
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "]")
    }
}
