//! The four pieces on the board.

use serde::{Deserialize, Serialize};

/// Ordinal of the block.
pub const BLOCK: usize = 0;
/// Ordinal of the red shoe.
pub const RED_SHOE: usize = 1;
/// Ordinal of the blue shoe.
pub const BLUE_SHOE: usize = 2;
/// Ordinal of the black shoe.
pub const BLACK_SHOE: usize = 3;

/// A piece of the puzzle.
///
/// The discriminants are stable and index the position array of
/// [`PuzzleState`](crate::PuzzleState).
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
)]
pub enum Piece {
    /// The neutral block moved by the player.
    Block = BLOCK as isize,
    /// The red shoe.
    RedShoe = RED_SHOE as isize,
    /// The blue shoe.
    BlueShoe = BLUE_SHOE as isize,
    /// The black shoe.
    BlackShoe = BLACK_SHOE as isize,
}

impl Piece {
    /// All pieces in ordinal order.
    pub const ALL: [Piece; 4] = [
        Piece::Block,
        Piece::RedShoe,
        Piece::BlueShoe,
        Piece::BlackShoe,
    ];

    /// The three shoes in ordinal order.
    pub const SHOES: [Piece; 3] = [Piece::RedShoe, Piece::BlueShoe, Piece::BlackShoe];

    /// Returns the ordinal of this piece.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a piece from its ordinal.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            BLOCK => Some(Piece::Block),
            RED_SHOE => Some(Piece::RedShoe),
            BLUE_SHOE => Some(Piece::BlueShoe),
            BLACK_SHOE => Some(Piece::BlackShoe),
            _ => None,
        }
    }

    /// Checks whether this piece is one of the shoes.
    pub const fn is_shoe(self) -> bool {
        !matches!(self, Piece::Block)
    }

    /// Get label for this piece (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Piece::Block => "block",
            Piece::RedShoe => "red shoe",
            Piece::BlueShoe => "blue shoe",
            Piece::BlackShoe => "black shoe",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
