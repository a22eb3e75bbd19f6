//! The goal flag agrees with the shoe positions.

use super::Invariant;
use crate::{Piece, PuzzleState};

/// Invariant: [`PuzzleState::is_goal`] reports true exactly when the red
/// and blue shoes stand on the same cell.
///
/// Only meaningful on a [`PuzzleState`]; a bare board has no goal flag of
/// its own to compare.
pub struct GoalMatchesShoes;

impl Invariant<PuzzleState> for GoalMatchesShoes {
    fn holds(state: &PuzzleState) -> bool {
        state.is_goal() == (state.position(Piece::RedShoe) == state.position(Piece::BlueShoe))
    }

    fn description() -> &'static str {
        "Goal holds exactly when red and blue shoes coincide"
    }
}
