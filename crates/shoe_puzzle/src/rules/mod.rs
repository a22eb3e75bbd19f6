//! Movement rules of the shoe puzzle.
//!
//! Pure functions over a [`Board`](crate::Board). The rules are
//! deliberately asymmetric: each direction has its own legality predicate
//! and its own set of shoes that ride along with the block.

pub mod carry;
pub mod goal;
pub mod legality;

pub use carry::carried_shoes;
pub use goal::is_goal;
pub use legality::can_move;
