//! Shoe puzzle - a sliding block puzzle on a 3x3 board.
//!
//! Four pieces share the board: a neutral block and three shoes (red, blue,
//! black). The player moves the block up, right, down or left; shoes stacked
//! on the block ride along according to direction-specific rules. The
//! puzzle is solved when the red and blue shoes occupy the same cell.
//!
//! # Architecture
//!
//! - **Geometry**: [`Position`] and [`Direction`], pure values
//! - **Rules**: legality, carried shoes and goal detection over a [`Board`]
//! - **State**: [`PuzzleState`], the observable state machine
//! - **Invariants**: properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use shoe_puzzle::{Direction, Piece, Position, PuzzleState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut state = PuzzleState::new();
//! let block_moves = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&block_moves);
//! state.subscribe_position(Piece::Block, move |_, _, _| counter.set(counter.get() + 1));
//!
//! assert_eq!(state.legal_moves(), vec![Direction::Right, Direction::Down]);
//! assert!(state.move_block(Direction::Right));
//! assert!(!state.move_block(Direction::Up));
//! assert_eq!(state.position(Piece::Block), Position::new(0, 1));
//! assert_eq!(block_moves.get(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod geometry;
pub mod invariants;
mod observe;
mod piece;
pub mod rules;
mod state;

pub use board::Board;
pub use error::{PuzzleError, PuzzleErrorKind};
pub use geometry::{BOARD_SIZE, Direction, Position};
pub use observe::{GoalListener, PositionListener, SubscriptionId};
pub use piece::{BLACK_SHOE, BLOCK, BLUE_SHOE, Piece, RED_SHOE};
pub use state::PuzzleState;
