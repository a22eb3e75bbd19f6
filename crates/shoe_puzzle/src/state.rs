//! The authoritative state of the puzzle.

use crate::invariants::{InitialInvariants, InvariantSet, InvariantViolation, PuzzleInvariants};
use crate::observe::{Observers, SubscriptionId};
use crate::{Board, Direction, Piece, Position, PuzzleError, rules};
use tracing::{debug, instrument, trace};

/// State of the shoe puzzle: the positions of the four pieces plus the
/// listeners observing them.
///
/// The only mutation is [`PuzzleState::move_block`]. Each applied move
/// notifies position listeners for every piece that moved (carried shoes
/// first, in ordinal order, then the block), then goal listeners if the goal
/// flag toggled.
///
/// Equality, hashing and cloning consider positions only. A clone starts
/// with no listeners.
pub struct PuzzleState {
    board: Board,
    observers: Observers,
}

impl PuzzleState {
    /// Positions of the original starting layout, in piece ordinal order.
    pub const DEFAULT_POSITIONS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(2, 0),
        Position::new(1, 1),
        Position::new(0, 2),
    ];

    /// Creates the puzzle in its original starting layout.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new(Self::DEFAULT_POSITIONS))
    }

    /// Creates a puzzle from positions in piece ordinal order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInitialState` unless exactly four positions are given,
    /// all on the board, with the blue and black shoes on different cells.
    #[instrument]
    pub fn from_positions(positions: &[Position]) -> Result<Self, PuzzleError> {
        let positions: [Position; 4] = positions.try_into().map_err(|_| {
            PuzzleError::invalid_initial_state(format!(
                "expected 4 positions, got {}",
                positions.len()
            ))
        })?;

        let board = Board::new(positions);
        InitialInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PuzzleError::invalid_initial_state(descriptions)
        })?;

        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            observers: Observers::default(),
        }
    }

    /// Returns a copy of the piece layout.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the position of a piece.
    pub fn position(&self, piece: Piece) -> Position {
        self.board.get(piece)
    }

    /// Returns the positions of all pieces in ordinal order.
    pub fn positions(&self) -> [Position; 4] {
        *self.board.positions()
    }

    /// Checks whether the puzzle is solved.
    pub fn is_goal(&self) -> bool {
        rules::is_goal(&self.board)
    }

    /// Checks whether the block can be moved in the given direction.
    pub fn can_move(&self, direction: Direction) -> bool {
        rules::can_move(&self.board, direction)
    }

    /// Returns the directions in which the block can be moved, in canonical
    /// order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.can_move(*d))
            .collect()
    }

    /// Returns the shoes a move in `direction` would carry along.
    pub fn carried_shoes(&self, direction: Direction) -> Vec<Piece> {
        rules::carried_shoes(&self.board, direction)
    }

    /// Moves the block in the given direction, together with the shoes it
    /// carries.
    ///
    /// An illegal move changes nothing and notifies nobody. Returns whether
    /// the move was applied.
    #[instrument(skip(self), fields(state = %self))]
    pub fn move_block(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            trace!(%direction, "Ignoring illegal move");
            return false;
        }

        let goal_before = self.is_goal();
        for shoe in rules::carried_shoes(&self.board, direction) {
            self.shift_piece(shoe, direction);
        }
        self.shift_piece(Piece::Block, direction);

        let goal_after = self.is_goal();
        if goal_before != goal_after {
            self.observers.notify_goal(goal_before, goal_after);
        }

        debug_assert!(
            self.check_invariants().is_ok(),
            "Move {} broke an invariant: {}",
            direction,
            self
        );
        debug!(%direction, state = %self, goal = goal_after, "Moved block");
        true
    }

    fn shift_piece(&mut self, piece: Piece, direction: Direction) {
        let new = self.board.get(piece).shift(direction);
        let old = self.board.set(piece, new);
        self.observers.notify_position(piece, old, new);
    }

    /// Checks every puzzle invariant against the current layout.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        PuzzleInvariants::check_all(self)
    }

    /// Registers a listener for position changes of one piece.
    pub fn subscribe_position<F>(&mut self, piece: Piece, listener: F) -> SubscriptionId
    where
        F: FnMut(Piece, Position, Position) + 'static,
    {
        self.observers
            .subscribe_position(Some(piece), Box::new(listener))
    }

    /// Registers a listener for position changes of every piece.
    pub fn subscribe_positions<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Piece, Position, Position) + 'static,
    {
        self.observers.subscribe_position(None, Box::new(listener))
    }

    /// Registers a listener for changes of the goal flag.
    pub fn subscribe_goal<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(bool, bool) + 'static,
    {
        self.observers.subscribe_goal(Box::new(listener))
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PuzzleState {
    fn clone(&self) -> Self {
        Self::from_board(self.board)
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for PuzzleState {}

impl std::hash::Hash for PuzzleState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl std::fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleState")
            .field("board", &self.board)
            .field("observers", &self.observers)
            .finish()
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl TryFrom<[Position; 4]> for PuzzleState {
    type Error = PuzzleError;

    fn try_from(positions: [Position; 4]) -> Result<Self, Self::Error> {
        Self::from_positions(&positions)
    }
}
