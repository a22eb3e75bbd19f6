//! Game controller: move counter, restarts and the game-over dialog.

use crate::config::TuiConfig;
use crate::input::Action;
use shoe_puzzle::{Direction, Piece, PuzzleState};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, instrument, trace, warn};

const SOLVED_MESSAGE: &str = "Congratulations, you have solved the puzzle!";

/// Main application state.
pub struct App {
    state: PuzzleState,
    moves: u32,
    /// Set by the goal listener of the current state.
    solved: Rc<Cell<bool>>,
    status_message: String,
    restart_on_goal: bool,
    show_legal_moves: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        let mut app = Self {
            state: PuzzleState::new(),
            moves: 0,
            solved: Rc::new(Cell::new(false)),
            status_message: String::new(),
            restart_on_goal: *config.restart_on_goal(),
            show_legal_moves: *config.show_legal_moves(),
        };
        app.restart();
        app
    }

    /// Gets the puzzle state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Number of moves made since the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the game-over dialog is showing.
    pub fn is_game_over(&self) -> bool {
        self.solved.get()
    }

    /// Whether the legal moves line is shown.
    pub fn show_legal_moves(&self) -> bool {
        self.show_legal_moves
    }

    /// Applies an action. Returns `false` when the user asked to quit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                debug!("Exiting");
                return false;
            }
            Action::Restart => self.restart(),
            Action::Dismiss => self.acknowledge_game_over(),
            Action::Move(direction) => {
                debug!(%direction, "Key pressed");
                self.perform_move(direction);
            }
            Action::Ignore => {}
        }
        true
    }

    /// Moves the block if the move is legal.
    #[instrument(skip(self))]
    pub fn perform_move(&mut self, direction: Direction) {
        if self.is_game_over() {
            debug!(%direction, "Ignoring move while game over");
            return;
        }
        if !self.state.can_move(direction) {
            warn!(%direction, "Invalid move");
            self.status_message = format!("Cannot move {}", direction);
            return;
        }

        info!(%direction, "Moving");
        self.state.move_block(direction);
        trace!(state = %self.state, "New state");
        self.moves += 1;
        self.status_message = if self.is_game_over() {
            SOLVED_MESSAGE.to_string()
        } else {
            format!("Moved {}", direction)
        };
    }

    /// Moves the block towards a clicked cell adjacent to it.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, row: i32, col: i32) {
        debug!(row, col, "Click on square");
        let block = self.state.position(Piece::Block);
        match Direction::of(row - block.row(), col - block.col()) {
            Ok(direction) => self.perform_move(direction),
            Err(_) => warn!(row, col, "Click does not correspond to any direction"),
        }
    }

    /// Starts over from the initial layout.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let solved = Rc::new(Cell::new(false));
        let flag = Rc::clone(&solved);
        let mut state = PuzzleState::new();
        state.subscribe_goal(move |_, reached| flag.set(reached));

        self.state = state;
        self.solved = solved;
        self.moves = 0;
        self.status_message = "Use the arrow keys or click next to the block".to_string();
    }

    /// Closes the game-over dialog, restarting if configured to.
    #[instrument(skip(self))]
    pub fn acknowledge_game_over(&mut self) {
        if !self.is_game_over() {
            return;
        }
        if self.restart_on_goal {
            self.restart();
        } else {
            self.solved.set(false);
            self.status_message = SOLVED_MESSAGE.to_string();
        }
    }
}
