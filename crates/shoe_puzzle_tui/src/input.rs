//! Keyboard translation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shoe_puzzle::Direction;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the block.
    Move(Direction),
    /// Start over from the initial layout.
    Restart,
    /// Leave the program.
    Quit,
    /// Close the game-over dialog.
    Dismiss,
    /// Key without a binding.
    Ignore,
}

/// Maps a key press to an action.
///
/// Arrow keys move the block, Ctrl-R restarts, Ctrl-Q or `q` quits and
/// Enter or Esc dismiss the game-over dialog.
pub fn action_for_key(key: &KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => Action::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Enter | KeyCode::Esc => Action::Dismiss,
        _ => Action::Ignore,
    }
}
