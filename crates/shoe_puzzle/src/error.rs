//! Error types for the puzzle core.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PuzzleErrorKind {
    /// The positions handed to a constructor violate a board invariant.
    #[display("Invalid initial state: {}", _0)]
    InvalidInitialState(String),

    /// No direction has the given coordinate change.
    #[display("No direction moves by ({}, {})", row_change, col_change)]
    UnknownDirection {
        /// Requested row change.
        row_change: i32,
        /// Requested column change.
        col_change: i32,
    },
}

/// Puzzle error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Puzzle error: {} at {}:{}", kind, file, line)]
pub struct PuzzleError {
    /// Error kind.
    pub kind: PuzzleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PuzzleError {
    /// Creates a new puzzle error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: PuzzleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`PuzzleErrorKind::InvalidInitialState`].
    #[track_caller]
    pub fn invalid_initial_state(reason: impl Into<String>) -> Self {
        Self::new(PuzzleErrorKind::InvalidInitialState(reason.into()))
    }

    /// Shorthand for [`PuzzleErrorKind::UnknownDirection`].
    #[track_caller]
    pub fn unknown_direction(row_change: i32, col_change: i32) -> Self {
        Self::new(PuzzleErrorKind::UnknownDirection {
            row_change,
            col_change,
        })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &PuzzleErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_caller_location() {
        let err = PuzzleError::unknown_direction(2, 0);
        assert_eq!(err.file, file!());
        assert!(err.line > 0);
    }

    #[test]
    fn test_error_display_includes_kind() {
        let err = PuzzleError::invalid_initial_state("blue and black shoes share a cell");
        let text = err.to_string();
        assert!(text.starts_with("Puzzle error: Invalid initial state: blue and black"));
    }
}
