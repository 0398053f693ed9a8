//! Error types for move application, board construction, and position notation.

use crate::moves::{Move, MoveList};

/// A move that is not in the legal move list of the position it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {mv}, legal moves: [{legal}]")]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mv: Move,
    /// The legal moves at the time of the call.
    pub legal: MoveList,
}

/// Errors from constructing a board with unsupported dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Holes per side must be between 1 and the supported maximum.
    #[error("holes per side must be in 1..={max}, got {holes}")]
    HolesOutOfRange {
        /// Requested holes per side.
        holes: usize,
        /// Largest supported value.
        max: usize,
    },
    /// The total seed count does not fit the cell type.
    #[error("{holes} holes of {seeds} seeds per side overflow the seed counter")]
    SeedOverflow {
        /// Holes per side.
        holes: usize,
        /// Seeds per hole.
        seeds: u32,
    },
}

/// Errors that occur when parsing position notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The notation does not have exactly 2 space-separated fields.
    #[error("expected 2 notation fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The cell section does not have exactly 4 `/`-separated parts.
    #[error("expected 4 board sections, found {found}")]
    WrongSectionCount {
        /// Number of sections found.
        found: usize,
    },
    /// A seed count is not a non-negative integer.
    #[error("invalid seed count: \"{found}\"")]
    InvalidCount {
        /// The offending text.
        found: String,
    },
    /// The two sides list a different number of holes.
    #[error("player one has {one} holes but player two has {two}")]
    UnevenSides {
        /// Holes listed for player one.
        one: usize,
        /// Holes listed for player two.
        two: usize,
    },
    /// The side-to-move field is not `1` or `2`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The offending text.
        found: String,
    },
    /// The described board has unsupported dimensions.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying construction error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, IllegalMoveError, NotationError};
    use crate::moves::{Move, MoveList};

    #[test]
    fn illegal_move_display() {
        let mut legal = MoveList::new();
        legal.push(Move::new(1));
        legal.push(Move::new(3));
        let err = IllegalMoveError {
            mv: Move::new(2),
            legal,
        };
        assert_eq!(format!("{err}"), "illegal move 2, legal moves: [1 3]");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::HolesOutOfRange { holes: 0, max: 15 };
        assert_eq!(format!("{err}"), "holes per side must be in 1..=15, got 0");
    }

    #[test]
    fn notation_error_from_board_error() {
        let err: NotationError = BoardError::HolesOutOfRange { holes: 20, max: 15 }.into();
        assert!(matches!(err, NotationError::InvalidBoard { .. }));
    }
}
