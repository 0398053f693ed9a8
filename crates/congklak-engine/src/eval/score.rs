//! Extended-integer score used by search.

use std::fmt;

use congklak_core::{GameStatus, Player};

/// A search score: a finite evaluation, or a saturating win/loss bound.
///
/// Ordering is `NegInf < Finite(_) < PosInf`, with finite values compared
/// numerically, so search can compare scores directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// A forced loss for the perspective player.
    NegInf,
    /// A heuristic or drawn value.
    Finite(i32),
    /// A forced win for the perspective player.
    PosInf,
}

impl Score {
    /// The drawn-game score.
    pub const ZERO: Score = Score::Finite(0);

    /// Score a finished game from `perspective`'s point of view.
    ///
    /// A win is `PosInf`, a loss `NegInf`, a draw zero. Only meaningful for a
    /// status that [`is_over()`](GameStatus::is_over).
    pub fn terminal(status: GameStatus, perspective: Player) -> Score {
        match status.winner() {
            Some(winner) if winner == perspective => Score::PosInf,
            Some(_) => Score::NegInf,
            None => Score::ZERO,
        }
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(v: i32) -> Score {
        Score::Finite(v)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NegInf => f.write_str("-inf"),
            Score::Finite(v) => write!(f, "{v}"),
            Score::PosInf => f.write_str("+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Score;
    use congklak_core::{GameStatus, Player};

    #[test]
    fn ordering() {
        assert!(Score::NegInf < Score::Finite(i32::MIN));
        assert!(Score::Finite(-5) < Score::Finite(3));
        assert!(Score::Finite(i32::MAX) < Score::PosInf);
        assert_eq!(Score::Finite(7).max(Score::PosInf), Score::PosInf);
    }

    #[test]
    fn terminal_scores_follow_perspective() {
        assert_eq!(Score::terminal(GameStatus::PlayerOneWins, Player::One), Score::PosInf);
        assert_eq!(Score::terminal(GameStatus::PlayerOneWins, Player::Two), Score::NegInf);
        assert_eq!(Score::terminal(GameStatus::PlayerTwoWins, Player::Two), Score::PosInf);
        assert_eq!(Score::terminal(GameStatus::PlayerTwoWins, Player::One), Score::NegInf);
        assert_eq!(Score::terminal(GameStatus::Draw, Player::One), Score::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Score::PosInf.to_string(), "+inf");
        assert_eq!(Score::NegInf.to_string(), "-inf");
        assert_eq!(Score::from(-4).to_string(), "-4");
    }
}
