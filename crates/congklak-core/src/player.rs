//! The two sides of a Congklak board.

use std::fmt;
use std::ops::Not;

/// One of the two players. Player one owns the low half of the pit array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Parse the single-character side label used in position notation.
    pub fn from_label(label: &str) -> Option<Player> {
        match label {
            "1" => Some(Player::One),
            "2" => Some(Player::Two),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn opponent_roundtrip() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(!!Player::One, Player::One);
    }

    #[test]
    fn label_parsing() {
        assert_eq!(Player::from_label("1"), Some(Player::One));
        assert_eq!(Player::from_label("2"), Some(Player::Two));
        assert_eq!(Player::from_label("3"), None);
        assert_eq!(Player::from_label(""), None);
    }

    #[test]
    fn display_matches_label() {
        for player in Player::ALL {
            assert_eq!(Player::from_label(&player.to_string()), Some(player));
        }
    }
}
