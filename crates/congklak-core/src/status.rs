//! Game outcome tracking.

use std::fmt;

use crate::player::Player;

/// Whether the game is still running, and if not, who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl GameStatus {
    /// Build the final status from the two store totals.
    pub fn from_stores(one: u32, two: u32) -> GameStatus {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameStatus::PlayerOneWins,
            std::cmp::Ordering::Less => GameStatus::PlayerTwoWins,
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// The winning player, if the game ended decisively.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::PlayerOneWins => Some(Player::One),
            GameStatus::PlayerTwoWins => Some(Player::Two),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::PlayerOneWins => "one-wins",
            GameStatus::PlayerTwoWins => "two-wins",
            GameStatus::Draw => "draw",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::player::Player;

    #[test]
    fn from_stores_picks_larger() {
        assert_eq!(GameStatus::from_stores(50, 48), GameStatus::PlayerOneWins);
        assert_eq!(GameStatus::from_stores(10, 88), GameStatus::PlayerTwoWins);
        assert_eq!(GameStatus::from_stores(49, 49), GameStatus::Draw);
    }

    #[test]
    fn winner_and_is_over() {
        assert!(!GameStatus::Ongoing.is_over());
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::PlayerOneWins.winner(), Some(Player::One));
        assert_eq!(GameStatus::PlayerTwoWins.winner(), Some(Player::Two));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::Ongoing.winner(), None);
    }
}
