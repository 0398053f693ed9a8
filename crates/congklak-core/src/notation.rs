//! Position notation parsing and serialization for [`BoardState`].
//!
//! A position is written as `<one holes>/<one store>/<two holes>/<two store> <side>`,
//! with hole lists comma-separated in sowing order and the side to move given
//! as `1` or `2`. The standard start is
//! `7,7,7,7,7,7,7/0/7,7,7,7,7,7,7/0 1`.

use std::fmt;
use std::str::FromStr;

use crate::board::BoardState;
use crate::error::NotationError;
use crate::player::Player;

/// Notation for the standard 7-hole, 7-seed starting position.
pub const STARTING_NOTATION: &str = "7,7,7,7,7,7,7/0/7,7,7,7,7,7,7/0 1";

impl FromStr for BoardState {
    type Err = NotationError;

    fn from_str(text: &str) -> Result<BoardState, NotationError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let sections: Vec<&str> = fields[0].split('/').collect();
        if sections.len() != 4 {
            return Err(NotationError::WrongSectionCount {
                found: sections.len(),
            });
        }

        let one_holes = parse_counts(sections[0])?;
        let one_store = parse_count(sections[1])?;
        let two_holes = parse_counts(sections[2])?;
        let two_store = parse_count(sections[3])?;

        if one_holes.len() != two_holes.len() {
            return Err(NotationError::UnevenSides {
                one: one_holes.len(),
                two: two_holes.len(),
            });
        }

        let side = Player::from_label(fields[1]).ok_or_else(|| NotationError::InvalidSide {
            found: fields[1].to_string(),
        })?;

        let board = BoardState::from_sides(&one_holes, one_store, &two_holes, two_store, side)?;
        Ok(board)
    }
}

fn parse_counts(section: &str) -> Result<Vec<u32>, NotationError> {
    section.split(',').map(parse_count).collect()
}

fn parse_count(text: &str) -> Result<u32, NotationError> {
    text.parse::<u32>().map_err(|_| NotationError::InvalidCount {
        found: text.to_string(),
    })
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, player) in Player::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for (j, seeds) in self.holes(player).iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{seeds}")?;
            }
            write!(f, "/{}", self.store(player))?;
        }
        write!(f, " {}", self.current_player())
    }
}
