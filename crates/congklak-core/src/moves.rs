//! Move representation and the fixed-capacity move buffer.

use std::fmt;

use crate::board::MAX_HOLES;

/// A move: the hole to sow from, counted from the mover's first hole.
///
/// The index is relative, so `Move::new(0)` means hole 0 of player one when
/// player one is to move and hole 0 of player two otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move(u8);

impl Move {
    /// Create a move from a relative hole index.
    #[inline]
    pub const fn new(hole: u8) -> Move {
        Move(hole)
    }

    /// The relative hole index.
    #[inline]
    pub const fn hole(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stack-allocated buffer for generated moves. One slot per hole is enough.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_HOLES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move(0); MAX_HOLES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_HOLES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &MoveList) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

/// Space-separated hole indices, e.g. `0 2 5`.
impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveList};

    #[test]
    fn move_hole_roundtrip() {
        assert_eq!(Move::new(6).hole(), 6);
        assert_eq!(format!("{}", Move::new(3)), "3");
    }

    #[test]
    fn list_push_and_index() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::new(1));
        list.push(Move::new(4));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], Move::new(4));
        assert!(list.contains(Move::new(1)));
        assert!(!list.contains(Move::new(2)));
    }

    #[test]
    fn debug_lists_moves() {
        let mut list = MoveList::new();
        list.push(Move::new(0));
        list.push(Move::new(5));
        assert_eq!(format!("{list:?}"), "[Move(0), Move(5)]");
        assert_eq!(format!("{list}"), "0 5");
    }
}
