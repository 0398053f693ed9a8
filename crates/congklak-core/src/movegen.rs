//! Legal move generation.

use crate::board::BoardState;
use crate::moves::{Move, MoveList};

/// Generate all legal moves for the side to move, in ascending hole order.
///
/// A hole is playable when it holds at least one seed. The list is empty when
/// the mover's side is empty, which after any move only happens once the game
/// is over.
pub fn generate_legal_moves(board: &BoardState) -> MoveList {
    let mut list = MoveList::new();
    let us = board.current_player();
    for (hole, &seeds) in board.holes(us).iter().enumerate() {
        if seeds > 0 {
            list.push(Move::new(hole as u8));
        }
    }
    list
}

impl BoardState {
    /// Legal moves for the side to move. See [`generate_legal_moves`].
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }
}
