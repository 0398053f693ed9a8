//! Move execution via copy-make: sowing, relay sowing, capture, turn order,
//! and the end-of-game sweep.

use tracing::{trace, warn};

use crate::board::BoardState;
use crate::error::IllegalMoveError;
use crate::moves::Move;

/// Upper bound on relay legs within a single move.
///
/// A relay that has not come to rest by then is stopped where it last landed.
pub const MAX_RELAY_LEGS: u32 = 10_000;

impl BoardState {
    /// Validate `mv` against the legal move list, then apply it.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if `mv` is not in
    /// [`legal_moves()`](BoardState::legal_moves). `self` is never modified.
    pub fn apply_move(&self, mv: Move) -> Result<BoardState, IllegalMoveError> {
        let legal = self.legal_moves();
        if !legal.contains(mv) {
            return Err(IllegalMoveError { mv, legal });
        }
        Ok(self.make_move(mv))
    }

    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The move is assumed legal; search calls this on moves taken from
    /// [`legal_moves()`](BoardState::legal_moves). Use
    /// [`apply_move()`](BoardState::apply_move) for untrusted input.
    pub fn make_move(&self, mv: Move) -> BoardState {
        self.make_move_with_leg_limit(mv, MAX_RELAY_LEGS)
    }

    /// [`make_move`](BoardState::make_move) with the relay stopped after
    /// `max_legs` sowing legs. A stopped relay rests where it last landed.
    pub(crate) fn make_move_with_leg_limit(&self, mv: Move, max_legs: u32) -> BoardState {
        let mut b = *self;
        let us = b.current_player();
        let own_store = b.store_index(us);
        let their_store = b.store_index(!us);

        let origin = b.hole_start(us) + mv.hole();
        let mut last = b.sow(origin, their_store);

        // Relay: keep sowing from the landing hole until the walk ends in our
        // store or in a hole that was empty.
        let mut legs = 1;
        while last != own_store && b.cell(last) > 1 {
            if legs >= max_legs {
                warn!(hole = last, legs, "relay sowing did not come to rest, stopping");
                break;
            }
            trace!(from = last, seeds = b.cell(last), "relay sowing");
            last = b.sow(last, their_store);
            legs += 1;
        }

        // Capture only at final rest, and only in our own holes.
        if b.cell(last) == 1 && b.hole_range(us).contains(&last) {
            let opposite = b.opposite(last);
            let stolen = b.cell(opposite);
            if stolen > 0 {
                *b.cell_mut(opposite) = 0;
                *b.cell_mut(last) = 0;
                *b.cell_mut(own_store) += stolen + 1;
            }
        }

        if last != own_store {
            b.set_current_player(!us);
        }

        b.settle();
        b
    }

    /// Pick up every seed in `from` and drop one per cell going forward,
    /// never into `skip`. Returns the index of the last cell sown.
    fn sow(&mut self, from: usize, skip: usize) -> usize {
        let len = self.cell_count();
        let mut seeds = std::mem::take(self.cell_mut(from));
        let mut idx = from;
        while seeds > 0 {
            idx = (idx + 1) % len;
            if idx == skip {
                continue;
            }
            *self.cell_mut(idx) += 1;
            seeds -= 1;
        }
        idx
    }
}
