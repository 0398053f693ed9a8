//! Weighted evaluation: stores, seeds in play, and capture threats.
//!
//! The stealing potential of a side is the number of seeds sitting opposite
//! its empty holes, i.e. what a capture could take next turn. All terms are
//! differences or potentials from the perspective player's side, scaled by
//! [`EvalWeights`].

use congklak_core::{BoardState, Player};

use crate::eval::{Evaluator, clamp_score};

/// Tunable weights for [`Weighted`].
///
/// `steal_defense` multiplies the opponent's stealing potential and is
/// normally negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Weight of the store difference.
    pub silo: i32,
    /// Weight of the difference in seeds still on each side.
    pub on_board: i32,
    /// Weight of the perspective player's stealing potential.
    pub steal_offense: i32,
    /// Weight of the opponent's stealing potential.
    pub steal_defense: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            silo: 10,
            on_board: 1,
            steal_offense: 2,
            steal_defense: -2,
        }
    }
}

/// Weighted multi-term evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weighted {
    weights: EvalWeights,
}

impl Weighted {
    /// Create an evaluator with the given weights.
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

/// Sum of the seeds opposite each of `player`'s empty holes.
pub fn stealing_potential(board: &BoardState, player: Player) -> i64 {
    board
        .hole_range(player)
        .filter(|&idx| board.cell(idx) == 0)
        .map(|idx| i64::from(board.cell(board.opposite(idx))))
        .sum()
}

impl Evaluator for Weighted {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn score(&self, board: &BoardState, perspective: Player) -> i32 {
        let us = perspective;
        let them = !perspective;
        let w = &self.weights;

        let silo = i64::from(board.store(us)) - i64::from(board.store(them));
        let on_board = i64::from(board.seeds_on_side(us)) - i64::from(board.seeds_on_side(them));
        let offense = stealing_potential(board, us);
        let defense = stealing_potential(board, them);

        // Terms and weights both span the full i32 range, so combine wide.
        let total = [
            (w.silo, silo),
            (w.on_board, on_board),
            (w.steal_offense, offense),
            (w.steal_defense, defense),
        ]
        .into_iter()
        .fold(0i64, |acc, (weight, term)| {
            acc.saturating_add(i64::from(weight).saturating_mul(term))
        });
        clamp_score(total)
    }
}
