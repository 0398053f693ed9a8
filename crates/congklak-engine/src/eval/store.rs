//! Store-difference evaluation.

use congklak_core::{BoardState, Player};

use crate::eval::{Evaluator, evaluate};

/// Scores a position by store difference alone. See [`evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreDifference;

impl Evaluator for StoreDifference {
    fn name(&self) -> &'static str {
        "baseline"
    }

    #[inline]
    fn score(&self, board: &BoardState, perspective: Player) -> i32 {
        evaluate(board, perspective)
    }
}
