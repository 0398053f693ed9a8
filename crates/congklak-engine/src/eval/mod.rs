//! Position evaluation.
//!
//! All evaluators score a board from a given player's point of view:
//! positive means that player is ahead.

pub mod score;
pub mod store;
pub mod weighted;

use congklak_core::{BoardState, Player};

pub use score::Score;
pub use store::StoreDifference;
pub use weighted::{EvalWeights, Weighted};

/// A static evaluation function.
pub trait Evaluator: Send + Sync {
    /// Short name used in selector descriptions.
    fn name(&self) -> &'static str;

    /// Score `board` from `perspective`'s point of view.
    fn score(&self, board: &BoardState, perspective: Player) -> i32;
}

/// Baseline evaluation: own store minus the opponent's store.
///
/// Differences beyond the `i32` range clamp to its bounds.
#[inline]
pub fn evaluate(board: &BoardState, perspective: Player) -> i32 {
    clamp_score(i64::from(board.store(perspective)) - i64::from(board.store(!perspective)))
}

/// Narrow a wide evaluation to `i32`, saturating at the bounds.
#[inline]
pub(crate) fn clamp_score(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
