//! Move selection by depth-limited minimax.

pub mod minimax;
pub mod pool;

use congklak_core::{BoardState, Move, Player};
use tracing::debug;

use crate::eval::{Evaluator, Score, StoreDifference, Weighted};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the perspective player's point of view.
    pub score: Score,
    /// Best move for the side to move, or `None` at a finished game, at
    /// depth zero, or when the side to move has no seeds to sow.
    pub best_move: Option<Move>,
    /// Positions visited, root included.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Anything that can pick a move for a position.
///
/// A learned policy would implement this alongside [`Minimax`].
pub trait MoveSelector: Send + Sync {
    /// Human-readable description, e.g. `minimax-weighted`.
    fn name(&self) -> &str;

    /// Choose a move for the side to move in `board`, scoring from
    /// `perspective`'s point of view.
    ///
    /// A result with no move means the side to move must pass.
    fn choose_move(&self, board: &BoardState, perspective: Player) -> SearchResult;
}

/// Minimax search over evaluator `E` to a fixed depth.
#[derive(Debug, Clone)]
pub struct Minimax<E> {
    evaluator: E,
    depth: u8,
    threads: usize,
    name: String,
}

/// Minimax over the store difference.
pub type BaselineMinimax = Minimax<StoreDifference>;

/// Minimax over the weighted evaluation.
pub type WeightedMinimax = Minimax<Weighted>;

impl<E: Evaluator> Minimax<E> {
    /// Create a single-threaded searcher with a default depth of `depth`.
    pub fn new(evaluator: E, depth: u8) -> Self {
        let name = format!("minimax-{}", evaluator.name());
        Self {
            evaluator,
            depth,
            threads: 1,
            name,
        }
    }

    /// Split the root across `threads` threads (at least one).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// The depth used by [`MoveSelector::choose_move`].
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of root threads.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Search `board` to `max_depth` plies, scoring for `perspective`.
    ///
    /// Every node maximizes when `perspective` is to move and minimizes
    /// otherwise. Ties keep the lowest hole.
    pub fn search(&self, board: &BoardState, perspective: Player, max_depth: u8) -> SearchResult {
        let (score, best_move, nodes) = if self.threads > 1 {
            pool::split_search(board, max_depth, &self.evaluator, perspective, self.threads)
        } else {
            let mut ctx = minimax::SearchContext::new(&self.evaluator, perspective);
            let (score, mv) = minimax::minimax(board, max_depth, &mut ctx);
            (score, mv, ctx.nodes)
        };

        debug!(
            selector = %self.name,
            depth = max_depth,
            threads = self.threads,
            nodes,
            %score,
            best_move = ?best_move.map(|m| m.hole()),
            "search finished"
        );

        SearchResult {
            score,
            best_move,
            nodes,
            depth: max_depth,
        }
    }
}

impl<E: Evaluator> MoveSelector for Minimax<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &BoardState, perspective: Player) -> SearchResult {
        self.search(board, perspective, self.depth)
    }
}
