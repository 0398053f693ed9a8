//! Root-split parallel search.
//!
//! The root's legal moves are dealt out in contiguous chunks to scoped
//! threads. Each thread searches its children to `depth - 1` with its own
//! node counter. The per-child results are folded back in ascending move
//! order, so the chosen move and score match the single-threaded search.

use std::thread;

use congklak_core::{BoardState, Move, Player};

use crate::eval::{Evaluator, Score};
use crate::search::minimax::{Node, SearchContext, classify, improves, minimax, static_score};

/// One searched root child.
struct RootChild {
    mv: Move,
    score: Score,
    nodes: u64,
}

/// Search `board` to `depth` on up to `threads` threads.
///
/// Returns the score, the best move, and the total node count including the
/// root itself.
pub(super) fn split_search<E: Evaluator + ?Sized>(
    board: &BoardState,
    depth: u8,
    evaluator: &E,
    perspective: Player,
    threads: usize,
) -> (Score, Option<Move>, u64) {
    let root = SearchContext::new(evaluator, perspective);
    let moves = match classify(board, depth, &root) {
        Node::Leaf(score) => return (score, None, 1),
        Node::Expand(moves) => moves,
    };
    let chunk_len = moves.len().div_ceil(threads.max(1));

    let children: Vec<RootChild> = thread::scope(|s| {
        let handles: Vec<_> = moves
            .as_slice()
            .chunks(chunk_len)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|&mv| {
                            let mut ctx = SearchContext::new(evaluator, perspective);
                            let (score, _) = minimax(&board.make_move(mv), depth - 1, &mut ctx);
                            RootChild {
                                mv,
                                score,
                                nodes: ctx.nodes,
                            }
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        // Chunks are contiguous, so joining in spawn order keeps move order.
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let maximizing = board.current_player() == perspective;
    let mut nodes = 1;
    let mut best: Option<(Score, Move)> = None;
    for child in &children {
        nodes += child.nodes;
        match best {
            Some((best_score, _)) if !improves(child.score, best_score, maximizing) => {}
            _ => best = Some((child.score, child.mv)),
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv), nodes),
        None => (static_score(board, &root), None, nodes),
    }
}
