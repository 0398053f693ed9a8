//! Perft (performance test) for rules correctness verification.

use crate::board::BoardState;
use crate::moves::Move;

/// Count the leaf positions of the game tree to the given depth.
///
/// Depth 0 returns 1 (the current position). Finished games and positions
/// with no legal move count as a single leaf. Depth 1 returns the number of
/// legal moves without applying them.
pub fn perft(board: &BoardState, depth: usize) -> u64 {
    if depth == 0 || board.is_over() {
        return 1;
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return 1;
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown, in ascending move order.
pub fn divide(board: &BoardState, depth: usize) -> Vec<(Move, u64)> {
    board
        .legal_moves()
        .iter()
        .map(|&mv| {
            let child = board.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv, count)
        })
        .collect()
}
