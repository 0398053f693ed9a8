//! Plain minimax over a static evaluator.

use congklak_core::{BoardState, Move, MoveList, Player};

use crate::eval::{Evaluator, Score};

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a, E: Evaluator + ?Sized> {
    pub evaluator: &'a E,
    pub perspective: Player,
    pub nodes: u64,
}

impl<'a, E: Evaluator + ?Sized> SearchContext<'a, E> {
    pub fn new(evaluator: &'a E, perspective: Player) -> Self {
        Self {
            evaluator,
            perspective,
            nodes: 0,
        }
    }
}

/// What a node does: score itself, or expand the listed moves.
pub(super) enum Node {
    Leaf(Score),
    /// Never empty.
    Expand(MoveList),
}

/// Decide whether `board` is a leaf at `depth`, generating its moves once.
///
/// Finished games score as a win, loss, or draw for the perspective player.
/// A depth of zero or a side with nothing to play falls back to the static
/// evaluation.
pub(super) fn classify<E: Evaluator + ?Sized>(
    board: &BoardState,
    depth: u8,
    ctx: &SearchContext<'_, E>,
) -> Node {
    if board.is_over() {
        return Node::Leaf(Score::terminal(board.status(), ctx.perspective));
    }
    if depth == 0 {
        return Node::Leaf(static_score(board, ctx));
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Node::Leaf(static_score(board, ctx));
    }
    Node::Expand(moves)
}

pub(super) fn static_score<E: Evaluator + ?Sized>(
    board: &BoardState,
    ctx: &SearchContext<'_, E>,
) -> Score {
    Score::from(ctx.evaluator.score(board, ctx.perspective))
}

/// `true` if `candidate` should replace `best` at a node where the side to
/// move is (`maximizing`) or is not the perspective player.
///
/// Strict comparison keeps the earliest move on ties.
#[inline]
pub(super) fn improves(candidate: Score, best: Score, maximizing: bool) -> bool {
    if maximizing {
        candidate > best
    } else {
        candidate < best
    }
}

/// Minimax to `depth` plies.
///
/// Maximizes when the side to move is `ctx.perspective`, minimizes otherwise.
/// Extra turns keep the same side to move, so a ply is a move, not a turn.
pub(super) fn minimax<E: Evaluator + ?Sized>(
    board: &BoardState,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> (Score, Option<Move>) {
    ctx.nodes += 1;

    let moves = match classify(board, depth, ctx) {
        Node::Leaf(score) => return (score, None),
        Node::Expand(moves) => moves,
    };

    let maximizing = board.current_player() == ctx.perspective;
    let mut best: Option<(Score, Move)> = None;

    for &mv in moves.iter() {
        let child = board.make_move(mv);
        let (score, _) = minimax(&child, depth - 1, ctx);
        match best {
            Some((best_score, _)) if !improves(score, best_score, maximizing) => {}
            _ => best = Some((score, mv)),
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv)),
        None => (static_score(board, ctx), None),
    }
}
