// Negamax Search with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that simplifies implementation
// by taking advantage of the zero-sum property of chess: max(a, b) = -min(-a, -b).
// Instead of separate maximizing and minimizing functions, we use one function
// that negates the score at each level.
//
// The opening book is consulted before anything else at every node: a book
// hit plays the book move, evaluates the resulting position and returns
// without searching deeper.
//
// Leaves return `color * evaluate(pos)`. `evaluate` already answers from the
// side to move, so the two signs cancel and a leaf always sees White's raw
// score. The root therefore plays for White at even depths and for Black at
// odd depths, whichever side is to move.

use thiserror::Error;

use crate::game_repr::{parse_uci, ChessMove, Position, PositionError};
use super::evaluation::evaluate;
use super::move_ordering::generate_ordered_moves;
use super::opening_book::OpeningBook;

/// Bound of the alpha-beta window. Negating it stays in range.
pub const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The book suggested a move that cannot be played in its position
    #[error("book move `{mv}` for `{key}` cannot be played")]
    BookMove {
        key: String,
        mv: String,
        #[source]
        source: PositionError,
    },

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    pub book_hits: u64,
    /// Times the window closed before every move was searched
    pub cutoffs: u64,
}

/// Resolve the book's suggestion for `pos` to a legal move
pub(crate) fn resolve_book_move(pos: &Position, book_move: &str) -> Result<ChessMove, SearchError> {
    let reject = |source: PositionError| SearchError::BookMove {
        key: pos.key(),
        mv: book_move.to_string(),
        source,
    };

    let mv = parse_uci(book_move).map_err(reject)?;
    if !pos.is_legal(mv) {
        return Err(reject(PositionError::IllegalMove {
            mv: book_move.to_string(),
            fen: pos.to_fen(),
        }));
    }

    Ok(mv)
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (mutable for make/unmake moves)
/// * `depth` - Remaining search depth (0 = leaf node)
/// * `mut alpha` - Lower bound (best score maximizing player can guarantee)
/// * `beta` - Upper bound (best score opponent will allow)
/// * `color` - +1 or -1, flipped at every ply
/// * `book` - Opening book consulted at every node
/// * `stats` - Search counters
///
/// # Returns
///
/// The best score found for this node. The position is restored before
/// returning, on error paths too.
pub fn negamax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color: i32,
    book: &OpeningBook,
    stats: &mut SearchStats,
) -> Result<i32, SearchError> {
    stats.nodes += 1;

    if let Some(book_move) = book.lookup_position(pos) {
        stats.book_hits += 1;
        let mv = resolve_book_move(pos, book_move)?;

        pos.make_move(mv)?;
        let score = color * evaluate(pos);
        pos.unmake_move();
        return Ok(score);
    }

    if depth == 0 || pos.is_terminal() {
        return Ok(color * evaluate(pos));
    }

    // Not terminal, so at least one move exists
    let moves = generate_ordered_moves(pos);
    let mut max_value = -INFINITY;

    for mv in moves {
        pos.make_move(mv)?;
        let result = negamax(pos, depth - 1, -beta, -alpha, -color, book, stats);
        pos.unmake_move();
        let score = -result?;

        max_value = max_value.max(score);
        alpha = alpha.max(max_value);

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(max_value)
}
