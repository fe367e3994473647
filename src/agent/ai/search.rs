// Root move selection
//
// The opening book is asked first. On a miss every legal root move is
// searched with negamax to the requested depth and the best one is kept.

use std::fmt;

use log::{debug, info, warn};

use crate::game_repr::{to_uci, ChessMove, Position};
use super::move_ordering::generate_ordered_moves;
use super::negamax::{negamax, resolve_book_move, SearchError, SearchStats, INFINITY};
use super::opening_book::OpeningBook;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 8;

/// Deepest search accepted; deeper requests are clamped
pub const MAX_SEARCH_DEPTH: u8 = 32;

/// Where the returned move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search,
    /// The side to move has no legal move
    NoMove,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveSource::Book => "book",
            MoveSource::Search => "search",
            MoveSource::NoMove => "none",
        };
        f.write_str(name)
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// Negamax score of the chosen move; `None` for book moves and no-move results
    pub score: Option<i32>,
    pub depth: u8,
    pub source: MoveSource,
    pub stats: SearchStats,
}

impl SearchResult {
    fn no_move(depth: u8, stats: SearchStats) -> Self {
        Self {
            best_move: None,
            score: None,
            depth,
            source: MoveSource::NoMove,
            stats,
        }
    }

    /// Chosen move in long algebraic notation
    pub fn uci(&self) -> Option<String> {
        self.best_move.map(to_uci)
    }

    pub fn is_no_move(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Bring a requested depth into `1..=MAX_SEARCH_DEPTH`
pub fn clamp_depth(depth: u8) -> u8 {
    let clamped = depth.clamp(1, MAX_SEARCH_DEPTH);
    if clamped != depth {
        warn!("search depth {} out of range, using {}", depth, clamped);
    }
    clamped
}

/// Pick the move to play in `pos`
///
/// # Arguments
/// * `pos` - Position to search, left untouched
/// * `depth` - Search depth in plies, clamped to `1..=MAX_SEARCH_DEPTH`
/// * `book` - Opening book consulted at the root and at every node below
///
/// # Returns
/// The chosen move, or a result with `best_move == None` when the side to
/// move has no legal move. A book move that cannot be played is an error.
pub fn find_best_move(pos: &Position, depth: u8, book: &OpeningBook) -> Result<SearchResult, SearchError> {
    let depth = clamp_depth(depth);
    let mut stats = SearchStats::default();

    if let Some(book_move) = book.lookup_position(pos) {
        let mv = resolve_book_move(pos, book_move)?;
        stats.book_hits += 1;
        info!("book move {}", book_move);

        return Ok(SearchResult {
            best_move: Some(mv),
            score: None,
            depth,
            source: MoveSource::Book,
            stats,
        });
    }

    // Clone position for searching (we need a mutable copy)
    let mut search_pos = pos.clone();
    stats.nodes += 1;

    let moves = generate_ordered_moves(&search_pos);
    if moves.is_empty() {
        info!("no legal moves in {}", pos.to_fen());
        return Ok(SearchResult::no_move(depth, stats));
    }

    let color = search_pos.color_sign();
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best_value = -INFINITY;
    let mut best_move = None;

    for mv in moves {
        search_pos.make_move(mv)?;
        let result = negamax(&mut search_pos, depth - 1, -beta, -alpha, -color, book, &mut stats);
        search_pos.unmake_move();
        let score = -result?;

        debug!("root move {} scored {}", to_uci(mv), score);

        // Ties keep the earlier move
        if best_move.is_none() || score > best_value {
            best_value = score;
            best_move = Some(mv);
        }

        alpha = alpha.max(best_value);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    let result = SearchResult {
        best_move,
        score: Some(best_value),
        depth,
        source: MoveSource::Search,
        stats,
    };

    info!(
        "depth {} best {} score {} nodes {} book hits {} cutoffs {}",
        depth,
        result.uci().unwrap_or_default(),
        best_value,
        stats.nodes,
        stats.book_hits,
        stats.cutoffs
    );

    Ok(result)
}
