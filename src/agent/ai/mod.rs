// AI Agent - Negamax with Alpha-Beta Pruning
//
// This module implements a classical chess AI using the Negamax algorithm
// with alpha-beta pruning and an opening book.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Opening book consulted at the root and at every node of the search
// - Material + piece-square table evaluation with an endgame king table
// - Tactical moves (captures and checks) searched first

mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod opening_book;
mod piece_square_tables;
mod search;


pub use negamax_player::{Difficulty, EngineError, NegamaxPlayer};

// Re-export useful types
pub use evaluation::{evaluate, is_endgame, material_value, raw_score};
pub use move_ordering::{generate_ordered_moves, order_moves};
pub use negamax::{negamax, SearchError, SearchStats, INFINITY};
pub use opening_book::{BookError, OpeningBook};
pub use piece_square_tables::get_pst_value;
pub use search::{clamp_depth, find_best_move, MoveSource, SearchResult, DEFAULT_DEPTH, MAX_SEARCH_DEPTH};
