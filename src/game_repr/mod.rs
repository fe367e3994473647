// Rules-engine adapter.
//
// Board representation, move generation and termination detection come from
// the `chess` crate. This module wraps a `chess::Board` in a `Position` with an
// explicit make/unmake stack and adds the pieces the search needs on top:
// canonical position keys, long algebraic notation and move classification.

mod moves;
mod position;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use position::*;

pub use chess::{Board, BoardStatus, ChessMove, Color, Piece, Square};

/*-------KEY FORMAT--------*/

// | placement | side | castling |
// rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq
//
// En passant square and move counters are not part of the key.
