use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a position from a FEN that is known to be valid
pub fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN should parse")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[ChessMove], uci: &str) -> bool {
    moves.iter().any(|m| to_uci(*m) == uci)
}

/// Helper function to play a sequence of moves given in long algebraic notation
pub fn play(pos: &mut Position, line: &[&str]) {
    for uci in line {
        pos.make_uci_move(uci).expect("test line should be legal");
    }
}

// ==================== TEST MODULES ====================
