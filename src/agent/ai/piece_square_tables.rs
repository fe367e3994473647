// Piece-square tables for positional evaluation
// Values are added raw on top of material (pawn = 1), so they dominate it
// The values are the usual a1-first tables with their row order reversed:
// rows are stored rank 8 first, and White indexes them as
// rank_from_top * 8 + file. Black reads the vertically mirrored square, so
// Black sees the listed values in their usual a1-first order. White and Black
// stay exact mirror images and the starting position scores 0.

use crate::game_repr::{Color, Piece};

// Pawn position values - encourage advancement and central control
#[rustfmt::skip]
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
    10, 20, 30, 40, 40, 30, 20, 10,  // Rank 6
     5, 10, 20, 30, 30, 20, 10,  5,  // Rank 5
     0,  5, 10, 25, 25, 10,  5,  0,  // Rank 4
     0, 10, 10, 20, 20, 10, 10,  0,  // Rank 3
     0, 10, -5,  0,  0, -5, 10,  0,  // Rank 2
     0,  5,  5,-10,-10,  5,  5,  0,  // Rank 1
];

// Knight position values - prefer center squares
#[rustfmt::skip]
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 8
    -40,-20,  0,  5,  5,  0,-20,-40,  // Rank 7
    -30,  5, 10, 15, 15, 10,  5,-30,  // Rank 6
    -30,  0, 15, 20, 20, 15,  0,-30,  // Rank 5
    -30,  5, 15, 20, 20, 15,  5,-30,  // Rank 4
    -30,  0, 10, 15, 15, 10,  0,-30,  // Rank 3
    -40,-20,  0,  0,  0,  0,-20,-40,  // Rank 2
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 1
];

// Bishop position values - prefer center and long diagonals
#[rustfmt::skip]
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 8
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -10,  0,  5, 10, 10,  5,  0,-10,  // Rank 6
    -10,  5,  5, 10, 10,  5,  5,-10,  // Rank 5
    -10,  0, 10, 10, 10, 10,  0,-10,  // Rank 4
    -10, 10, 10, 10, 10, 10, 10,-10,  // Rank 3
    -10,  5,  0,  0,  0,  0,  5,-10,  // Rank 2
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 1
];

// Rook position values - prefer 7th rank
#[rustfmt::skip]
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
     5, 10, 10, 10, 10, 10, 10,  5,  // Rank 7 (7th rank bonus)
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 6
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 5
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 4
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 3
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 2
     0,  0,  0,  5,  5,  0,  0,  0,  // Rank 1
];

// Queen position values - slight central preference
#[rustfmt::skip]
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 8
    -10,  0,  5,  0,  0,  0,  0,-10,  // Rank 7
    -10,  5,  5,  5,  5,  5,  0,-10,  // Rank 6
      0,  0,  5,  5,  5,  5,  0, -5,  // Rank 5
     -5,  0,  5,  5,  5,  5,  0, -5,  // Rank 4
    -10,  0,  5,  5,  5,  5,  0,-10,  // Rank 3
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 2
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 1
];

// King opening position values - prefer safety on back rank
#[rustfmt::skip]
pub const KING_OPENING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 8
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 7
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 6
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 5
    -20,-30,-30,-40,-40,-30,-30,-20,  // Rank 4
    -10,-20,-20,-20,-20,-20,-20,-10,  // Rank 3
     20, 20,  0,  0,  0,  0, 20, 20,  // Rank 2
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
];

// King endgame position values - prefer center activity
#[rustfmt::skip]
pub const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,  // Rank 8
    -30,-20,-20,  0,  0,-20,-20,-30,  // Rank 7
    -30,-10, 20, 30, 30, 20,-10,-30,  // Rank 6
    -30,-10, 30, 40, 40, 30,-10,-30,  // Rank 5
    -30,-10, 30, 40, 40, 30,-10,-30,  // Rank 4
    -30,-10, 20, 30, 30, 20,-10,-30,  // Rank 3
    -30,-30,  0,  0,  0,  0,-30,-30,  // Rank 2
    -50,-30,-30,-30,-30,-30,-30,-50,  // Rank 1
];

/// Index into a table for a piece of `color` standing on
/// (`rank_from_top`, `file`). Black reads the vertically mirrored square.
pub fn table_index(color: Color, rank_from_top: usize, file: usize) -> usize {
    match color {
        Color::White => rank_from_top * 8 + file,
        Color::Black => (7 - rank_from_top) * 8 + file,
    }
}

/// Get piece-square table value for a piece on the given square
/// The king reads the endgame table once the endgame has been reached
pub fn get_pst_value(piece: Piece, color: Color, rank_from_top: usize, file: usize, is_endgame: bool) -> i32 {
    let idx = table_index(color, rank_from_top, file);

    match piece {
        Piece::Pawn => PAWN_TABLE[idx],
        Piece::Knight => KNIGHT_TABLE[idx],
        Piece::Bishop => BISHOP_TABLE[idx],
        Piece::Rook => ROOK_TABLE[idx],
        Piece::Queen => QUEEN_TABLE[idx],
        Piece::King => {
            if is_endgame {
                KING_ENDGAME_TABLE[idx]
            } else {
                KING_OPENING_TABLE[idx]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (rank_from_top, file) of a few squares
    const D2: (usize, usize) = (6, 3);
    const D4: (usize, usize) = (4, 3);
    const D7: (usize, usize) = (1, 3);
    const A1: (usize, usize) = (7, 0);
    const G1: (usize, usize) = (7, 6);

    #[test]
    fn test_pawn_prefers_advancement() {
        // Pawns on rank 7 should be worth more than pawns on rank 2
        let white_pawn_rank2 = get_pst_value(Piece::Pawn, Color::White, D2.0, D2.1, false);
        let white_pawn_rank7 = get_pst_value(Piece::Pawn, Color::White, D7.0, D7.1, false);
        assert!(white_pawn_rank7 > white_pawn_rank2);
    }

    #[test]
    fn test_knight_prefers_center() {
        let knight_center = get_pst_value(Piece::Knight, Color::White, D4.0, D4.1, false);
        let knight_edge = get_pst_value(Piece::Knight, Color::White, A1.0, A1.1, false);
        assert!(knight_center > knight_edge);
    }

    #[test]
    fn test_king_safety_in_opening() {
        let king_back_rank = get_pst_value(Piece::King, Color::White, G1.0, G1.1, false);
        let king_center = get_pst_value(Piece::King, Color::White, D4.0, D4.1, false);
        assert!(king_back_rank > king_center);
    }

    #[test]
    fn test_king_activity_in_endgame() {
        let king_back_rank = get_pst_value(Piece::King, Color::White, G1.0, G1.1, true);
        let king_center = get_pst_value(Piece::King, Color::White, D4.0, D4.1, true);
        assert!(king_center > king_back_rank);
    }

    #[test]
    fn test_black_pieces_flipped() {
        // White pawn on d2 should have same value as Black pawn on d7
        for piece in [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            let white = get_pst_value(piece, Color::White, D2.0, D2.1, false);
            let black = get_pst_value(piece, Color::Black, D7.0, D7.1, false);
            assert_eq!(white, black, "{:?} tables should mirror", piece);
        }
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(table_index(Color::White, 0, 0), 0); // a8
        assert_eq!(table_index(Color::White, 7, 7), 63); // h1
        assert_eq!(table_index(Color::Black, 7, 7), 7); // h1 seen from Black is h8
    }
}
