// Position evaluation function
// Returns score in material units (positive = good for side to move)

use crate::game_repr::{Color, Piece, Position};
use super::piece_square_tables::get_pst_value;

// Material values in pawns
const PAWN_VALUE: i32 = 1;
const KNIGHT_VALUE: i32 = 3;
const BISHOP_VALUE: i32 = 3;
const ROOK_VALUE: i32 = 5;
const QUEEN_VALUE: i32 = 9;
const KING_VALUE: i32 = 1000;

/// At or below this many non-king pieces on the board the king
/// switches to its endgame table
pub const ENDGAME_PIECE_THRESHOLD: u32 = 12;

/// Get material value for a piece type
pub fn material_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// Determine if position is in endgame phase
/// Counts every piece of either colour except the kings
pub fn is_endgame(pos: &Position) -> bool {
    let board = pos.board();
    let pieces = board.combined().popcnt() - board.pieces(Piece::King).popcnt();
    pieces <= ENDGAME_PIECE_THRESHOLD
}

/// Material and piece-square score from White's point of view
pub fn raw_score(pos: &Position) -> i32 {
    let is_endgame = is_endgame(pos);
    let mut score = 0;

    for rank_from_top in 0..8 {
        for file in 0..8 {
            let Some((color, piece)) = pos.piece_at_coords(rank_from_top, file) else {
                continue;
            };

            let value = material_value(piece)
                + get_pst_value(piece, color, rank_from_top, file, is_endgame);

            match color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }

    score
}

/// Evaluate position from the perspective of the side to move
pub fn evaluate(pos: &Position) -> i32 {
    let score = raw_score(pos);

    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_is_equal() {
        let pos = Position::default();
        assert_eq!(evaluate(&pos), 0);
        assert_eq!(raw_score(&pos), 0);
    }

    #[test]
    fn test_material_values() {
        assert_eq!(material_value(Piece::Pawn), 1);
        assert_eq!(material_value(Piece::Knight), material_value(Piece::Bishop));
        assert_eq!(material_value(Piece::Queen), 9);
        assert_eq!(material_value(Piece::King), 1000);
    }

    #[test]
    fn test_perspective_matters() {
        let white = Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let black = Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&white), -evaluate(&black));
        assert!(evaluate(&white) > 0);
    }

    #[test]
    fn test_endgame_detection() {
        // Position with only kings and pawns (endgame)
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(is_endgame(&pos));

        // Starting position (not endgame)
        assert!(!is_endgame(&Position::default()));
    }

    #[test]
    fn test_endgame_threshold_is_inclusive() {
        // Twelve pawns and two kings
        let twelve = Position::from_fen("4k3/pppppp2/8/8/8/8/PPPPPP2/4K3 w - - 0 1").unwrap();
        assert!(is_endgame(&twelve));

        let thirteen = Position::from_fen("4k3/ppppppp1/8/8/8/8/PPPPPP2/4K3 w - - 0 1").unwrap();
        assert!(!is_endgame(&thirteen));
    }
}
