use chess::{ChessMove, File, Piece, Rank, Square};

use super::PositionError;

/// Parses a move in long algebraic notation (`e2e4`, `e7e8q`).
///
/// Only the notation is checked here. Whether the move is legal depends on a
/// position, see [`super::Position::make_move`].
pub fn parse_uci(text: &str) -> Result<ChessMove, PositionError> {
    let invalid = || PositionError::InvalidUci(text.to_string());
    let bytes = text.as_bytes();

    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(invalid());
    }

    let source = parse_square(bytes[0], bytes[1]).ok_or_else(invalid)?;
    let dest = parse_square(bytes[2], bytes[3]).ok_or_else(invalid)?;
    let promotion = match bytes.get(4) {
        None => None,
        Some(&c) => Some(promotion_piece(c).ok_or_else(invalid)?),
    };

    Ok(ChessMove::new(source, dest, promotion))
}

/// Renders a move in long algebraic notation, promotion letter in lowercase.
pub fn to_uci(mv: ChessMove) -> String {
    let mut uci = String::with_capacity(5);
    push_square(&mut uci, mv.get_source());
    push_square(&mut uci, mv.get_dest());

    if let Some(piece) = mv.get_promotion() {
        uci.push(match piece {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            // Never produced by move generation
            Piece::Pawn => 'p',
            Piece::King => 'k',
        });
    }

    uci
}

fn push_square(out: &mut String, square: Square) {
    out.push((b'a' + square.get_file().to_index() as u8) as char);
    out.push((b'1' + square.get_rank().to_index() as u8) as char);
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}

fn promotion_piece(c: u8) -> Option<Piece> {
    match c.to_ascii_lowercase() {
        b'q' => Some(Piece::Queen),
        b'r' => Some(Piece::Rook),
        b'b' => Some(Piece::Bishop),
        b'n' => Some(Piece::Knight),
        _ => None,
    }
}
