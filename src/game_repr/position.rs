use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square};
use smallvec::SmallVec;
use thiserror::Error;

use super::moves::{parse_uci, to_uci};

/// Errors reported by the rules adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("invalid move notation `{0}`")]
    InvalidUci(String),

    #[error("move {mv} is not legal in `{fen}`")]
    IllegalMove { mv: String, fen: String },
}

/// How the game stands in a position, from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    /// Neither side can possibly deliver mate
    InsufficientMaterial,
}

/// Buffer for the moves of one node. Typical positions fit inline.
pub type MoveList = SmallVec<[ChessMove; 64]>;

/// A chess position that can be mutated in place and restored.
///
/// Every [`make_move`](Self::make_move) pushes the previous board on an undo
/// stack and every [`unmake_move`](Self::unmake_move) pops it, so a search can
/// walk the tree on a single instance.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Boards before each applied move, oldest first
    undo_stack: Vec<(Board, ChessMove)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, PositionError> {
        let board = Board::from_str(fen.trim()).map_err(|e| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Position {
        Self {
            board,
            undo_stack: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// +1 when White is to move, -1 when Black is
    pub fn color_sign(&self) -> i32 {
        match self.side_to_move() {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Number of moves currently applied on top of the initial board.
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((color, piece))
    }

    /// Piece on the square addressed the way the evaluation tables are:
    /// `rank_from_top` 0 is rank 8, `file` 0 is the a-file.
    pub fn piece_at_coords(&self, rank_from_top: usize, file: usize) -> Option<(Color, Piece)> {
        let square = Square::make_square(Rank::from_index(7 - rank_from_top), File::from_index(file));
        self.piece_at(square)
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Generate legal moves into a provided buffer. The buffer is cleared first.
    pub fn legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        moves.extend(MoveGen::new_legal(&self.board));
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Applies a legal move and records how to take it back.
    ///
    /// An illegal move leaves the position untouched and is reported as an
    /// error; the caller is expected to treat it as a bug upstream.
    pub fn make_move(&mut self, mv: ChessMove) -> Result<(), PositionError> {
        if !self.board.legal(mv) {
            return Err(PositionError::IllegalMove {
                mv: to_uci(mv),
                fen: self.to_fen(),
            });
        }

        let next = self.board.make_move_new(mv);
        self.undo_stack.push((self.board, mv));
        self.board = next;
        Ok(())
    }

    /// Parses a move in long algebraic notation and applies it.
    pub fn make_uci_move(&mut self, uci: &str) -> Result<ChessMove, PositionError> {
        let mv = parse_uci(uci)?;
        self.make_move(mv)?;
        Ok(mv)
    }

    /// Takes back the last applied move and returns it.
    /// Returns `None` when nothing has been applied.
    pub fn unmake_move(&mut self) -> Option<ChessMove> {
        let (previous, mv) = self.undo_stack.pop()?;
        self.board = previous;
        Some(mv)
    }

    pub fn is_in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    /// Returns true if the move takes a piece, en passant included
    pub fn is_capture(&self, mv: ChessMove) -> bool {
        if self.board.piece_on(mv.get_dest()).is_some() {
            return true;
        }

        // A pawn changing file onto an empty square can only be en passant
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }

    /// Returns true if the move leaves the opponent in check
    pub fn gives_check(&self, mv: ChessMove) -> bool {
        self.board.make_move_new(mv).checkers().popcnt() > 0
    }

    pub fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate,
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing if self.has_insufficient_material() => {
                GameStatus::InsufficientMaterial
            }
            BoardStatus::Ongoing => GameStatus::Ongoing,
        }
    }

    /// Returns true if the game is over in this position
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// Bare kings, a single minor piece, or bishops that all stand on one
    /// square colour.
    pub fn has_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = board.pieces(Piece::Pawn).popcnt()
            + board.pieces(Piece::Rook).popcnt()
            + board.pieces(Piece::Queen).popcnt();
        if heavy > 0 {
            return false;
        }

        let knights = board.pieces(Piece::Knight).popcnt();
        let bishops = *board.pieces(Piece::Bishop);
        if knights + bishops.popcnt() <= 1 {
            return true;
        }
        if knights > 0 {
            return false;
        }

        let mut shades = bishops.map(|sq| (sq.get_rank().to_index() + sq.get_file().to_index()) % 2);
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }

    /// Canonical key used to address the opening book:
    /// piece placement, side to move and castling rights.
    pub fn key(&self) -> String {
        let mut key = self.placement();

        key.push(' ');
        key.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        key.push(' ');
        let mut castling = String::new();
        for (color, kingside, queenside) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let rights = self.board.castle_rights(color);
            if rights.has_kingside() {
                castling.push(kingside);
            }
            if rights.has_queenside() {
                castling.push(queenside);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        key.push_str(&castling);

        key
    }

    /// Piece placement field of the FEN, rank 8 first.
    pub fn placement(&self) -> String {
        let mut placement = String::with_capacity(72);

        for rank_from_top in 0..8 {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.piece_at_coords(rank_from_top, file) {
                    None => empty_count += 1,
                    Some((color, piece)) => {
                        if empty_count > 0 {
                            placement.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        placement.push(piece_char(color, piece));
                    }
                }
            }

            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if rank_from_top < 7 {
                placement.push('/');
            }
        }

        placement
    }

    /// Full FEN of the current board
    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate the make/unmake discipline against known node counts
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();

        // Bulk counting at depth 1
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.undo_stack.push((self.board, mv));
            self.board = self.board.make_move_new(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }

        nodes
    }
}

fn piece_char(color: Color, piece: Piece) -> char {
    let c = match piece {
        Piece::King => 'k',
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        Piece::Pawn => 'p',
    };

    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
