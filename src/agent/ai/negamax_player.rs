//! NegamaxPlayer - Classical chess AI using Negamax with Alpha-Beta pruning
//!
//! The player owns an opening book and a search depth and answers one
//! question: which move to play in a given position. The book is loaded once
//! when the player is built and shared by every search it runs.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 4
//! - **Hard**: Depth 6
//! - **Expert**: Depth 8
//!
//! # Examples
//!
//! ```no_run
//! use catmate::agent::ai::{Difficulty, NegamaxPlayer};
//! use catmate::config::EngineConfig;
//!
//! let config = EngineConfig::from_difficulty(Difficulty::Medium).with_book("openings.book");
//! let player = NegamaxPlayer::new(config)?;
//! let result = player.best_move("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
//! println!("{}", result.uci().unwrap_or_else(|| "(none)".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::str::FromStr;

use log::info;
use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::game_repr::{Position, PositionError};
use super::opening_book::OpeningBook;
use super::search::{find_best_move, SearchResult};
use super::negamax::SearchError;

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Easy difficulty: Depth 2
    Easy,

    /// Medium difficulty: Depth 4
    Medium,

    /// Hard difficulty: Depth 6
    Hard,

    /// Expert difficulty: Depth 8
    Expert,
}

impl Difficulty {
    /// Get the maximum search depth for this difficulty level
    ///
    /// Returns the number of plies (half-moves) to search.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Errors from asking a player for a move
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// AI Player that uses Negamax algorithm with alpha-beta pruning
///
/// Deterministic: the same position and book always yield the same move.
pub struct NegamaxPlayer {
    book: OpeningBook,
    depth: u8,
}

impl NegamaxPlayer {
    /// Validate `config` and load its opening books.
    ///
    /// Fails before any search if a book file cannot be read.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let book = OpeningBook::from_files(&config.book_paths)?;
        info!("engine ready: depth {}, {} book entries", config.depth, book.len());
        Ok(Self::with_book(config, book))
    }

    /// Build a player around an already loaded book.
    /// `config.book_paths` is ignored.
    pub fn with_book(config: EngineConfig, book: OpeningBook) -> Self {
        Self {
            book,
            depth: config.depth,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Choose a move for the position given as FEN.
    pub fn best_move(&self, fen: &str) -> Result<SearchResult, EngineError> {
        let pos = Position::from_fen(fen)?;
        self.best_move_for(&pos)
    }

    pub fn best_move_for(&self, pos: &Position) -> Result<SearchResult, EngineError> {
        Ok(find_best_move(pos, self.depth, &self.book)?)
    }
}
