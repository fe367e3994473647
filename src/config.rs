//! Engine configuration.
//!
//! An [`EngineConfig`] names the search depth and the opening book files.
//! It is validated and turned into a ready engine by
//! [`NegamaxPlayer::new`](crate::agent::ai::NegamaxPlayer::new).

use std::path::PathBuf;

use thiserror::Error;

use crate::agent::ai::{BookError, Difficulty, DEFAULT_DEPTH, MAX_SEARCH_DEPTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("search depth {depth} is outside 1..={max}")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("unknown difficulty `{0}` (expected easy, medium, hard or expert)")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Book(#[from] BookError),
}

/// Settings for one engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Opening book files; later files override earlier ones
    pub book_paths: Vec<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            book_paths: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Configuration searching to the depth of a difficulty preset.
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::default().with_depth(difficulty.max_depth())
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Append a book file. Files added later take precedence.
    pub fn with_book(mut self, path: impl Into<PathBuf>) -> Self {
        self.book_paths.push(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::InvalidDepth {
                depth: self.depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 8);
        assert!(config.book_paths.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_depth(3)
            .with_book("a.book")
            .with_book("b.book");

        assert_eq!(config.depth, 3);
        assert_eq!(config.book_paths, vec![PathBuf::from("a.book"), PathBuf::from("b.book")]);
    }

    #[test]
    fn test_from_difficulty() {
        assert_eq!(EngineConfig::from_difficulty(Difficulty::Hard).depth, 6);
    }

    #[test]
    fn test_invalid_depth() {
        assert!(matches!(
            EngineConfig::default().with_depth(0).validate(),
            Err(ConfigError::InvalidDepth { depth: 0, .. })
        ));
        assert!(EngineConfig::default().with_depth(MAX_SEARCH_DEPTH).validate().is_ok());
        assert!(EngineConfig::default().with_depth(MAX_SEARCH_DEPTH + 1).validate().is_err());
    }
}
