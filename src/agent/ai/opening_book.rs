// Opening book: precomputed position -> move table
//
// Sources are plain text, one `<key> : <move>` entry per line, where the key
// is the canonical position key (placement, side to move, castling rights).
// A book is built once and only read afterwards; the search borrows it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::game_repr::Position;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read opening book {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable mapping from position key to book move (UCI notation)
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, String>,
}

impl OpeningBook {
    /// A book with no entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a book from the text of one or more sources.
    /// Later sources override earlier ones on duplicate keys.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut book = Self::empty();
        for source in sources {
            book.merge_source(source.as_ref());
        }
        book
    }

    /// Read and merge book files in order. Any unreadable file aborts the load.
    pub fn from_files<I, P>(paths: I) -> Result<Self, BookError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut book = Self::empty();

        for path in paths {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|source| BookError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            let added = book.merge_source(&text);
            info!("loaded {} book entries from {}", added, path.display());
        }

        Ok(book)
    }

    /// Alias of [`from_files`](Self::from_files)
    pub fn load<I, P>(paths: I) -> Result<Self, BookError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::from_files(paths)
    }

    /// Parse one source into the book and return how many entries it supplied
    fn merge_source(&mut self, text: &str) -> usize {
        let mut added = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('*') || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                debug!("book line {}: no separator, skipped", line_no + 1);
                continue;
            };

            let key = key.trim();
            // Only the first listed move is played
            let Some(mv) = value.split_whitespace().next() else {
                debug!("book line {}: empty move, skipped", line_no + 1);
                continue;
            };
            if key.is_empty() {
                debug!("book line {}: empty key, skipped", line_no + 1);
                continue;
            }

            self.entries.insert(key.to_string(), mv.to_string());
            added += 1;
        }

        added
    }

    /// Exact lookup by canonical key
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn lookup_position(&self, pos: &Position) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.lookup(&pos.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const START_KEY: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq";

    #[test]
    fn test_parse_basic_entry() {
        let book = OpeningBook::from_sources([format!("{} : e2e4\n", START_KEY)]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(START_KEY), Some("e2e4"));
        assert_eq!(book.lookup_position(&Position::default()), Some("e2e4"));
    }

    #[test]
    fn test_skips_malformed_lines() {
        let text = format!(
            "\n* comment line\n# another comment\nno separator here\n : e2e4\n{} :   \n{}:d2d4\n",
            START_KEY, START_KEY
        );
        let book = OpeningBook::from_sources([text]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(START_KEY), Some("d2d4"));
    }

    #[test]
    fn test_first_move_of_list_wins() {
        let book = OpeningBook::from_sources([format!("{} : g1f3 e2e4 d2d4", START_KEY)]);
        assert_eq!(book.lookup(START_KEY), Some("g1f3"));
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let book = OpeningBook::from_sources(["some key : e2e4:extra"]);
        assert_eq!(book.lookup("some key"), Some("e2e4:extra"));
    }

    #[test]
    fn test_later_source_overrides() {
        let first = format!("{} : e2e4\nother : a2a3", START_KEY);
        let second = format!("{} : c2c4", START_KEY);
        let book = OpeningBook::from_sources([first, second]);

        assert_eq!(book.len(), 2);
        assert_eq!(book.lookup(START_KEY), Some("c2c4"));
        assert_eq!(book.lookup("other"), Some("a2a3"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let book = OpeningBook::from_sources([format!("{} : e2e4", START_KEY)]);
        assert_eq!(book.lookup(&format!("{} -", START_KEY)), None);
        assert_eq!(book.lookup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq"), None);
    }

    #[test]
    fn test_empty_book() {
        let book = OpeningBook::empty();
        assert!(book.is_empty());
        assert_eq!(book.lookup_position(&Position::default()), None);
    }

    #[test]
    fn test_from_files_in_order() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "{} : e2e4", START_KEY).unwrap();
        writeln!(b, "{} : d2d4", START_KEY).unwrap();

        let book = OpeningBook::from_files([a.path(), b.path()]).unwrap();
        assert_eq!(book.lookup(START_KEY), Some("d2d4"));

        let book = OpeningBook::load([b.path(), a.path()]).unwrap();
        assert_eq!(book.lookup(START_KEY), Some("e2e4"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.book");

        let err = OpeningBook::from_files([&missing]).unwrap_err();
        match err {
            BookError::Io { ref path, .. } => assert_eq!(path, &missing),
        }
        assert!(err.to_string().contains("missing.book"));
    }
}
