pub mod ai;
pub use ai::{Difficulty, NegamaxPlayer, SearchResult};
