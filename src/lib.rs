//! Chess move search: negamax with alpha-beta pruning, a material and
//! piece-square table evaluator, and an opening book consulted at every node.

pub mod agent;
pub mod config;
pub mod game_repr;

pub use agent::ai::{find_best_move, EngineError, MoveSource, OpeningBook, SearchResult};
pub use config::{ConfigError, EngineConfig};
