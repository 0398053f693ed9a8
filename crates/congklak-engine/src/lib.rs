//! Evaluation and minimax move selection for Congklak.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::{Algorithm, SelectorConfig};
pub use error::ConfigError;
pub use eval::{EvalWeights, Evaluator, Score, StoreDifference, Weighted, evaluate};
pub use search::{BaselineMinimax, Minimax, MoveSelector, SearchResult, WeightedMinimax};
