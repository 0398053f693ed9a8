//! Core Congklak types: board representation, move generation, and game rules.

mod board;
mod error;
mod make_move;
mod movegen;
mod moves;
mod notation;
pub mod perft;
mod player;
mod status;

pub use board::{BoardState, DEFAULT_HOLES, DEFAULT_SEEDS, MAX_CELLS, MAX_HOLES, PrettyBoard};
pub use error::{BoardError, IllegalMoveError, NotationError};
pub use make_move::MAX_RELAY_LEGS;
pub use movegen::generate_legal_moves;
pub use moves::{Move, MoveList};
pub use notation::STARTING_NOTATION;
pub use player::Player;
pub use status::GameStatus;
