// Tic-tac-toe engine: board model + minimax/alpha-beta search
pub mod board;
pub mod error;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{apply_move, initial_state, legal_moves, turn_to_move, Board, Cell, Mark, Outcome, Position};
pub use error::{Error, Result};
pub use search::best_move;
