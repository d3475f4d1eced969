use crate::board::{Board, Position};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Out-of-range position or an occupied target cell.
    #[error("invalid move {position} on board {board}")]
    InvalidMove { position: Position, board: Board },

    #[error("utility requested for non-terminal board {board}")]
    NotTerminal { board: Board },

    #[error("cannot parse board '{input}': {reason}")]
    ParseBoard { input: String, reason: String },

    #[error("cannot parse position '{input}' (expected 'row,col')")]
    ParsePosition { input: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
