use super::{legal_moves, Board, Mark, Position};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows, columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::XWins => "x-wins",
            Outcome::OWins => "o-wins",
            Outcome::Draw => "draw",
            Outcome::InProgress => "in-progress",
        };
        write!(f, "{s}")
    }
}

/// Value of a finished game from X's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Utility {
    OWins = -1,
    Draw = 0,
    XWins = 1,
}

impl Utility {
    pub fn score(self) -> i32 { self as i32 }
}

/// The mark holding three in a row, if any. The first matching line wins.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|[a, b, c]| {
        let first = cells[a.row][a.col];
        if first == cells[b.row][b.col] && first == cells[c.row][c.col] { first.mark() } else { None }
    })
}

pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::X) => Outcome::XWins,
        Some(Mark::O) => Outcome::OWins,
        None if legal_moves(board).is_empty() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

pub fn is_terminal(board: &Board) -> bool { outcome(board) != Outcome::InProgress }

/// Fails with `NotTerminal` while the game is still in progress.
pub fn utility(board: &Board) -> Result<Utility> {
    match outcome(board) {
        Outcome::XWins => Ok(Utility::XWins),
        Outcome::OWins => Ok(Utility::OWins),
        Outcome::Draw => Ok(Utility::Draw),
        Outcome::InProgress => Err(Error::NotTerminal { board: *board }),
    }
}
