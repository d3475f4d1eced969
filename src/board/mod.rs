use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod outcome;

pub use outcome::{is_terminal, outcome, utility, winner, Outcome, Utility, LINES};

pub const SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A (row, col) coordinate. Not range-checked on construction; `apply_move`
/// rejects positions that fall off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    pub fn is_on_board(&self) -> bool { self.row < SIZE && self.col < SIZE }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParsePosition { input: s.to_string() };
        let mut parts = s.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
        let row = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(err)?;
        let col = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(err)?;
        if parts.next().is_some() { return Err(err()); }
        Ok(Position::new(row, col))
    }
}

/// A 3x3 grid. Boards are values: every move yields a new board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// The empty starting grid.
pub fn initial_state() -> Board { Board::default() }

/// Side to move, inferred from mark counts. Equal counts mean X.
pub fn turn_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) { Mark::O } else { Mark::X }
}

/// Every empty position, in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::all().filter(|&p| board.cells[p.row][p.col] == Cell::Empty).collect()
}

/// Place the side-to-move's mark at `position`, returning the new board.
pub fn apply_move(board: &Board, position: Position) -> Result<Board> {
    if !position.is_on_board() || board.cells[position.row][position.col] != Cell::Empty {
        return Err(Error::InvalidMove { position, board: *board });
    }
    let mut next = *board;
    next.cells[position.row][position.col] = turn_to_move(board).to_cell();
    Ok(next)
}

impl Board {
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] { &self.cells }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.is_on_board() { Some(self.cells[position.row][position.col]) } else { None }
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    pub fn is_full(&self) -> bool { self.cells.iter().flatten().all(|&c| c != Cell::Empty) }

    pub fn side_to_move(&self) -> Mark { turn_to_move(self) }

    pub fn legal_moves(&self) -> Vec<Position> { legal_moves(self) }

    pub fn apply_move(&self, position: Position) -> Result<Board> { apply_move(self, position) }

    pub fn outcome(&self) -> Outcome { outcome(self) }

    pub fn is_terminal(&self) -> bool { is_terminal(self) }

    pub fn utility(&self) -> Result<Utility> { utility(self) }

    /// Three-line grid for console output.
    pub fn pretty(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == Cell::Empty { ' ' } else { c.to_char() })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

/// Compact one-line notation, e.g. `XX./OO./...`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 { write!(f, "/")?; }
            for c in row { write!(f, "{}", c.to_char())?; }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fail = |reason: String| Error::ParseBoard { input: s.to_string(), reason };
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(fail(format!("expected {SIZE} rows, got {}", rows.len())));
        }
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != SIZE {
                return Err(fail(format!("row {r} has {} cells", chars.len())));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r][c] = Cell::from_char(ch).ok_or_else(|| fail(format!("unknown cell '{ch}'")))?;
            }
        }
        Ok(Board { cells })
    }
}
