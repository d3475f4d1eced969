use crate::board::{legal_moves, outcome, Board, Outcome};
use rayon::prelude::*;
use serde::Serialize;

/// Move sequences of length `depth`; a game that ends early counts as one leaf.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 || board.is_terminal() { return 1; }
    let mut nodes = 0u64;
    for m in legal_moves(board) {
        if let Ok(child) = board.apply_move(m) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Root-split perft across the rayon pool.
pub fn perft_parallel(board: &Board, depth: u32) -> u64 {
    if depth == 0 || board.is_terminal() { return 1; }
    legal_moves(board)
        .par_iter()
        .filter_map(|&m| board.apply_move(m).ok())
        .map(|child| perft(&child, depth - 1))
        .sum()
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameTally {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameTally {
    pub fn total(&self) -> u64 { self.x_wins + self.o_wins + self.draws }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    fn merge(self, other: GameTally) -> GameTally {
        GameTally {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}

/// Outcomes of every complete game reachable from `board`.
pub fn tally_games(board: &Board) -> GameTally {
    let result = outcome(board);
    if result != Outcome::InProgress {
        let mut t = GameTally::default();
        t.record(result);
        return t;
    }
    legal_moves(board)
        .into_iter()
        .filter_map(|m| board.apply_move(m).ok())
        .map(|child| tally_games(&child))
        .fold(GameTally::default(), GameTally::merge)
}
