use crate::board::{turn_to_move, utility, Board, Mark, Position};
use crate::error::Result;
use crate::search::ordering::ordered_moves;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// Bounds sit outside the utility range {-1, 0, 1}.
const UNBOUNDED_HIGH: i32 = i32::MAX;
const UNBOUNDED_LOW: i32 = i32::MIN;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Seed for the tie-breaking shuffle; entropy when `None`.
    pub seed: Option<u64>,
    pub shuffle_moves: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { seed: None, shuffle_moves: true } }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<Position>,
    pub score: i32,
    pub nodes: u64,
}

/// Which way a node optimizes: X maximizes utility, O minimizes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Side::Max,
            Mark::O => Side::Min,
        }
    }

    fn opponent(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// Starting value before any child is seen.
    fn worst(self) -> i32 {
        match self {
            Side::Max => UNBOUNDED_LOW,
            Side::Min => UNBOUNDED_HIGH,
        }
    }

    /// Strict: a later tie never replaces the first move found.
    fn improves(self, candidate: i32, current: i32) -> bool {
        match self {
            Side::Max => candidate > current,
            Side::Min => candidate < current,
        }
    }

    /// The parent already holds `bound`; once `value` reaches it the parent
    /// will never choose this node.
    fn cutoff(self, value: i32, bound: i32) -> bool {
        match self {
            Side::Max => value >= bound,
            Side::Min => value <= bound,
        }
    }
}

pub struct Searcher {
    rng: SmallRng,
    shuffle_moves: bool,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { rng, shuffle_moves: params.shuffle_moves, nodes: 0 }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(SearchParams { seed: Some(seed), ..SearchParams::default() })
    }

    /// Non-terminal nodes entered during the last search.
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn best_move(&mut self, board: &Board) -> Result<Option<Position>> {
        Ok(self.search(board)?.bestmove)
    }

    pub fn search(&mut self, board: &Board) -> Result<SearchResult> {
        self.nodes = 0;
        if board.is_terminal() {
            return Ok(SearchResult { bestmove: None, score: utility(board)?.score(), nodes: 0 });
        }
        let side = Side::for_mark(turn_to_move(board));
        let (score, bestmove) = self.minimax(board, side, side.opponent().worst())?;
        debug!("search {} side={:?} best={:?} score={} nodes={}", board, side, bestmove, score, self.nodes);
        Ok(SearchResult { bestmove, score, nodes: self.nodes })
    }

    fn minimax(&mut self, board: &Board, side: Side, bound: i32) -> Result<(i32, Option<Position>)> {
        if board.is_terminal() { return Ok((utility(board)?.score(), None)); }
        self.nodes += 1;

        let moves = ordered_moves(board, &mut self.rng, self.shuffle_moves);
        let mut value = side.worst();
        let mut best: Option<Position> = None;
        for m in moves {
            if side.cutoff(value, bound) { break; }
            let child = board.apply_move(m)?;
            let (score, _) = self.minimax(&child, side.opponent(), value)?;
            if side.improves(score, value) { value = score; best = Some(m); }
        }
        Ok((value, best))
    }
}

/// Optimal move for the side to move, or `None` on a finished board.
/// Uses a fresh entropy-seeded searcher.
pub fn best_move(board: &Board) -> Result<Option<Position>> {
    Searcher::default().best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_comparisons_are_strict() {
        assert!(!Side::Max.improves(0, 0));
        assert!(Side::Max.improves(1, 0));
        assert!(!Side::Min.improves(0, 0));
        assert!(Side::Min.improves(-1, 0));
    }

    #[test]
    fn cutoff_never_fires_at_root_bound() {
        assert!(!Side::Max.cutoff(1, Side::Min.worst()));
        assert!(!Side::Min.cutoff(-1, Side::Max.worst()));
        assert!(Side::Max.cutoff(0, 0));
        assert!(Side::Min.cutoff(-1, 0));
    }

    #[test]
    fn single_move_still_counts_a_node() {
        let board: Board = "XOX/XOO/OX.".parse().unwrap();
        let mut s = Searcher::with_seed(3);
        let r = s.search(&board).unwrap();
        assert_eq!(r.bestmove, Some(Position::new(2, 2)));
        assert_eq!(r.nodes, 1);
    }
}
