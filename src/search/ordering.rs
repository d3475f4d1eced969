use crate::board::{legal_moves, Board, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidate moves for a node. When `shuffle` is set the legal moves are
/// Fisher-Yates shuffled once, so ties among equally good moves break
/// uniformly at random; otherwise they come in row-major order.
pub fn ordered_moves<R: Rng + ?Sized>(board: &Board, rng: &mut R, shuffle: bool) -> Vec<Position> {
    let mut moves = legal_moves(board);
    if shuffle { moves.shuffle(rng); }
    moves
}
