use pretty_assertions::assert_eq;
use std::collections::HashSet;
use tttbot::board::{initial_state, is_terminal, legal_moves, Board, Mark, Position};
use tttbot::search::{best_move, SearchParams, Searcher};

fn board(s: &str) -> Board { s.parse().expect("valid board") }

// Plain minimax without pruning, X maximizing.
fn reference_value(b: &Board) -> i32 {
    if let Ok(u) = b.utility() { return u.score(); }
    let values = legal_moves(b).into_iter().map(|m| reference_value(&b.apply_move(m).unwrap()));
    if b.side_to_move() == Mark::X { values.max().unwrap() } else { values.min().unwrap() }
}

fn reachable_with_marks(min_marks: usize) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) || b.is_terminal() { continue; }
        for m in legal_moves(&b) { stack.push(b.apply_move(m).unwrap()); }
    }
    seen.into_iter().filter(|b| 9 - legal_moves(b).len() >= min_marks).collect()
}

#[test]
fn completes_three_in_a_row() {
    let b = board("XX./OO./...");
    for seed in 0..32u64 {
        let mut s = Searcher::with_seed(seed);
        assert_eq!(s.best_move(&b).unwrap(), Some(Position::new(0, 2)), "seed {seed}");
    }
}

#[test]
fn blocks_the_open_column() {
    let b = board("X../.O./.O.");
    for seed in 0..32u64 {
        let mut s = Searcher::with_seed(seed);
        assert_eq!(s.best_move(&b).unwrap(), Some(Position::new(0, 1)), "seed {seed}");
    }
}

#[test]
fn o_takes_its_own_win() {
    let b = board("XX./OO./X..");
    assert_eq!(best_move(&b).unwrap(), Some(Position::new(1, 2)));
}

#[test]
fn terminal_boards_have_no_move() {
    for s in ["XXX/OO./...", "XOX/XOO/OXX", "OX./OX./O.X"] {
        let b = board(s);
        assert!(is_terminal(&b));
        let mut searcher = Searcher::with_seed(1);
        let r = searcher.search(&b).unwrap();
        assert_eq!(r.bestmove, None, "{s}");
        assert_eq!(r.nodes, 0);
        assert_eq!(r.score, b.utility().unwrap().score());
    }
}

#[test]
fn none_exactly_when_terminal() {
    let mut s = Searcher::with_seed(11);
    for b in reachable_with_marks(3) {
        let mv = s.best_move(&b).unwrap();
        assert_eq!(mv.is_none(), is_terminal(&b), "board {b}");
        if let Some(m) = mv { assert!(legal_moves(&b).contains(&m)); }
    }
}

#[test]
fn matches_plain_minimax_value() {
    let mut s = Searcher::with_seed(5);
    for b in reachable_with_marks(4) {
        if b.is_terminal() { continue; }
        let expected = reference_value(&b);
        let r = s.search(&b).unwrap();
        assert_eq!(r.score, expected, "score of {b}");
        let chosen = b.apply_move(r.bestmove.expect("move")).unwrap();
        assert_eq!(reference_value(&chosen), expected, "move {:?} on {b}", r.bestmove);
    }
}

#[test]
fn empty_board_is_a_draw() {
    let mut s = Searcher::with_seed(9);
    let r = s.search(&initial_state()).unwrap();
    assert_eq!(r.score, 0);
    assert!(r.nodes > 0);
}

#[test]
fn node_counter_resets_between_searches() {
    let params = SearchParams { seed: Some(0), shuffle_moves: false };
    let mut s = Searcher::new(params);
    let b = board("X../.O./...");
    let first = s.search(&b).unwrap();
    let second = s.search(&b).unwrap();
    assert_eq!(first, second);
    assert_eq!(s.nodes(), second.nodes);
}

#[test]
fn pruning_visits_fewer_nodes_than_the_full_tree() {
    let mut s = Searcher::new(SearchParams { seed: Some(0), shuffle_moves: false });
    let r = s.search(&initial_state()).unwrap();
    // 294778 non-terminal nodes in the unpruned tree
    assert!(r.nodes < 294_778, "nodes {}", r.nodes);
}

#[test]
fn same_seed_same_move() {
    let b = initial_state();
    let a = Searcher::with_seed(77).best_move(&b).unwrap();
    let c = Searcher::with_seed(77).best_move(&b).unwrap();
    assert_eq!(a, c);
}

#[test]
fn tie_breaking_varies_opening_move() {
    let b = initial_state();
    let openings: HashSet<Position> = (0..32u64)
        .filter_map(|seed| Searcher::with_seed(seed).best_move(&b).unwrap())
        .collect();
    assert!(openings.len() > 1, "every seed picked {:?}", openings);
}
