use crate::board::{initial_state, legal_moves, Board, Outcome, Position};
use crate::error::Result;
use crate::perft::GameTally;
use crate::search::{SearchParams, Searcher};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub threads: usize,
    pub seed: u64,
    pub random_plies: usize,           // uniformly random moves before the engine takes over
    pub use_engine: bool,              // false => random play throughout
    pub openings_path: Option<PathBuf>, // optional list of compact boards (one per line)
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 100, threads: 1, seed: 42, random_plies: 0, use_engine: true, openings_path: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: Board,
    pub moves: Vec<Position>,
    pub outcome: Outcome,
    pub nodes: u64, // total nodes explored by the engine over the game
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with_progress(params, |_| {})
}

/// Like `generate_games`, calling `on_game` as each game finishes (from worker threads).
pub fn generate_games_with_progress<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let openings = match params.openings_path {
        Some(ref p) => load_openings(p)?,
        None => Vec::new(),
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads.max(1))
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    info!("self-play: {} games on {} threads (seed={})", params.games, params.threads.max(1), params.seed);
    pool.install(|| {
        (0..params.games)
            .into_par_iter()
            .map(|gi| -> Result<GameRecord> {
                let seed = params.seed.wrapping_add(gi as u64);
                let start = if openings.is_empty() { initial_state() } else { openings[gi % openings.len()] };
                let game = play_game(start, params, seed)?;
                on_game(&game);
                Ok(game)
            })
            .collect()
    })
}

/// One game from `start` until terminal. Deterministic for a given seed.
pub fn play_game(start: Board, params: &SelfPlayParams, seed: u64) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut searcher = Searcher::new(SearchParams { seed: Some(seed), shuffle_moves: true });
    let mut board = start;
    let mut record = GameRecord { start, moves: Vec::new(), outcome: Outcome::InProgress, nodes: 0 };
    while !board.is_terminal() {
        let ply = record.moves.len();
        let mv = if params.use_engine && ply >= params.random_plies {
            let m = searcher.best_move(&board)?;
            record.nodes += searcher.nodes();
            m
        } else {
            select_random_move(&board, &mut rng)
        };
        let Some(m) = mv else { break };
        board = board.apply_move(m)?;
        record.moves.push(m);
    }
    record.outcome = board.outcome();
    debug!("game seed={} moves={} outcome={}", seed, record.moves.len(), record.outcome);
    Ok(record)
}

fn select_random_move(board: &Board, rng: &mut SmallRng) -> Option<Position> {
    let moves = legal_moves(board);
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

pub fn summarize(games: &[GameRecord]) -> GameTally {
    let mut tally = GameTally::default();
    for g in games { tally.record(g.outcome); }
    tally
}

/// Compact boards, one per line; blank lines and `#` comments are skipped.
pub fn load_openings<P: AsRef<Path>>(path: P) -> Result<Vec<Board>> {
    let reader = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') { continue; }
        out.push(raw.parse()?);
    }
    Ok(out)
}

/// One JSON object per game, newline separated.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { std::fs::create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
