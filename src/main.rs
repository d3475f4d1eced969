use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;
use tttbot::board::{initial_state, Board, Mark, Outcome, Position};
use tttbot::protocol::ProtocolEngine;
use tttbot::search::{SearchParams, Searcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the minimax engine", long_about = None)]
struct Args {
    /// Your mark: 'x', 'o', or 'none' to watch the engine play itself
    #[arg(long, default_value = "x")]
    human: String,

    /// Seed for the engine's tie-breaking; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Starting board in compact notation (e.g. "X../.O./...")
    #[arg(long)]
    board: Option<String>,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,

    /// Run the line protocol on stdin/stdout instead of the console game
    #[arg(long)]
    protocol: bool,
}

fn parse_human(s: &str) -> Result<Option<Mark>> {
    match s.to_lowercase().as_str() {
        "x" => Ok(Some(Mark::X)),
        "o" => Ok(Some(Mark::O)),
        "none" | "-" => Ok(None),
        _ => anyhow::bail!("Invalid mark: use 'x', 'o' or 'none'"),
    }
}

fn get_human_move(board: &Board) -> Result<Position> {
    let legal = board.legal_moves();
    loop {
        print!("Enter your move as row,col (e.g. 1,1): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { anyhow::bail!("stdin closed"); }
        match input.trim().parse::<Position>() {
            Ok(pos) if legal.contains(&pos) => return Ok(pos),
            Ok(_) => println!("Illegal move! Pick an empty cell in 0..2,0..2."),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = SearchParams { seed: args.seed, ..SearchParams::default() };
    if args.protocol {
        ProtocolEngine::new(params).run_loop()?;
        return Ok(());
    }

    let human = parse_human(&args.human)?;
    let mut board = match args.board {
        Some(ref s) => s.parse::<Board>().with_context(|| format!("parse --board {s}"))?,
        None => initial_state(),
    };
    let mut searcher = Searcher::new(params);

    loop {
        println!("\n{}\n", board.pretty());
        match board.outcome() {
            Outcome::XWins => { println!("X wins!"); break; }
            Outcome::OWins => { println!("O wins!"); break; }
            Outcome::Draw => { println!("Game is a draw!"); break; }
            Outcome::InProgress => {}
        }

        let to_move = board.side_to_move();
        println!("{}'s turn", to_move);
        let mv = if human == Some(to_move) {
            get_human_move(&board)?
        } else {
            if args.verbose { println!("Thinking..."); }
            let start = Instant::now();
            let res = searcher.search(&board)?;
            if args.verbose {
                println!("nodes: {}, score: {}, elapsed: {:.3}s", res.nodes, res.score, start.elapsed().as_secs_f64());
            }
            let Some(best) = res.bestmove else { break };
            println!("Computer plays: {}", best);
            best
        };
        board = board.apply_move(mv)?;
    }

    Ok(())
}
