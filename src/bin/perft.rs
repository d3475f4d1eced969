use clap::Parser;
use std::time::Instant;
use tttbot::board::{initial_state, Board};
use tttbot::perft::{perft, perft_parallel, tally_games};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree enumeration driver for tttbot")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Compact board or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Also count wins/draws over every complete game
    #[arg(long, default_value_t = false)]
    tally: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board: Board = if args.board == "startpos" { initial_state() } else { args.board.parse()? };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| if args.threads <= 1 { perft(&board, args.depth) } else { perft_parallel(&board, args.depth) });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }

    if args.tally {
        let t = tally_games(&board);
        println!("games: {} x: {} o: {} draw: {}", t.total(), t.x_wins, t.o_wins, t.draws);
    }
    Ok(())
}
