use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tttbot::selfplay::{generate_games_with_progress, summarize, write_records, SelfPlayParams};

#[derive(Parser, Debug)]
#[command(name = "tttbot-selfplay", about = "Play engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Uniformly random opening moves before the engine takes over
    #[arg(long, default_value_t = 0)]
    random_plies: usize,
    /// Play random moves throughout instead of searching
    #[arg(long, default_value_t = false)]
    random: bool,
    /// File of compact starting boards, one per line
    #[arg(long)]
    openings: Option<PathBuf>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        threads: a.threads,
        seed: a.seed,
        random_plies: a.random_plies,
        use_engine: !a.random,
        openings_path: a.openings,
    };
    eprintln!("Generating {} games (threads={}, engine={}, random_plies={})", a.games, a.threads, !a.random, a.random_plies);
    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")?);
    let games = generate_games_with_progress(&params, |_| bar.inc(1)).context("self-play failed")?;
    bar.finish();

    let tally = summarize(&games);
    eprintln!("x wins: {}, o wins: {}, draws: {}", tally.x_wins, tally.o_wins, tally.draws);
    eprintln!("Writing records to {}", a.out.display());
    write_records(&games, &a.out).with_context(|| format!("write {}", a.out.display()))?;
    Ok(())
}
