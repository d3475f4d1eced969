use std::io::{self, BufRead, Write};
use crate::board::{initial_state, Board, Position};
use crate::error::Result;
use crate::search::{SearchParams, Searcher};

/// Line-oriented front end: `newgame`, `position`, `play`, `go`, `show`,
/// `outcome`, `isready`, `quit`.
pub struct ProtocolEngine {
    board: Board,
    searcher: Searcher,
}

impl Default for ProtocolEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl ProtocolEngine {
    pub fn new(params: SearchParams) -> Self { Self { board: initial_state(), searcher: Searcher::new(params) } }

    pub fn board(&self) -> &Board { &self.board }

    fn cmd_position(&mut self, args: &str) -> Result<()> {
        // position <compact> [moves r,c ...]
        let mut tokens = args.split_whitespace();
        let mut board: Board = match tokens.next() {
            Some("startpos") | None => initial_state(),
            Some(compact) => compact.parse()?,
        };
        if let Some("moves") = tokens.next() {
            for tok in tokens {
                let pos: Position = tok.parse()?;
                board = board.apply_move(pos)?;
            }
        }
        self.board = board;
        Ok(())
    }

    fn cmd_play(&mut self, args: &str) -> Result<()> {
        let pos: Position = args.trim().parse()?;
        self.board = self.board.apply_move(pos)?;
        Ok(())
    }

    fn cmd_go<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let res = self.searcher.search(&self.board)?;
        writeln!(out, "info nodes {} score {}", res.nodes, res.score)?;
        match res.bestmove {
            Some(best) => writeln!(out, "bestmove {}", best)?,
            None => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` once `quit` is seen.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let res = match cmd {
            "" => Ok(()),
            "quit" => return Ok(false),
            "isready" => { writeln!(out, "readyok")?; Ok(()) }
            "newgame" => { self.board = initial_state(); Ok(()) }
            "position" => self.cmd_position(rest),
            "play" => self.cmd_play(rest),
            "go" => self.cmd_go(out),
            "show" => { writeln!(out, "{}", self.board.pretty())?; Ok(()) }
            "outcome" => { writeln!(out, "{}", self.board.outcome())?; Ok(()) }
            _ => Ok(()),
        };
        if let Err(e) = res { writeln!(out, "error {}", e)?; }
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = match line { Ok(s) => s, Err(_) => break };
            if !self.handle_line(&line, &mut stdout)? { break; }
            stdout.flush()?;
        }
        Ok(())
    }
}
