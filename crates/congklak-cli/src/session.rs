//! Interactive game session driven by line commands.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use congklak_core::{BoardState, Move, Player, perft};
use congklak_engine::{SearchResult, SelectorConfig};

use crate::command::{Command, SetOption, parse_command};
use crate::error::CliError;

/// A game in progress plus the configuration of the automated player.
///
/// Holds the authoritative board. Human moves come from `move`, automated
/// ones from `play`, and both go through [`BoardState::apply_move`] or the
/// selector's own legal move list.
pub struct Session {
    board: BoardState,
    config: SelectorConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session on the standard starting position.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create a session with a specific selector configuration.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            board: BoardState::standard(),
            config,
        }
    }

    /// The current position.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The current selector configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `out`.
    ///
    /// Bad commands are answered with `error <message>` and skipped. Only I/O
    /// failures end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, out),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => {}
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error {e}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Execute one parsed command.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::New(board) | Command::Position(board) => self.handle_position(board, out),
            Command::Moves => self.handle_moves(out),
            Command::Move(mv) => self.handle_move(mv, out),
            Command::Go { depth } => self.handle_go(depth, out).map(|_| ()),
            Command::Play => self.handle_play(out),
            Command::Show => self.handle_show(out),
            Command::Notation => {
                writeln!(out, "{}", self.board)?;
                Ok(())
            }
            Command::Perft(depth) => self.handle_perft(depth, out),
            Command::Set(option) => self.handle_set(option),
            Command::Quit | Command::Unknown(_) => Ok(()),
        }
    }

    fn handle_position<W: Write>(&mut self, board: BoardState, out: &mut W) -> Result<(), CliError> {
        self.board = board;
        self.report_game_over(out)
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let legal = self.board.legal_moves();
        if legal.is_empty() {
            writeln!(out, "legal")?;
        } else {
            writeln!(out, "legal {legal}")?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), CliError> {
        match self.board.apply_move(mv) {
            Ok(next) => {
                self.board = next;
                self.report_game_over(out)
            }
            Err(e) => {
                warn!(error = %e, "rejected move");
                writeln!(out, "{e}")?;
                Ok(())
            }
        }
    }

    /// Search the current position for the side to move and print the result.
    fn handle_go<W: Write>(&self, depth: Option<u8>, out: &mut W) -> Result<SearchResult, CliError> {
        let config = SelectorConfig {
            depth: depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let selector = config.build()?;
        let result = selector.choose_move(&self.board, self.board.current_player());

        match result.best_move {
            Some(mv) => write!(out, "bestmove {mv}")?,
            None => write!(out, "bestmove none")?,
        }
        writeln!(out, " score {} nodes {}", result.score, result.nodes)?;
        Ok(result)
    }

    fn handle_play<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        if self.board.is_over() {
            return self.report_game_over(out);
        }

        let result = self.handle_go(None, out)?;
        match result.best_move {
            Some(mv) => self.board = self.board.make_move(mv),
            None if !self.board.legal_moves().is_empty() => return Err(CliError::PlayNeedsDepth),
            None => {
                debug!(side = %self.board.current_player(), "no legal move, passing");
                self.board = self.board.pass();
                writeln!(out, "pass")?;
            }
        }
        self.report_game_over(out)
    }

    fn handle_show<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", self.board.pretty())?;
        writeln!(
            out,
            "side {} status {}",
            self.board.current_player(),
            self.board.status()
        )?;
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), CliError> {
        let divided = if depth > 0 {
            perft::divide(&self.board, depth)
        } else {
            Vec::new()
        };
        for (mv, count) in &divided {
            writeln!(out, "{mv}: {count}")?;
        }

        let total = if divided.is_empty() {
            perft::perft(&self.board, depth)
        } else {
            divided.iter().map(|(_, count)| count).sum()
        };
        writeln!(out, "nodes {total}")?;
        Ok(())
    }

    fn handle_set(&mut self, option: SetOption) -> Result<(), CliError> {
        let mut config = self.config;
        match option {
            SetOption::Depth(depth) => config.depth = depth,
            SetOption::Algorithm(algorithm) => config.algorithm = algorithm,
            SetOption::Threads(threads) => config.threads = threads,
            SetOption::Silo(w) => config.weights.silo = w,
            SetOption::OnBoard(w) => config.weights.on_board = w,
            SetOption::StealOffense(w) => config.weights.steal_offense = w,
            SetOption::StealDefense(w) => config.weights.steal_defense = w,
        }
        config.validate()?;
        debug!(?config, "selector configuration updated");
        self.config = config;
        Ok(())
    }

    fn report_game_over<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.board.is_over() {
            writeln!(
                out,
                "gameover {} one {} two {}",
                self.board.status(),
                self.board.store(Player::One),
                self.board.store(Player::Two)
            )?;
        }
        Ok(())
    }
}
