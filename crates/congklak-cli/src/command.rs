//! Command parsing.

use std::str::FromStr;

use congklak_core::{BoardState, Move};
use congklak_engine::Algorithm;

use crate::error::CliError;

/// A configuration change from `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOption {
    Depth(u8),
    Algorithm(Algorithm),
    Threads(usize),
    Silo(i32),
    OnBoard(i32),
    StealOffense(i32),
    StealDefense(i32),
}

/// A parsed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `new [holes seeds]` -- start a fresh game.
    New(BoardState),
    /// `position` -- set a position with optional moves applied.
    Position(BoardState),
    /// `moves` -- list the legal moves.
    Moves,
    /// `move <hole>` -- play a move for the side to move.
    Move(Move),
    /// `go [depth N]` -- search and report without playing.
    Go { depth: Option<u8> },
    /// `play` -- search and play the chosen move.
    Play,
    /// `show` -- print the board.
    Show,
    /// `notation` -- print the position string.
    Notation,
    /// `perft <depth>` -- count leaf positions.
    Perft(usize),
    /// `set <name> <value>` -- change the selector configuration.
    Set(SetOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "new" => parse_new(args),
        "position" => parse_position(args),
        "moves" => Ok(Command::Moves),
        "move" => {
            let hole = args.first().ok_or(CliError::MissingArgument {
                command: "move",
                argument: "hole",
            })?;
            Ok(Command::Move(parse_move(hole)?))
        }
        "go" => parse_go(args),
        "play" => Ok(Command::Play),
        "show" => Ok(Command::Show),
        "notation" => Ok(Command::Notation),
        "perft" => {
            let depth = args.first().ok_or(CliError::MissingArgument {
                command: "perft",
                argument: "depth",
            })?;
            Ok(Command::Perft(parse_number(depth, "perft depth")?))
        }
        "set" => parse_set(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

fn parse_number<T: FromStr>(text: &str, what: &'static str) -> Result<T, CliError> {
    text.parse().map_err(|_| CliError::InvalidNumber {
        what,
        value: text.to_string(),
    })
}

fn parse_move(text: &str) -> Result<Move, CliError> {
    parse_number(text, "hole").map(Move::new)
}

/// Parse `new` arguments: nothing for the standard game, or holes and seeds.
fn parse_new(args: &[&str]) -> Result<Command, CliError> {
    let board = match args {
        [] => BoardState::standard(),
        [holes, seeds, ..] => BoardState::initial(
            parse_number(holes, "hole count")?,
            parse_number(seeds, "seed count")?,
        )?,
        [_] => {
            return Err(CliError::MissingArgument {
                command: "new",
                argument: "seeds",
            });
        }
    };
    Ok(Command::New(board))
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves 0 6 ...]`
/// - `position notation <board> <side> [moves 0 6 ...]`
fn parse_position(args: &[&str]) -> Result<Command, CliError> {
    let (mut board, rest) = match args {
        ["startpos", rest @ ..] => (BoardState::standard(), rest),
        ["notation", cells, side, rest @ ..] => {
            let notation = format!("{cells} {side}");
            let board = notation
                .parse::<BoardState>()
                .map_err(|source| CliError::InvalidNotation { notation, source })?;
            (board, rest)
        }
        ["notation", ..] => {
            return Err(CliError::MissingArgument {
                command: "position",
                argument: "notation",
            });
        }
        _ => return Err(CliError::MalformedPosition),
    };

    if let ["moves", moves @ ..] = rest {
        for text in moves {
            board = board.apply_move(parse_move(text)?)?;
        }
    }

    Ok(Command::Position(board))
}

/// Parse `go` arguments: nothing, or `depth N`.
fn parse_go(args: &[&str]) -> Result<Command, CliError> {
    let mut depth = None;
    let mut iter = args.iter();
    while let Some(&token) = iter.next() {
        if token == "depth" {
            let value = iter.next().ok_or(CliError::MissingArgument {
                command: "go",
                argument: "depth value",
            })?;
            depth = Some(parse_number(value, "depth")?);
        }
    }
    Ok(Command::Go { depth })
}

fn parse_set(args: &[&str]) -> Result<Command, CliError> {
    let [name, value, ..] = args else {
        return Err(CliError::MissingArgument {
            command: "set",
            argument: "name and value",
        });
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => SetOption::Depth(parse_number(value, "depth")?),
        "algorithm" => SetOption::Algorithm(value.parse()?),
        "threads" => SetOption::Threads(parse_number(value, "thread count")?),
        "silo" => SetOption::Silo(parse_number(value, "weight")?),
        "onboard" => SetOption::OnBoard(parse_number(value, "weight")?),
        "stealoffense" => SetOption::StealOffense(parse_number(value, "weight")?),
        "stealdefense" => SetOption::StealDefense(parse_number(value, "weight")?),
        _ => {
            return Err(CliError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

#[cfg(test)]
mod tests {
    use congklak_core::{BoardState, Move};
    use congklak_engine::Algorithm;

    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("moves").unwrap(), Command::Moves);
        assert_eq!(parse_command("play").unwrap(), Command::Play);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("notation").unwrap(), Command::Notation);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("  ").unwrap(), Command::Unknown(String::new()));
        assert_eq!(
            parse_command("xyzzy 3").unwrap(),
            Command::Unknown("xyzzy".to_string())
        );
    }

    #[test]
    fn parse_new_game() {
        assert_eq!(parse_command("new").unwrap(), Command::New(BoardState::standard()));
        assert_eq!(
            parse_command("new 4 3").unwrap(),
            Command::New(BoardState::initial(4, 3).unwrap())
        );
        assert!(matches!(
            parse_command("new 4"),
            Err(CliError::MissingArgument { command: "new", .. })
        ));
        assert!(matches!(parse_command("new 0 3"), Err(CliError::Board(_))));
        assert!(matches!(
            parse_command("new four 3"),
            Err(CliError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parse_position_startpos() {
        assert_eq!(
            parse_command("position startpos").unwrap(),
            Command::Position(BoardState::standard())
        );
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        let expected = BoardState::standard()
            .make_move(Move::new(0))
            .make_move(Move::new(1));
        assert_eq!(
            parse_command("position startpos moves 0 1").unwrap(),
            Command::Position(expected)
        );
    }

    #[test]
    fn parse_position_notation() {
        let cmd = parse_command("position notation 0,2,3/4/1,0,6/1 2").unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected a position");
        };
        assert_eq!(board.to_string(), "0,2,3/4/1,0,6/1 2");
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position"), Err(CliError::MalformedPosition)));
        assert!(matches!(
            parse_command("position fen x"),
            Err(CliError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position notation 1,2/0/3,4/0"),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("position notation 1,2/0/3/0 1"),
            Err(CliError::InvalidNotation { .. })
        ));
        assert!(matches!(
            parse_command("position startpos moves 0 0"),
            Err(CliError::IllegalMove(_))
        ));
    }

    #[test]
    fn parse_move_command() {
        assert_eq!(parse_command("move 3").unwrap(), Command::Move(Move::new(3)));
        assert!(matches!(
            parse_command("move"),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("move -1"),
            Err(CliError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parse_go() {
        assert_eq!(parse_command("go").unwrap(), Command::Go { depth: None });
        assert_eq!(
            parse_command("go depth 6").unwrap(),
            Command::Go { depth: Some(6) }
        );
        assert!(matches!(
            parse_command("go depth"),
            Err(CliError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_perft() {
        assert_eq!(parse_command("perft 3").unwrap(), Command::Perft(3));
        assert!(parse_command("perft").is_err());
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set depth 5").unwrap(),
            Command::Set(SetOption::Depth(5))
        );
        assert_eq!(
            parse_command("set algorithm baseline").unwrap(),
            Command::Set(SetOption::Algorithm(Algorithm::Baseline))
        );
        assert_eq!(
            parse_command("set Threads 4").unwrap(),
            Command::Set(SetOption::Threads(4))
        );
        assert_eq!(
            parse_command("set stealdefense -3").unwrap(),
            Command::Set(SetOption::StealDefense(-3))
        );
        assert!(matches!(
            parse_command("set algorithm random"),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            parse_command("set hash 16"),
            Err(CliError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("set depth"),
            Err(CliError::MissingArgument { .. })
        ));
    }
}
