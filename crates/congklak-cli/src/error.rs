//! Line-protocol errors.

use congklak_core::{BoardError, IllegalMoveError, NotationError};
use congklak_engine::ConfigError;

/// Errors that can occur while reading or executing a command.
///
/// Everything except [`CliError::Io`] is reported back on the output stream
/// and the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The `position` command is missing `startpos` or `notation`.
    #[error("malformed position command: expected startpos or notation")]
    MalformedPosition,

    /// A position string failed to parse.
    #[error("invalid notation \"{notation}\": {source}")]
    InvalidNotation {
        /// The rejected text.
        notation: String,
        /// Why it was rejected.
        source: NotationError,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid {what}: \"{value}\"")]
    InvalidNumber {
        /// What the number was for.
        what: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// A command was missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// `set` with a name that is not a known option.
    #[error("unknown option \"{name}\"")]
    UnknownOption { name: String },

    /// `play` at depth zero has no move to make.
    #[error("play needs a search depth of at least 1")]
    PlayNeedsDepth,

    /// A move in a `position ... moves` list was not legal.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),

    /// `new` with unsupported dimensions.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// An option value was rejected by the selector configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
