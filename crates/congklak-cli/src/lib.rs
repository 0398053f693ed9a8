//! Line-protocol front end for the Congklak engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SetOption, parse_command};
pub use error::CliError;
pub use session::Session;
