//! Command parsing for player input.

mod command;

pub use command::{Command, MenuCommand, parse_command, parse_menu};
pub(crate) use command::EXIT_VERB;
