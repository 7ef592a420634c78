use nsi_core::Direction;

/// A command accepted on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Begin a new game.
    Start,
    /// Leave the game.
    Exit,
}

/// A parsed command while exploring the campus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Show the full command list.
    Help,
    /// Show the inventory and report card.
    Backpack,
    /// Count the items in the current room.
    Explore,
    /// Read an item's description.
    Inspect {
        /// The item name, lowercased and trimmed.
        item: String,
    },
    /// Pick up one unit of an item.
    Pickup {
        /// The item name, lowercased and trimmed.
        item: String,
    },
    /// Leave the game.
    Exit,
    /// Anything else.
    Unknown {
        /// The input as typed.
        input: String,
    },
}

/// Verb synonyms for command parsing.
pub(crate) const EXIT_VERB: &str = "exit";
const START_VERB: &str = "start";
const HELP_VERBS: &[&str] = &["h", "help"];
const BACKPACK_VERBS: &[&str] = &["ba", "backpack"];
const EXPLORE_VERBS: &[&str] = &["ex", "explore"];
const INSPECT_VERBS: &[&str] = &["in", "inspect"];
const PICKUP_VERBS: &[&str] = &["pk", "pickup"];

/// Parse a main-menu line. Only `start` and `exit` are accepted.
pub fn parse_menu(input: &str) -> Option<MenuCommand> {
    match input.trim().to_lowercase().as_str() {
        START_VERB => Some(MenuCommand::Start),
        EXIT_VERB => Some(MenuCommand::Exit),
        _ => None,
    }
}

/// Parse an exploring-state line into a command.
///
/// Input is lowercased first. Inspect and pickup need an argument: the first
/// word must be one of their aliases and the trimmed remainder is the item
/// name. A bare alias with nothing after it is unknown.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();

    if input == EXIT_VERB {
        return Command::Exit;
    }
    if HELP_VERBS.contains(&input.as_str()) {
        return Command::Help;
    }
    if BACKPACK_VERBS.contains(&input.as_str()) {
        return Command::Backpack;
    }
    if let Some(direction) = Direction::parse(&input) {
        return Command::Move { direction };
    }
    if EXPLORE_VERBS.contains(&input.as_str()) {
        return Command::Explore;
    }

    if let Some((verb, rest)) = input.split_once(char::is_whitespace) {
        let item = rest.trim().to_string();
        if PICKUP_VERBS.contains(&verb) {
            return Command::Pickup { item };
        }
        if INSPECT_VERBS.contains(&verb) {
            return Command::Inspect { item };
        }
    }

    Command::Unknown { input }
}
