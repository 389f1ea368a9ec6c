//! Exploration command parser
//!
//! Input arrives trimmed and lower-cased. Parse failures carry the message
//! shown to the player.

use thiserror::Error;

use crate::world::Direction;

/// A recognised exploration command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// `move portal`: leave a cleared stage from the exit room
    Portal,
    Status,
    Inventory,
    Take(String),
    Attack,
    Help,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command. Type 'help' for available commands.")]
    Unknown,
    #[error("Move where? Specify a direction (e.g., 'move north') or 'move portal'.")]
    MissingDirection,
    #[error("You can't go that way.")]
    UnknownDirection,
    #[error("Take what? Specify an item (e.g., 'take health potion').")]
    MissingItem,
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    match verb {
        "move" | "go" => match rest {
            "" => Err(CommandError::MissingDirection),
            "portal" => Ok(Command::Portal),
            dir => Direction::parse(dir)
                .map(Command::Move)
                .ok_or(CommandError::UnknownDirection),
        },
        "take" => {
            if rest.is_empty() {
                Err(CommandError::MissingItem)
            } else {
                Ok(Command::Take(rest.to_string()))
            }
        }
        "status" if rest.is_empty() => Ok(Command::Status),
        "inventory" if rest.is_empty() => Ok(Command::Inventory),
        "attack" => Ok(Command::Attack),
        "help" if rest.is_empty() => Ok(Command::Help),
        _ => Err(CommandError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_command("move north"), Ok(Command::Move(Direction::North)));
        assert_eq!(parse_command("move   west"), Ok(Command::Move(Direction::West)));
        assert_eq!(parse_command("move portal"), Ok(Command::Portal));
        assert_eq!(parse_command("move"), Err(CommandError::MissingDirection));
        assert_eq!(parse_command("move up"), Err(CommandError::UnknownDirection));
    }

    #[test]
    fn test_parse_take_keeps_multiword_name() {
        assert_eq!(
            parse_command("take health potion"),
            Ok(Command::Take("health potion".to_string()))
        );
        assert_eq!(parse_command("take"), Err(CommandError::MissingItem));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("status"), Ok(Command::Status));
        assert_eq!(parse_command("inventory"), Ok(Command::Inventory));
        assert_eq!(parse_command("attack"), Ok(Command::Attack));
        assert_eq!(parse_command("help"), Ok(Command::Help));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown));
        assert_eq!(parse_command(""), Err(CommandError::Unknown));
        assert_eq!(
            CommandError::Unknown.to_string(),
            "Unknown command. Type 'help' for available commands."
        );
    }
}
