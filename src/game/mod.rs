//! Game module - Core game logic and state management

mod state;
mod battle;
mod hub;
pub mod commands;

pub use state::{Game, GameState, Encounter, EncounterOrigin, RunSummary};
pub use commands::{parse_command, Command, CommandError};
