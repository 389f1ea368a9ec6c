//! Text user interface
//!
//! The console boundary and the fixed narration the engine prints.

pub mod console;
pub mod text;

pub use console::{Console, ScriptedConsole, StdConsole};
