//! Crate-level error type
//!
//! Only the console boundary can fail. Bad player input is reported in-game.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream ended before the run reached GameOver
    #[error("input closed before the game ended")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
