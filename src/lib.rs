//! Portalcrawl - A turn-based text dungeon crawler
//!
//! Explore grid dungeons, fight what lives in them, and step through the
//! portal to the hub once a stage is clear.

pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod progression;
pub mod ui;
pub mod data;
pub mod error;

// Re-export commonly used types
pub use game::{Game, GameState, RunSummary};
pub use data::GameConfig;
pub use error::GameError;
pub use world::Dungeon;
