//! Entity data: the player, monsters, and their hit points

pub mod health;
pub mod player;
pub mod monster;

pub use health::Health;
pub use player::Player;
pub use monster::{Monster, MonsterKind, MonsterTemplate};
