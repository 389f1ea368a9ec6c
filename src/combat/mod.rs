//! Combat system

pub mod damage;
pub mod resolver;

pub use damage::calculate_damage;
pub use resolver::{resolve_round, BattleAction, RoundOutcome, RoundReport};
