//! Progression systems

pub mod xp;
pub mod scaling;
pub mod upgrades;

pub use scaling::{StageScaling, monster_spawn_chance, is_boss_stage};
pub use upgrades::{Upgrade, UpgradeCost, UpgradeError};
