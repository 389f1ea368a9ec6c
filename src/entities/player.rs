//! The player character

use super::Health;
use crate::progression::xp::{
    level_title, xp_threshold, LEVEL_UP_ATTACK, LEVEL_UP_DEFENSE, LEVEL_UP_HP,
};

/// Starting max HP
pub const BASE_HP: i32 = 100;
/// Starting attack
pub const BASE_ATTACK: i32 = 10;
/// Starting defense
pub const BASE_DEFENSE: i32 = 5;

/// The adventurer, created once per run
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub health: Health,
    pub attack: i32,
    pub defense: i32,
    pub xp: u32,
    pub level: u32,
    pub gold: u32,
    /// Item names in pickup order, duplicates allowed
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(BASE_HP),
            attack: BASE_ATTACK,
            defense: BASE_DEFENSE,
            xp: 0,
            level: 1,
            gold: 0,
            inventory: Vec::new(),
        }
    }

    /// Returns true if this hit brought the player to exactly 0 hp
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health.take_damage(amount)
    }

    pub fn heal(&mut self, amount: i32) {
        self.health.heal(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// Add XP and return true if leveled up.
    ///
    /// Only one level is checked per call, even when `amount` would cover
    /// several thresholds.
    pub fn add_xp(&mut self, amount: u32) -> bool {
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= xp_threshold(self.level) {
            self.level_up();
            true
        } else {
            false
        }
    }

    /// Gain a level: more HP (fully restored), attack and defense
    pub fn level_up(&mut self) {
        self.level += 1;
        self.health.max += LEVEL_UP_HP;
        self.health.restore();
        self.attack += LEVEL_UP_ATTACK;
        self.defense += LEVEL_UP_DEFENSE;
        log::info!("{} reached level {}", self.name, self.level);
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first exact match. Returns false if the item isn't carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Comma-separated inventory, or "Empty"
    pub fn inventory_line(&self) -> String {
        if self.inventory.is_empty() {
            "Empty".to_string()
        } else {
            self.inventory.join(", ")
        }
    }

    /// Multi-line character sheet
    pub fn status(&self) -> String {
        format!(
            "--- {} Status ---\n\
             Level: {} ({})\n\
             HP: {}\n\
             Attack: {}\n\
             Defense: {}\n\
             XP: {}/{}\n\
             Gold: {}\n\
             Inventory: {}\n\
             --------------------------",
            self.name,
            self.level,
            level_title(self.level),
            self.health,
            self.attack,
            self.defense,
            self.xp,
            xp_threshold(self.level),
            self.gold,
            self.inventory_line(),
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Hero")
    }
}
